//! User-facing message catalog
//!
//! Passed into the handlers explicitly so deployments can swap in a
//! translated catalog; templates use `%s` for the single substituted
//! value.

/// Template catalog for boundary responses
#[derive(Debug, Clone)]
pub struct Messages {
    /// Unsupported format tag; `%s` is the tag
    pub file_type_not_supported: &'static str,
    /// Create-collection payload absent or empty
    pub collection_missing: &'static str,
    /// Collection created and content indexed
    pub collection_saved: &'static str,
    /// Bulk import: everything imported
    pub import_all: &'static str,
    /// Bulk import: nothing imported
    pub import_none: &'static str,
    /// Bulk import: some items imported
    pub import_partial: &'static str,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            file_type_not_supported: "File type %s not supported.",
            collection_missing: "Collection missing.",
            collection_saved: "Collection saved.",
            import_all: "Collection(s) or core(s) imported successfully!",
            import_none: "There was an error importing the collection(s) or core(s)",
            import_partial: "Collection(s) or core(s) partially imported",
        }
    }
}

impl Messages {
    /// Substitute `value` for the first `%s` in a template
    pub fn render(template: &str, value: &str) -> String {
        template.replacen("%s", value, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_once() {
        assert_eq!(
            Messages::render("File type %s not supported.", "avro"),
            "File type avro not supported."
        );
    }

    #[test]
    fn test_render_without_placeholder() {
        assert_eq!(Messages::render("Collection missing.", "x"), "Collection missing.");
    }
}
