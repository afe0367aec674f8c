//! Field schema types

use serde::{Deserialize, Serialize};

/// One named, typed column of a tabular schema
///
/// The type tag is free-form and interpreted by the downstream indexer;
/// this component does not validate it against a closed type system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Column name
    pub name: String,
    /// Type tag, e.g. "string" or "integer"
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldSpec {
    /// Create a new field spec
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// Ordered sequence of field specs
///
/// Order is significant: it maps to column position. Duplicate names are
/// not rejected here; the downstream indexer owns that rule if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSchema {
    fields: Vec<FieldSpec>,
}

impl FieldSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    pub fn push(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate the fields in column order
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Column names in order
    pub fn names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Type tags in order
    pub fn type_tags(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.field_type.clone()).collect()
    }

    /// The parallel-lists wire shape: `[names, types]`
    pub fn to_parallel_lists(&self) -> (Vec<String>, Vec<String>) {
        (self.names(), self.type_tags())
    }

    /// The fixed syslog-style schema used by the `log` and `regex` formats
    pub fn syslog() -> Self {
        Self::from(vec![
            FieldSpec::new("priority", "string"),
            FieldSpec::new("header", "string"),
            FieldSpec::new("message", "string"),
        ])
    }
}

impl From<Vec<FieldSpec>> for FieldSchema {
    fn from(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }
}

impl IntoIterator for FieldSchema {
    type Item = FieldSpec;
    type IntoIter = std::vec::IntoIter<FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Detection metadata from the `separated` path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeparatedDetail {
    /// Delimiter byte that was actually used
    pub delimiter: u8,
    /// Name of the reader dialect that claimed the parse
    pub dialect: String,
}

/// Successful inference outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inference {
    /// The inferred schema
    pub schema: FieldSchema,
    /// Present only when the `separated` analyzer ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<SeparatedDetail>,
}

impl Inference {
    /// Wrap a schema with no detection metadata
    pub fn from_schema(schema: FieldSchema) -> Self {
        Self {
            schema,
            detail: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_lists_preserve_order() {
        let schema = FieldSchema::from(vec![
            FieldSpec::new("a", "integer"),
            FieldSpec::new("b", "string"),
        ]);
        let (names, types) = schema.to_parallel_lists();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(types, vec!["integer", "string"]);
    }

    #[test]
    fn test_syslog_shape() {
        let schema = FieldSchema::syslog();
        assert_eq!(schema.names(), vec!["priority", "header", "message"]);
        assert!(schema.iter().all(|f| f.field_type == "string"));
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let schema = FieldSchema::from(vec![
            FieldSpec::new("x", "string"),
            FieldSpec::new("x", "integer"),
        ]);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_field_spec_wire_shape() {
        let json = serde_json::to_value(FieldSpec::new("msg", "string")).unwrap();
        assert_eq!(json["name"], "msg");
        assert_eq!(json["type"], "string");
    }
}
