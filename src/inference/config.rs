//! Configuration for schema inference

use serde::{Deserialize, Serialize};

use crate::analyze::{ReaderDialect, TextEncoding};

/// Options consumed by the `separated` inference path
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceOptions {
    /// Field separator; only the first byte is used as the candidate
    /// delimiter
    pub field_separator: String,

    /// Site text encoding of uploaded files
    pub encoding: TextEncoding,

    /// Ordered candidate reader dialects
    pub dialects: Vec<ReaderDialect>,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            field_separator: ",".to_string(),
            encoding: TextEncoding::Utf8,
            dialects: ReaderDialect::defaults(),
        }
    }
}

impl InferenceOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom options
    pub fn builder() -> InferenceOptionsBuilder {
        InferenceOptionsBuilder::default()
    }

    /// The one-element delimiter-candidate list handed to the analyzer
    ///
    /// Falls back to ',' when the separator string is empty.
    pub fn delimiter_candidates(&self) -> Vec<u8> {
        vec![self.field_separator.bytes().next().unwrap_or(b',')]
    }
}

/// Builder for [`InferenceOptions`]
#[derive(Debug, Default)]
pub struct InferenceOptionsBuilder {
    options: InferenceOptions,
}

impl InferenceOptionsBuilder {
    /// Set the field separator
    pub fn field_separator(mut self, separator: impl Into<String>) -> Self {
        self.options.field_separator = separator.into();
        self
    }

    /// Set the text encoding
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.options.encoding = encoding;
        self
    }

    /// Replace the candidate dialect list
    pub fn dialects(mut self, dialects: Vec<ReaderDialect>) -> Self {
        self.options.dialects = dialects;
        self
    }

    /// Append a candidate dialect
    pub fn register_dialect(mut self, dialect: ReaderDialect) -> Self {
        self.options.dialects.push(dialect);
        self
    }

    /// Build the options
    pub fn build(self) -> InferenceOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = InferenceOptions::default();
        assert_eq!(options.field_separator, ",");
        assert_eq!(options.encoding, TextEncoding::Utf8);
        assert_eq!(options.dialects.len(), 2);
    }

    #[test]
    fn test_builder() {
        let options = InferenceOptions::builder()
            .field_separator("\t")
            .encoding(TextEncoding::Utf8Lossy)
            .build();
        assert_eq!(options.delimiter_candidates(), vec![b'\t']);
        assert_eq!(options.encoding, TextEncoding::Utf8Lossy);
    }

    #[test]
    fn test_empty_separator_falls_back_to_comma() {
        let options = InferenceOptions::builder().field_separator("").build();
        assert_eq!(options.delimiter_candidates(), vec![b',']);
    }
}
