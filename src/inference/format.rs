//! Format declarations and the format-handler registry
//!
//! Dispatch is an open set: built-in handlers cover `separated`, `log`
//! and `regex`, and callers can register handlers for new format
//! families without touching the dispatcher.

use std::io::Read;

use crate::analyze;

use super::config::InferenceOptions;
use super::error::InferenceError;
use super::types::{FieldSchema, FieldSpec, Inference, SeparatedDetail};

/// Declared format family of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFormat {
    /// Delimiter-based tabular text
    Separated,
    /// Syslog-style lines with a fixed shape
    Log,
    /// Regex-extracted lines (placeholder shape)
    Regex,
    /// Any other tag, kept verbatim for registry lookup and error text
    Other(String),
}

impl FileFormat {
    /// Parse a wire tag; unknown tags are carried as data, never an error
    pub fn parse(tag: &str) -> Self {
        match tag {
            "separated" => FileFormat::Separated,
            "log" => FileFormat::Log,
            "regex" => FileFormat::Regex,
            other => FileFormat::Other(other.to_string()),
        }
    }

    /// The wire tag for this format
    pub fn tag(&self) -> &str {
        match self {
            FileFormat::Separated => "separated",
            FileFormat::Log => "log",
            FileFormat::Regex => "regex",
            FileFormat::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One format family's inference strategy
pub trait FormatHandler: Send + Sync {
    /// The wire tag this handler claims
    fn tag(&self) -> &str;

    /// Infer a schema from the source
    ///
    /// The handler may read the source to its end but must not assume
    /// ownership; opening and closing stay with the caller.
    fn infer(
        &self,
        source: &mut dyn Read,
        options: &InferenceOptions,
    ) -> Result<Inference, InferenceError>;
}

/// Delimiter-based tabular text: delegate to the delimited-text analyzer
struct SeparatedHandler;

impl FormatHandler for SeparatedHandler {
    fn tag(&self) -> &str {
        "separated"
    }

    fn infer(
        &self,
        source: &mut dyn Read,
        options: &InferenceOptions,
    ) -> Result<Inference, InferenceError> {
        let mut content = Vec::new();
        source.read_to_end(&mut content)?;

        let analysis = analyze::analyze(
            &content,
            options.encoding,
            &options.dialects,
            &options.delimiter_candidates(),
        )?;

        let schema = FieldSchema::from(
            analysis
                .columns
                .iter()
                .map(|c| FieldSpec::new(c.name.clone(), c.type_tag.clone()))
                .collect::<Vec<_>>(),
        );

        Ok(Inference {
            schema,
            detail: Some(SeparatedDetail {
                delimiter: analysis.delimiter,
                dialect: analysis.dialect,
            }),
        })
    }
}

/// Syslog-style lines: fixed shape, no file inspection
struct LogHandler;

impl FormatHandler for LogHandler {
    fn tag(&self) -> &str {
        "log"
    }

    fn infer(
        &self,
        _source: &mut dyn Read,
        _options: &InferenceOptions,
    ) -> Result<Inference, InferenceError> {
        Ok(Inference::from_schema(FieldSchema::syslog()))
    }
}

/// Regex-extracted lines
///
/// Currently identical to the `log` shortcut.
// TODO: derive fields from named capture groups instead of the syslog
// fallback.
struct RegexHandler;

impl FormatHandler for RegexHandler {
    fn tag(&self) -> &str {
        "regex"
    }

    fn infer(
        &self,
        _source: &mut dyn Read,
        _options: &InferenceOptions,
    ) -> Result<Inference, InferenceError> {
        Ok(Inference::from_schema(FieldSchema::syslog()))
    }
}

/// Registry of format handlers
///
/// Lookup is by wire tag; a later registration with the same tag shadows
/// an earlier one.
pub struct FormatRegistry {
    handlers: Vec<Box<dyn FormatHandler>>,
}

impl FormatRegistry {
    /// Registry with no handlers
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registry with the built-in handlers
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(SeparatedHandler));
        registry.register(Box::new(LogHandler));
        registry.register(Box::new(RegexHandler));
        registry
    }

    /// Register a handler
    pub fn register(&mut self, handler: Box<dyn FormatHandler>) {
        self.handlers.push(handler);
    }

    /// Find the handler for a tag
    pub fn get(&self, tag: &str) -> Option<&dyn FormatHandler> {
        self.handlers
            .iter()
            .rev()
            .find(|h| h.tag() == tag)
            .map(|h| h.as_ref())
    }

    /// Registered tags, in registration order
    pub fn tags(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.tag()).collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(FileFormat::parse("separated"), FileFormat::Separated);
        assert_eq!(FileFormat::parse("log"), FileFormat::Log);
        assert_eq!(FileFormat::parse("regex"), FileFormat::Regex);
    }

    #[test]
    fn test_parse_unknown_tag_kept_verbatim() {
        let format = FileFormat::parse("avro");
        assert_eq!(format, FileFormat::Other("avro".to_string()));
        assert_eq!(format.tag(), "avro");
    }

    #[test]
    fn test_builtin_registry_tags() {
        let registry = FormatRegistry::builtin();
        assert_eq!(registry.tags(), vec!["separated", "log", "regex"]);
        assert!(registry.get("log").is_some());
        assert!(registry.get("avro").is_none());
    }

    #[test]
    fn test_later_registration_shadows() {
        struct FixedLog;
        impl FormatHandler for FixedLog {
            fn tag(&self) -> &str {
                "log"
            }
            fn infer(
                &self,
                _source: &mut dyn Read,
                _options: &InferenceOptions,
            ) -> Result<Inference, InferenceError> {
                Ok(Inference::from_schema(FieldSchema::from(vec![
                    FieldSpec::new("line", "string"),
                ])))
            }
        }

        let mut registry = FormatRegistry::builtin();
        registry.register(Box::new(FixedLog));

        let handler = registry.get("log").unwrap();
        let inference = handler
            .infer(&mut Cursor::new(Vec::new()), &InferenceOptions::default())
            .unwrap();
        assert_eq!(inference.schema.names(), vec!["line"]);
    }

    #[test]
    fn test_log_handler_ignores_source() {
        let registry = FormatRegistry::builtin();
        let handler = registry.get("log").unwrap();

        // A reader that fails on any read; the log shortcut must not touch it
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("must not be read"))
            }
        }

        let inference = handler
            .infer(&mut FailingReader, &InferenceOptions::default())
            .unwrap();
        assert_eq!(inference.schema.len(), 3);
    }
}
