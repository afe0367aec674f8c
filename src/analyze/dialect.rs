//! Reader dialects for delimited text
//!
//! A dialect is a parsing convention (quoting rule) that, combined with a
//! candidate delimiter, can claim ownership of a parse when the resulting
//! table is uniform. Callers supply dialects as an ordered list; earlier
//! entries win ties.

use serde::{Deserialize, Serialize};

/// Quoting convention for a delimited reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Quoting {
    /// Fields may be wrapped in a quote character
    Quoted(u8),
    /// Quote characters carry no special meaning
    None,
}

/// A registered delimited-reader dialect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderDialect {
    /// Short identifier reported back to the caller (e.g. "csv", "plain")
    pub name: String,
    /// Quoting convention
    pub quoting: Quoting,
}

impl ReaderDialect {
    /// Excel-style reader: fields may be wrapped in double quotes
    pub fn quoted() -> Self {
        Self {
            name: "csv".to_string(),
            quoting: Quoting::Quoted(b'"'),
        }
    }

    /// Plain reader: no quoting, every delimiter splits
    pub fn plain() -> Self {
        Self {
            name: "plain".to_string(),
            quoting: Quoting::None,
        }
    }

    /// The default ordered candidate set
    pub fn defaults() -> Vec<Self> {
        vec![Self::quoted(), Self::plain()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let dialects = ReaderDialect::defaults();
        assert_eq!(dialects.len(), 2);
        assert_eq!(dialects[0].name, "csv");
        assert_eq!(dialects[1].name, "plain");
    }

    #[test]
    fn test_quoted_dialect() {
        let dialect = ReaderDialect::quoted();
        assert_eq!(dialect.quoting, Quoting::Quoted(b'"'));
    }
}
