//! Cell-level type guessing for delimited columns

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Guessed type of a single cell or column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellType {
    /// "true" / "false" (case-insensitive)
    Boolean,
    /// Whole number parseable as i64
    Integer,
    /// Finite floating-point number
    Double,
    /// ISO 8601 date or date-time
    Date,
    /// Anything else
    Text,
}

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:?\d{2})?$").unwrap()
});

impl CellType {
    /// The free-form type tag handed to the downstream indexer
    pub fn tag(&self) -> &'static str {
        match self {
            CellType::Boolean => "boolean",
            CellType::Integer => "integer",
            CellType::Double => "double",
            CellType::Date => "date",
            CellType::Text => "string",
        }
    }

    /// Widening merge of two observed types within one column
    ///
    /// Integer widens to Double; everything else that disagrees collapses
    /// to Text.
    pub fn merge_with(self, other: CellType) -> CellType {
        match (self, other) {
            (a, b) if a == b => a,
            (CellType::Integer, CellType::Double) | (CellType::Double, CellType::Integer) => {
                CellType::Double
            }
            _ => CellType::Text,
        }
    }
}

/// Guess the type of a single cell value
///
/// Returns `None` for empty cells so they do not narrow the column type.
pub fn guess_cell(value: &str) -> Option<CellType> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return Some(CellType::Boolean);
    }

    if value.parse::<i64>().is_ok() {
        return Some(CellType::Integer);
    }

    if let Ok(f) = value.parse::<f64>() {
        if f.is_finite() {
            return Some(CellType::Double);
        }
    }

    if DATE_REGEX.is_match(value) || DATETIME_REGEX.is_match(value) {
        return Some(CellType::Date);
    }

    Some(CellType::Text)
}
