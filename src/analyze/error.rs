//! Error types for delimited-text analysis

use thiserror::Error;

/// Errors that can occur while analyzing delimited content
#[derive(Error, Debug, Clone)]
pub enum AnalyzeError {
    /// Content could not be decoded with the declared encoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Content is empty or whitespace-only
    #[error("No records found in the sample")]
    EmptySource,

    /// No candidate delimiter/dialect combination produced a uniform table
    #[error("No reader dialect matched the sample ({candidates} combinations probed)")]
    NoDialectMatch { candidates: usize },

    /// CSV reader error
    #[error("Reader error: {0}")]
    Reader(String),
}

impl From<csv::Error> for AnalyzeError {
    fn from(e: csv::Error) -> Self {
        AnalyzeError::Reader(e.to_string())
    }
}
