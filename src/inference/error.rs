//! Error types for schema inference

use thiserror::Error;

/// Errors that can occur during schema inference
///
/// The legacy boundary reported faults as a bare negative status with a
/// free-text message; here every fault is one of a closed set of kinds
/// and the boundary derives the status from the kind.
#[derive(Error, Debug, Clone)]
pub enum InferenceError {
    /// The declared format tag has no registered handler
    #[error("Unsupported file type: {format}")]
    UnsupportedFormat { format: String },

    /// The byte source could not be read
    #[error("Resource access error: {0}")]
    ResourceAccess(String),

    /// The delimited-text analyzer rejected the content
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A fault that fits no other kind
    #[error("Internal error: {0}")]
    Internal(String),
}

impl InferenceError {
    /// Integer status reported at the JSON boundary
    ///
    /// 1 marks the recoverable, user-facing unsupported-format case;
    /// everything else maps to -1.
    pub fn status(&self) -> i64 {
        match self {
            InferenceError::UnsupportedFormat { .. } => 1,
            _ => -1,
        }
    }
}

impl From<std::io::Error> for InferenceError {
    fn from(e: std::io::Error) -> Self {
        InferenceError::ResourceAccess(e.to_string())
    }
}

impl From<crate::analyze::AnalyzeError> for InferenceError {
    fn from(e: crate::analyze::AnalyzeError) -> Self {
        InferenceError::Analysis(e.to_string())
    }
}

impl From<crate::storage::StoreError> for InferenceError {
    fn from(e: crate::storage::StoreError) -> Self {
        InferenceError::ResourceAccess(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let unsupported = InferenceError::UnsupportedFormat {
            format: "avro".to_string(),
        };
        assert_eq!(unsupported.status(), 1);
        assert_eq!(InferenceError::Analysis("bad".to_string()).status(), -1);
        assert_eq!(InferenceError::Internal("boom".to_string()).status(), -1);
    }

    #[test]
    fn test_unsupported_message_contains_tag() {
        let err = InferenceError::UnsupportedFormat {
            format: "avro".to_string(),
        };
        assert!(err.to_string().contains("avro"));
    }
}
