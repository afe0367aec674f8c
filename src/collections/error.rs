//! Error types for collection-controller operations

use thiserror::Error;

/// Errors reported by the collection controller
#[derive(Error, Debug, Clone)]
pub enum ControllerError {
    /// The backing search-index service rejected the call
    #[error("Collection service error: {0}")]
    Service(String),

    /// Target collection or core does not exist
    #[error("Collection not found: {0}")]
    NotFound(String),

    /// A collection or core with that name already exists
    #[error("Collection already exists: {0}")]
    AlreadyExists(String),

    /// Request payload was malformed
    #[error("Invalid collection payload: {0}")]
    InvalidPayload(String),
}
