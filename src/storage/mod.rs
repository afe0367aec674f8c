//! File-store abstraction
//!
//! Defines the FileStore trait the boundary uses to resolve uploaded
//! file paths, and a local-filesystem implementation. The store hands
//! out readers; opening and closing are scoped to the caller.

use std::io::Read;

/// Error type for file-store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl StoreError {
    fn from_io(path: &str, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::NotFound(path.to_string()),
            std::io::ErrorKind::PermissionDenied => StoreError::PermissionDenied(path.to_string()),
            _ => StoreError::Io(e.to_string()),
        }
    }
}

/// Trait for file stores
///
/// Abstracts the filesystem the upload paths resolve against, so tests
/// and non-local deployments can substitute their own.
pub trait FileStore: Send + Sync {
    /// Open a file for reading
    fn open(&self, path: &str) -> Result<Box<dyn Read>, StoreError>;

    /// Read a file's full contents
    fn read(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        let mut source = self.open(path)?;
        let mut content = Vec::new();
        source
            .read_to_end(&mut content)
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(content)
    }
}

pub mod filesystem;

pub use filesystem::LocalFileStore;
