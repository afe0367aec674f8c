//! Local filesystem file store
//!
//! ## Security
//!
//! All path operations are validated to prevent path traversal. Paths
//! containing ".." are rejected, and resolved paths are verified to
//! remain within the base directory.

use std::fs::File;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use super::{FileStore, StoreError};

/// File store rooted at a base directory
pub struct LocalFileStore {
    base_path: PathBuf,
}

impl LocalFileStore {
    /// Create a store rooted at `base_path`
    ///
    /// All operations are restricted to the base path; traversal
    /// attempts (containing "..") are rejected.
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Resolve a path relative to the base path with traversal checks
    fn resolve_path(&self, path: &str) -> Result<PathBuf, StoreError> {
        let normalized = path.trim_start_matches('/');

        if normalized.contains("..") {
            return Err(StoreError::PermissionDenied(
                "Path traversal (..) not allowed".to_string(),
            ));
        }

        let full = self.base_path.join(normalized);

        for component in full.components() {
            if matches!(component, Component::ParentDir) {
                return Err(StoreError::PermissionDenied(
                    "Path traversal not allowed".to_string(),
                ));
            }
        }

        if full.exists() {
            let canonical = full
                .canonicalize()
                .map_err(|e| StoreError::Io(format!("Failed to resolve path: {}", e)))?;

            let base_canonical = self
                .base_path
                .canonicalize()
                .unwrap_or_else(|_| self.base_path.clone());

            if !canonical.starts_with(&base_canonical) {
                return Err(StoreError::PermissionDenied(
                    "Path escapes base directory".to_string(),
                ));
            }

            return Ok(canonical);
        }

        Ok(full)
    }
}

impl FileStore for LocalFileStore {
    fn open(&self, path: &str) -> Result<Box<dyn Read>, StoreError> {
        let full = self.resolve_path(path)?;
        let file = File::open(&full).map_err(|e| StoreError::from_io(path, e))?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_open_and_read() {
        let dir = TempDir::new().unwrap();
        let mut file = File::create(dir.path().join("data.csv")).unwrap();
        writeln!(file, "a,b").unwrap();

        let store = LocalFileStore::new(dir.path());
        let content = store.read("data.csv").unwrap();
        assert_eq!(content, b"a,b\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path());

        let err = store.open("absent.csv").err().unwrap();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_traversal_rejected() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path());

        let err = store.open("../etc/passwd").err().unwrap();
        assert!(matches!(err, StoreError::PermissionDenied(_)));
    }

    #[test]
    fn test_leading_slash_is_relative() {
        let dir = TempDir::new().unwrap();
        let mut file = File::create(dir.path().join("upload.log")).unwrap();
        writeln!(file, "hello").unwrap();

        let store = LocalFileStore::new(dir.path());
        assert!(store.open("/upload.log").is_ok());
    }
}
