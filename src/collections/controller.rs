//! The controller trait for the external search-index service

use serde::{Deserialize, Serialize};

use crate::inference::FieldSpec;

use super::error::ControllerError;

/// Deployment-specific flavor of an index unit
///
/// "Core" and "collection" name the same concept under different
/// topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Collection,
    Core,
}

impl ImportKind {
    /// The wire tag for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            ImportKind::Collection => "collection",
            ImportKind::Core => "core",
        }
    }
}

/// Descriptor of an existing index unit to import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Importable {
    /// Name of the collection or core
    pub name: String,
    /// Which flavor of index unit this is
    #[serde(rename = "type")]
    pub kind: ImportKind,
}

impl Importable {
    /// Create a new import descriptor
    pub fn new(name: impl Into<String>, kind: ImportKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Seam to the external search-index service
///
/// Every operation may fail with a descriptive error; none of them
/// panic. Implementations talk to the actual index backend; tests
/// substitute mocks.
pub trait CollectionController: Send + Sync {
    /// Collections present in the backend but not yet managed here
    fn new_collections(&self) -> Result<Vec<String>, ControllerError>;

    /// Cores present in the backend but not yet managed here
    fn new_cores(&self) -> Result<Vec<String>, ControllerError>;

    /// Create a collection with the given field schema
    fn create_collection(&self, name: &str, fields: &[FieldSpec]) -> Result<(), ControllerError>;

    /// Index raw file content into a collection
    fn index_content(&self, name: &str, content: &[u8]) -> Result<(), ControllerError>;

    /// Take over management of an existing collection or core
    fn import_existing(&self, importable: &Importable) -> Result<(), ControllerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importable_wire_shape() {
        let json = serde_json::to_value(Importable::new("logs", ImportKind::Core)).unwrap();
        assert_eq!(json["name"], "logs");
        assert_eq!(json["type"], "core");
    }

    #[test]
    fn test_importable_roundtrip() {
        let parsed: Importable =
            serde_json::from_str(r#"{"name":"events","type":"collection"}"#).unwrap();
        assert_eq!(parsed.kind, ImportKind::Collection);
        assert_eq!(parsed.name, "events");
    }
}
