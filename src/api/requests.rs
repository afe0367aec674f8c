//! Request payloads consumed at the boundary
//!
//! Field names mirror the form-encoded wire names.

use serde::{Deserialize, Serialize};

use crate::inference::FieldSpec;

/// Payload of the parse-fields endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseFieldsRequest {
    /// Declared format family; defaults to "log" when absent
    #[serde(rename = "file-type", default)]
    pub file_type: Option<String>,

    /// Path resolved through the file store
    #[serde(rename = "file-path")]
    pub file_path: String,

    /// Separator for the `separated` family; defaults to ","
    #[serde(rename = "field-separator", default)]
    pub field_separator: Option<String>,
}

impl ParseFieldsRequest {
    /// Declared format tag, defaulted
    pub fn format_tag(&self) -> &str {
        self.file_type.as_deref().unwrap_or("log")
    }

    /// Declared separator, defaulted
    pub fn separator(&self) -> &str {
        self.field_separator.as_deref().unwrap_or(",")
    }
}

/// Collection description inside a create request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSpec {
    /// Collection name
    #[serde(default)]
    pub name: String,
    /// Ordered field schema
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl CollectionSpec {
    /// True when the payload carries nothing to create
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Payload of the create-collection endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollectionRequest {
    /// The collection to create; absent or empty means a bad request
    #[serde(default)]
    pub collection: Option<CollectionSpec>,

    /// Path of the content to index after creation
    #[serde(rename = "file-path")]
    pub file_path: String,
}
