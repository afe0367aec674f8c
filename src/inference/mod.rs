//! Schema inference for uploaded files
//!
//! This module turns a raw byte source plus a declared format family into
//! an ordered field schema the downstream indexer can map document fields
//! onto.
//!
//! ## Features
//!
//! - **Format dispatch** - an open registry of format handlers
//!   (`separated`, `log`, `regex` built in)
//! - **Delimiter detection** - the `separated` path delegates to the
//!   delimited-text analyzer
//! - **Fixed-shape shortcuts** - syslog-style formats skip file
//!   inspection entirely
//! - **Structured failures** - every fault is carried as a closed error
//!   kind, never a panic
//!
//! ## Example
//!
//! ```rust,ignore
//! use collection_manager_sdk::inference::{
//!     FileFormat, InferenceOptions, SchemaInferencer,
//! };
//!
//! let inferencer = SchemaInferencer::new();
//! let options = InferenceOptions::default();
//!
//! let mut source = std::io::Cursor::new(b"a,b\n1,2\n".to_vec());
//! let inference = inferencer.infer(&mut source, &FileFormat::Separated, &options)?;
//! assert_eq!(inference.schema.len(), 2);
//! ```

mod config;
mod error;
mod format;
mod inferrer;
mod types;

pub use config::{InferenceOptions, InferenceOptionsBuilder};
pub use error::InferenceError;
pub use format::{FileFormat, FormatHandler, FormatRegistry};
pub use inferrer::SchemaInferencer;
pub use types::{FieldSchema, FieldSpec, Inference, SeparatedDetail};
