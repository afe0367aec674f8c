//! Collection-management seam
//!
//! The search-index service (collections in cloud topologies, cores in
//! single-node ones) lives behind the [`CollectionController`] trait.
//! This module also owns the bulk-import aggregation: per-item
//! continue-on-error with a three-way overall classification.

mod controller;
mod error;
mod import;

pub use controller::{CollectionController, ImportKind, Importable};
pub use error::ControllerError;
pub use import::{ImportReport, ImportStatus, import_all};
