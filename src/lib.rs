//! Collection Manager SDK - schema inference and collection boundary glue
//!
//! Provides the building blocks behind a search-collection management
//! surface:
//! - Schema inference from uploaded files (format dispatch, delimiter
//!   detection, column type guessing)
//! - A delimited-text analyzer (dialect sniffing + per-column typing)
//! - A file-store seam for resolving uploaded file paths
//! - A controller seam for the external search-index service, with
//!   continue-on-error bulk import aggregation
//! - JSON boundary handlers that map every outcome to an integer-status
//!   response document

pub mod analyze;
pub mod api;
pub mod collections;
pub mod inference;
pub mod storage;

// Re-export commonly used types
pub use analyze::{Analysis, AnalyzeError, ColumnGuess, ReaderDialect, TextEncoding};
pub use api::{CollectionApi, Messages};
pub use collections::{
    CollectionController, ControllerError, Importable, ImportKind, ImportReport, ImportStatus,
    import_all,
};
pub use inference::{
    FieldSchema, FieldSpec, FileFormat, FormatHandler, FormatRegistry, Inference, InferenceError,
    InferenceOptions, SchemaInferencer, SeparatedDetail,
};
pub use storage::{FileStore, LocalFileStore, StoreError};
