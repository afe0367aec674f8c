//! Schema inferencer
//!
//! Single-shot dispatch from a declared format to the matching handler.
//! There is no state across invocations; the same source bytes and
//! arguments always yield the same result.

use std::io::Read;

use super::config::InferenceOptions;
use super::error::InferenceError;
use super::format::{FileFormat, FormatRegistry};
use super::types::Inference;

/// Infers a field schema from a byte source and a format declaration
pub struct SchemaInferencer {
    registry: FormatRegistry,
}

impl SchemaInferencer {
    /// Inferencer with the built-in format handlers
    pub fn new() -> Self {
        Self {
            registry: FormatRegistry::builtin(),
        }
    }

    /// Inferencer with a caller-supplied registry
    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self { registry }
    }

    /// Access the handler registry, e.g. to register new format families
    pub fn registry_mut(&mut self) -> &mut FormatRegistry {
        &mut self.registry
    }

    /// Infer the schema of `source` under the declared format
    ///
    /// The source must be positioned at offset 0. It is read at most
    /// once and never closed here; its lifetime belongs to the caller on
    /// every path, including failures.
    pub fn infer(
        &self,
        source: &mut dyn Read,
        format: &FileFormat,
        options: &InferenceOptions,
    ) -> Result<Inference, InferenceError> {
        let handler =
            self.registry
                .get(format.tag())
                .ok_or_else(|| InferenceError::UnsupportedFormat {
                    format: format.tag().to_string(),
                })?;

        handler.infer(source, options).inspect_err(|e| {
            tracing::warn!(format = %format, error = %e, "schema inference failed");
        })
    }
}

impl Default for SchemaInferencer {
    fn default() -> Self {
        Self::new()
    }
}
