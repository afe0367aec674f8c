//! Boundary handlers

use serde_json::{Value, json};

use crate::collections::{CollectionController, Importable, ImportStatus, import_all};
use crate::inference::{FileFormat, InferenceError, InferenceOptions, SchemaInferencer};
use crate::storage::FileStore;

use super::messages::Messages;
use super::requests::{CreateCollectionRequest, ParseFieldsRequest};

/// The collection-management view layer
///
/// Collaborators are explicit: the controller seam, the file store and
/// the message catalog are handed in rather than looked up globally.
pub struct CollectionApi<'a> {
    controller: &'a dyn CollectionController,
    store: &'a dyn FileStore,
    inferencer: SchemaInferencer,
    options: InferenceOptions,
    messages: Messages,
}

impl<'a> CollectionApi<'a> {
    /// Create a handler set with default inference options and messages
    pub fn new(controller: &'a dyn CollectionController, store: &'a dyn FileStore) -> Self {
        Self {
            controller,
            store,
            inferencer: SchemaInferencer::new(),
            options: InferenceOptions::default(),
            messages: Messages::default(),
        }
    }

    /// Replace the inferencer (e.g. one with extra format handlers)
    pub fn with_inferencer(mut self, inferencer: SchemaInferencer) -> Self {
        self.inferencer = inferencer;
        self
    }

    /// Replace the site inference options (encoding, dialects)
    pub fn with_options(mut self, options: InferenceOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the message catalog
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Infer the field schema of an uploaded file
    ///
    /// Response shapes:
    /// - `{"status":0,"data":[[names],[types]]}` on success, plus
    ///   `delimiter`/`dialect` when the separated analyzer ran
    /// - `{"status":1,"message":...}` for an unsupported format tag
    /// - `{"status":-1,"message":...}` for any other fault
    pub fn parse_fields(&self, req: &ParseFieldsRequest) -> Value {
        let format = FileFormat::parse(req.format_tag());
        let mut options = self.options.clone();
        options.field_separator = req.separator().to_string();

        let mut source = match self.store.open(&req.file_path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!(path = %req.file_path, error = %e, "could not open upload");
                return json!({ "status": -1, "message": e.to_string() });
            }
        };

        match self.inferencer.infer(source.as_mut(), &format, &options) {
            Ok(inference) => {
                let (names, types) = inference.schema.to_parallel_lists();
                let mut response = json!({ "status": 0, "data": [names, types] });
                if let Some(detail) = inference.detail {
                    response["delimiter"] = json!((detail.delimiter as char).to_string());
                    response["dialect"] = json!(detail.dialect);
                }
                response
            }
            Err(e) => {
                let message = match &e {
                    InferenceError::UnsupportedFormat { format } => {
                        Messages::render(self.messages.file_type_not_supported, format)
                    }
                    other => other.to_string(),
                };
                json!({ "status": e.status(), "message": message })
            }
        }
    }

    /// List the backend's not-yet-managed collections and cores
    pub fn collections_and_cores(&self) -> Value {
        let listed = self
            .controller
            .new_collections()
            .and_then(|collections| self.controller.new_cores().map(|cores| (collections, cores)));

        match listed {
            Ok((collections, cores)) => {
                let collections: Vec<Value> = collections
                    .iter()
                    .map(|name| json!({ "type": "collection", "name": name }))
                    .collect();
                let cores: Vec<Value> = cores
                    .iter()
                    .map(|name| json!({ "type": "core", "name": name }))
                    .collect();
                json!({ "status": 0, "collections": collections, "cores": cores })
            }
            Err(e) => json!({ "status": -1, "message": e.to_string() }),
        }
    }

    /// Create a collection from a field schema and index the file content
    pub fn create_collection(&self, req: &CreateCollectionRequest) -> Value {
        let Some(spec) = req.collection.as_ref().filter(|c| !c.is_empty()) else {
            return json!({ "status": -1, "message": self.messages.collection_missing });
        };

        let result = self
            .controller
            .create_collection(&spec.name, &spec.fields)
            .map_err(|e| e.to_string())
            .and_then(|_| self.store.read(&req.file_path).map_err(|e| e.to_string()))
            .and_then(|content| {
                self.controller
                    .index_content(&spec.name, &content)
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(()) => json!({ "status": 0, "message": self.messages.collection_saved }),
            Err(message) => {
                tracing::warn!(name = %spec.name, error = %message, "create collection failed");
                json!({ "status": -1, "message": message })
            }
        }
    }

    /// Import existing collections and cores, continuing past failures
    ///
    /// `status` is 0 when everything imported, 2 when nothing did and 1
    /// for a partial import; `notImported` carries "name: error" texts.
    pub fn import_collections(&self, importables: &[Importable]) -> Value {
        let report = import_all(self.controller, importables);

        let message = match report.status {
            ImportStatus::AllImported => self.messages.import_all,
            ImportStatus::NoneImported => self.messages.import_none,
            ImportStatus::PartiallyImported => self.messages.import_partial,
        };

        json!({
            "status": report.status.status(),
            "message": message,
            "imported": report.imported,
            "notImported": report.not_imported,
        })
    }
}
