//! Bulk import with per-item error collection

use serde::{Deserialize, Serialize};

use super::controller::{CollectionController, Importable};

/// Three-way classification of a bulk import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImportStatus {
    /// Every item was imported
    AllImported,
    /// No item was imported
    NoneImported,
    /// Some items were imported, some were not
    PartiallyImported,
}

impl ImportStatus {
    /// Integer status reported at the JSON boundary
    pub fn status(&self) -> i64 {
        match self {
            ImportStatus::AllImported => 0,
            ImportStatus::PartiallyImported => 1,
            ImportStatus::NoneImported => 2,
        }
    }
}

/// Outcome of a bulk import
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Overall classification
    pub status: ImportStatus,
    /// Names of the items that were imported
    pub imported: Vec<String>,
    /// "name: error text" entries for the items that were not
    pub not_imported: Vec<String>,
}

/// Import every descriptor, continuing past per-item failures
///
/// One item's failure never aborts the remaining items. An empty input
/// classifies as all-imported, matching the length comparison the
/// status is derived from.
pub fn import_all(
    controller: &dyn CollectionController,
    importables: &[Importable],
) -> ImportReport {
    let mut imported = Vec::new();
    let mut not_imported = Vec::new();

    for importable in importables {
        match controller.import_existing(importable) {
            Ok(()) => imported.push(importable.name.clone()),
            Err(e) => {
                tracing::warn!(name = %importable.name, error = %e, "import failed");
                not_imported.push(format!("{}: {}", importable.name, e));
            }
        }
    }

    let status = if imported.len() == importables.len() {
        ImportStatus::AllImported
    } else if not_imported.len() == importables.len() {
        ImportStatus::NoneImported
    } else {
        ImportStatus::PartiallyImported
    };

    ImportReport {
        status,
        imported,
        not_imported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{ControllerError, ImportKind};
    use crate::inference::FieldSpec;

    /// Controller that fails imports for names in its deny list
    struct DenyListController {
        deny: Vec<String>,
    }

    impl CollectionController for DenyListController {
        fn new_collections(&self) -> Result<Vec<String>, ControllerError> {
            Ok(Vec::new())
        }
        fn new_cores(&self) -> Result<Vec<String>, ControllerError> {
            Ok(Vec::new())
        }
        fn create_collection(
            &self,
            _name: &str,
            _fields: &[FieldSpec],
        ) -> Result<(), ControllerError> {
            Ok(())
        }
        fn index_content(&self, _name: &str, _content: &[u8]) -> Result<(), ControllerError> {
            Ok(())
        }
        fn import_existing(&self, importable: &Importable) -> Result<(), ControllerError> {
            if self.deny.contains(&importable.name) {
                Err(ControllerError::Service("backend refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn items(names: &[&str]) -> Vec<Importable> {
        names
            .iter()
            .map(|n| Importable::new(*n, ImportKind::Collection))
            .collect()
    }

    #[test]
    fn test_all_imported() {
        let controller = DenyListController { deny: vec![] };
        let report = import_all(&controller, &items(&["a", "b"]));
        assert_eq!(report.status, ImportStatus::AllImported);
        assert_eq!(report.status.status(), 0);
        assert_eq!(report.imported.len(), 2);
        assert!(report.not_imported.is_empty());
    }

    #[test]
    fn test_none_imported() {
        let controller = DenyListController {
            deny: vec!["a".to_string(), "b".to_string()],
        };
        let report = import_all(&controller, &items(&["a", "b"]));
        assert_eq!(report.status, ImportStatus::NoneImported);
        assert_eq!(report.status.status(), 2);
    }

    #[test]
    fn test_partially_imported_continues_past_failure() {
        let controller = DenyListController {
            deny: vec!["bad".to_string()],
        };
        let report = import_all(&controller, &items(&["a", "bad", "c"]));

        assert_eq!(report.status, ImportStatus::PartiallyImported);
        assert_eq!(report.status.status(), 1);
        assert_eq!(report.imported, vec!["a", "c"]);
        assert_eq!(report.not_imported.len(), 1);
        assert!(report.not_imported[0].starts_with("bad: "));
        assert!(report.not_imported[0].contains("backend refused"));
    }

    #[test]
    fn test_empty_input_is_all_imported() {
        let controller = DenyListController { deny: vec![] };
        let report = import_all(&controller, &[]);
        assert_eq!(report.status, ImportStatus::AllImported);
    }
}
