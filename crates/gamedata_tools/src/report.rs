//! Validation pipeline and text reporter.

use gamedata_core::defect::{Defect, DefectLog};
use gamedata_core::document::DocumentKind;
use gamedata_core::error::Result;
use gamedata_core::validate::{validate_document, WeaponIds};
use serde::Serialize;

use crate::config::DataLayout;
use crate::loader::load_document;

/// Every defect found in one run, in document order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    defects: DefectLog,
}

impl ValidationReport {
    /// Wrap an accumulated defect log.
    #[must_use]
    pub fn new(defects: DefectLog) -> Self {
        Self { defects }
    }

    /// True if no defects were found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.defects.is_empty()
    }

    /// Defects in report order.
    pub fn defects(&self) -> impl Iterator<Item = &Defect> {
        self.defects.iter()
    }

    /// Process exit status: 0 when clean, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_ok())
    }

    /// Line-oriented report text.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_ok() {
            return "Data validation OK\n".to_string();
        }
        let mut out = String::from("Data validation failed:\n");
        for defect in &self.defects {
            out.push_str("- ");
            out.push_str(&defect.to_string());
            out.push('\n');
        }
        out
    }

    /// The defect list as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.defects)?)
    }
}

/// Load and validate every document under `layout`.
///
/// A document that fails to load contributes one defect and is otherwise
/// skipped; the remaining documents are still checked. The weapon id set
/// comes from `weapons.json` and is empty if that file did not load.
#[must_use]
pub fn run_validation(layout: &DataLayout) -> ValidationReport {
    let mut log = DefectLog::new();
    let mut weapons = WeaponIds::new();

    for kind in DocumentKind::ALL {
        let doc_path = layout.display_path(kind);
        let root = match load_document(&layout.document_path(kind)) {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!("Failed to load {doc_path}: {e}");
                log.push(doc_path, format!("failed to load: {e}"));
                continue;
            }
        };

        let before = log.len();
        validate_document(kind, &doc_path, &root, &weapons, &mut log);
        tracing::debug!(document = %kind, defects = log.len() - before, "validated");

        if kind == DocumentKind::Weapons {
            weapons = WeaponIds::from_document(&root);
            tracing::debug!(count = weapons.len(), "collected weapon ids");
        }
    }

    if log.is_empty() {
        tracing::info!("Validation passed");
    } else {
        tracing::info!("Validation found {} defect(s)", log.len());
    }
    ValidationReport::new(log)
}
