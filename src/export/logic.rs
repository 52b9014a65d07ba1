// src/export/logic.rs

use crate::core::ledger::HourLedger;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::from_ledger;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the ledger to `path` in `format`.
    ///
    /// Returns how many records were written; an empty ledger writes nothing.
    pub fn export(
        ledger: &HourLedger,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        if ledger.is_empty() {
            warning("No records to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let records = from_ledger(ledger);

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
            ExportFormat::Xlsx => export_xlsx(&records, path, ledger.total_compensation())?,
        }

        Ok(records.len())
    }
}
