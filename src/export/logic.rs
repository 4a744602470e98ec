// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::entry::ScheduleEntry;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of parsed entries.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `entries` to `path` in the given format.
    ///
    /// An empty entry list still produces a file (a header-only CSV or `[]`).
    pub fn export(
        entries: &[ScheduleEntry],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if entries.is_empty() {
            warning("No schedule entries found.");
        }

        match format {
            ExportFormat::Csv => export_csv(entries, path),
            ExportFormat::Json => export_json(entries, path),
        }
    }
}
