// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::entry::ScheduleEntry;
use crate::models::table::ScheduleTable;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (array of objects keyed by column name).
pub(crate) fn export_json(entries: &[ScheduleEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)?;

    let mut file = File::create(path).map_err(|e| AppError::file_access(path, e))?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV. The header is written even when there are no entries.
pub(crate) fn export_csv(entries: &[ScheduleEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    ScheduleTable::from_entries(entries).write_csv(path)?;

    notify_export_success("CSV", path);
    Ok(())
}
