// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::SessionRecord;
use crate::store::HEADERS;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[SessionRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", records.len(), path);
    Ok(())
}

/// Export CSV with the same layout as the data file.
pub(crate) fn export_csv(records: &[SessionRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;
    for rec in records {
        wtr.write_record(rec.to_row())?;
    }
    wtr.flush()?;

    notify_export_success("CSV", records.len(), path);
    Ok(())
}
