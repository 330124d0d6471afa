// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::range::parse_range;
use crate::models::SessionRecord;
use crate::store::RecordStore;
use crate::store::log::ttlog;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export dei record.
    ///
    /// - `format`: csv | json
    /// - `file`: path assoluto del file di output
    /// - `range`: `None`, `"all"` oppure `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
    ///   and the `start:end` forms of each
    ///
    /// Returns the number of exported records.
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let records = filter_by_date(store.load_all()?, date_bounds);

        if records.is_empty() {
            warning("No records found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        if let Err(e) = ttlog(
            &store.log_path(),
            "export",
            file,
            &format!("{} record(s) as {}", records.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(records.len())
    }
}

fn filter_by_date(
    records: Vec<SessionRecord>,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<SessionRecord> {
    match bounds {
        None => records,
        Some((from, to)) => records
            .into_iter()
            .filter(|r| r.date >= from && r.date <= to)
            .collect(),
    }
}
