//! Append-only CSV store for session records.

pub mod log;

use crate::errors::{AppError, AppResult};
use crate::models::record::{FIELD_COUNT, SplitTimes};
use crate::models::{SessionRecord, SplitValue};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Header row of the durable file.
pub const HEADERS: [&str; FIELD_COUNT + 1] = [
    "Date", "Total_5k", "Split_1k", "Split_2k", "Split_3k", "Split_4k", "Split_5k",
];

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the operation log kept next to the data file
    /// (`scores.csv` → `scores.csv.log`), never the data file itself.
    pub fn log_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "scores".into());
        name.push(".log");
        self.path.with_file_name(name)
    }

    /// True when the file is missing or has no bytes yet.
    fn is_blank(&self) -> bool {
        fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true)
    }

    /// Append one record. The header is written only when the file is
    /// missing or empty; existing rows are never touched.
    pub fn append(&self, record: &SessionRecord) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let write_header = self.is_blank();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut wtr = csv::Writer::from_writer(file);

        if write_header {
            wtr.write_record(HEADERS)?;
        }
        wtr.write_record(record.to_row())?;
        wtr.flush()?;

        Ok(())
    }

    /// Read every record in insertion order.
    ///
    /// A missing or empty file yields no records. Anything that cannot be
    /// parsed is reported as `AppError::StoreRead`.
    pub fn load_all(&self) -> AppResult<Vec<SessionRecord>> {
        if self.is_blank() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| AppError::StoreRead(e.to_string()))?;

        let headers = rdr
            .headers()
            .map_err(|e| AppError::StoreRead(e.to_string()))?
            .clone();
        if headers.iter().map(str::trim).ne(HEADERS.iter().copied()) {
            return Err(AppError::StoreRead(format!(
                "unexpected header in {}: {}",
                self.path.display(),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut out = Vec::new();
        for (idx, row) in rdr.records().enumerate() {
            // header is line 1
            let line = idx + 2;
            let row = row.map_err(|e| AppError::StoreRead(e.to_string()))?;
            out.push(parse_row(&row, line)?);
        }

        Ok(out)
    }
}

fn parse_row(row: &csv::StringRecord, line: usize) -> AppResult<SessionRecord> {
    let bad = |what: &str, cell: &str| {
        AppError::StoreRead(format!("line {line}: invalid {what} '{cell}'"))
    };

    let raw_date = row.get(0).unwrap_or_default().trim();
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| bad("date", raw_date))?;

    let mut values = [SplitValue::NotAvailable; FIELD_COUNT];
    for (idx, slot) in values.iter_mut().enumerate() {
        let cell = row.get(idx + 1).unwrap_or_default();
        *slot = SplitValue::from_store_str(cell).ok_or_else(|| bad(HEADERS[idx + 1], cell))?;
    }

    Ok(SessionRecord::new(date, SplitTimes::from_array(values)))
}
