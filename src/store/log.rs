use crate::errors::AppResult;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// One line of the internal operation log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an internal log line to the operation log file.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, formattato in ISO 8601
    let now = Local::now().to_rfc3339();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

/// Read back every log line, oldest first. A missing file has no entries.
pub fn read_entries(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut out = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let cell = |i: usize| row.get(i).unwrap_or_default().to_string();
        out.push(LogEntry {
            date: cell(0),
            operation: cell(1),
            target: cell(2),
            message: cell(3),
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn entries_are_appended_in_order() {
        let mut path = env::temp_dir();
        path.push("ttlog_order_splitlog.log");
        fs::remove_file(&path).ok();

        ttlog(&path, "init", "scores.csv", "Data file initialized").unwrap();
        ttlog(&path, "add", "2025-06-01", "total=22.0, splits=4.4").unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "init");
        assert_eq!(entries[1].target, "2025-06-01");
        assert_eq!(entries[1].message, "total=22.0, splits=4.4");
    }
}
