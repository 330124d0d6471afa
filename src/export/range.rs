// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse --range (year / month / day / intervallo) into inclusive bounds.
///
/// Supporta:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("unsupported --range '{r}'"));

    match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let (start, end) = (start_raw.trim(), end_raw.trim());
            if start.len() != end.len() {
                return Err(AppError::InvalidDate(format!(
                    "start and end of --range '{r}' must have the same format"
                )));
            }
            let (from, _) = period_bounds(start).ok_or_else(invalid)?;
            let (_, to) = period_bounds(end).ok_or_else(invalid)?;
            if from > to {
                return Err(AppError::InvalidDate(format!(
                    "--range '{r}' ends before it starts"
                )));
            }
            Ok((from, to))
        }
        None => period_bounds(r.trim()).ok_or_else(invalid),
    }
}

/// First and last day of a single YYYY, YYYY-MM or YYYY-MM-DD period.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            let next = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
            };
            Some((first, next.pred_opt()?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_periods() {
        assert_eq!(parse_range("2025").unwrap(), (ymd(2025, 1, 1), ymd(2025, 12, 31)));
        assert_eq!(parse_range("2024-02").unwrap(), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
        assert_eq!(parse_range("2025-12").unwrap(), (ymd(2025, 12, 1), ymd(2025, 12, 31)));
        assert_eq!(parse_range("2025-06-18").unwrap(), (ymd(2025, 6, 18), ymd(2025, 6, 18)));
    }

    #[test]
    fn intervals() {
        assert_eq!(
            parse_range("2025-06:2025-08").unwrap(),
            (ymd(2025, 6, 1), ymd(2025, 8, 31))
        );
        assert_eq!(
            parse_range("2024:2025").unwrap(),
            (ymd(2024, 1, 1), ymd(2025, 12, 31))
        );
    }

    #[test]
    fn malformed_ranges_fail() {
        assert!(parse_range("2025-6").is_err());
        assert!(parse_range("2025:2025-01").is_err());
        assert!(parse_range("2025-13").is_err());
        assert!(parse_range("2026:2025").is_err());
    }
}
