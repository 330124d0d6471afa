//! Entry validation: six free-text fields become typed split values.
//!
//! A field is either the "not available" marker (`n/a` / `na`, any case,
//! surrounding blanks ignored) or a finite decimal number. One bad field
//! rejects the whole submission.

use crate::errors::{AppError, AppResult};
use crate::models::record::{FIELD_COUNT, FIELD_LABELS, SplitTimes};
use crate::models::SplitValue;

/// Parse a single raw field. `None` means the text is malformed.
pub fn parse_field(raw: &str) -> Option<SplitValue> {
    let trimmed = raw.trim();
    let folded = trimmed.to_lowercase();
    if folded == "n/a" || folded == "na" {
        return Some(SplitValue::NotAvailable);
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(SplitValue::Minutes(v)),
        _ => None,
    }
}

/// Validate a complete submission (total first, then splits 1K..5K).
///
/// Returns `AppError::Validation` for the first field that fails; no
/// partial result is ever produced.
pub fn validate<S: AsRef<str>>(raw: &[S; FIELD_COUNT]) -> AppResult<SplitTimes> {
    let mut values = [SplitValue::NotAvailable; FIELD_COUNT];

    for (idx, text) in raw.iter().enumerate() {
        let text = text.as_ref();
        values[idx] = parse_field(text).ok_or_else(|| AppError::Validation {
            field: idx,
            label: FIELD_LABELS[idx],
            input: text.to_string(),
        })?;
    }

    Ok(SplitTimes::from_array(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_sentinels_are_accepted() {
        let times = validate(&["22.5", " n/a ", "NA", "N/A", "na", "4.1"]).unwrap();
        assert_eq!(times.total_5k, SplitValue::Minutes(22.5));
        assert_eq!(times.split_1k, SplitValue::NotAvailable);
        assert_eq!(times.split_2k, SplitValue::NotAvailable);
        assert_eq!(times.split_3k, SplitValue::NotAvailable);
        assert_eq!(times.split_4k, SplitValue::NotAvailable);
        assert_eq!(times.split_5k, SplitValue::Minutes(4.1));
        assert_eq!(times.split_1k.to_string(), "N/A");
    }

    #[test]
    fn sign_and_exponent_are_not_range_checked() {
        assert_eq!(parse_field("-3"), Some(SplitValue::Minutes(-3.0)));
        assert_eq!(parse_field("2e1"), Some(SplitValue::Minutes(20.0)));
        assert_eq!(parse_field(" 21 "), Some(SplitValue::Minutes(21.0)));
    }

    #[test]
    fn malformed_field_rejects_whole_submission() {
        let err = validate(&["22.5", "4.4", "abc", "4.5", "4.6", "4.7"]).unwrap_err();
        match err {
            AppError::Validation { field, label, input } => {
                assert_eq!(field, 2);
                assert_eq!(label, "Split 2K");
                assert_eq!(input, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn first_bad_field_is_reported() {
        let err = validate(&["x", "4.4", "", "4.5", "4.6", "4.7"]).unwrap_err();
        assert_eq!(err.field_index(), Some(0));
    }

    #[test]
    fn blank_and_non_finite_fields_fail() {
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("   "), None);
        assert_eq!(parse_field("nan"), None);
        assert_eq!(parse_field("inf"), None);
        assert_eq!(parse_field("n/a/"), None);
    }
}
