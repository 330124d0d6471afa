use serde::{Serialize, Serializer};
use std::fmt;

/// Literal written to the store (and shown to the user) for a missing time.
pub const NOT_AVAILABLE: &str = "N/A";

/// One recorded time in minutes, or the explicit "not available" marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitValue {
    Minutes(f64),
    NotAvailable,
}

impl SplitValue {
    /// Numeric view used by the reports; `None` for the sentinel.
    pub fn minutes(&self) -> Option<f64> {
        match self {
            SplitValue::Minutes(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Parse a cell written by the store: `N/A` or a decimal number.
    pub fn from_store_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if s == NOT_AVAILABLE {
            return Some(SplitValue::NotAvailable);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(SplitValue::Minutes(v)),
            _ => None,
        }
    }
}

impl fmt::Display for SplitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitValue::Minutes(v) => f.write_str(&crate::utils::formatting::format_minutes(*v)),
            SplitValue::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// JSON keeps numbers numeric and writes the sentinel as the `N/A` string.
impl Serialize for SplitValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SplitValue::Minutes(v) => serializer.serialize_f64(*v),
            SplitValue::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}
