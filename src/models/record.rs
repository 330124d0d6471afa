use super::split_value::SplitValue;
use chrono::NaiveDate;
use serde::Serialize;

/// Number of time fields entered per session (total + five 1K splits).
pub const FIELD_COUNT: usize = 6;

/// Labels of the entry form, in entry order.
pub const FIELD_LABELS: [&str; FIELD_COUNT] = [
    "5K Total", "Split 1K", "Split 2K", "Split 3K", "Split 4K", "Split 5K",
];

/// The six validated times of one run, in entry order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitTimes {
    pub total_5k: SplitValue,
    pub split_1k: SplitValue,
    pub split_2k: SplitValue,
    pub split_3k: SplitValue,
    pub split_4k: SplitValue,
    pub split_5k: SplitValue,
}

impl SplitTimes {
    pub fn from_array(values: [SplitValue; FIELD_COUNT]) -> Self {
        let [total_5k, split_1k, split_2k, split_3k, split_4k, split_5k] = values;
        Self {
            total_5k,
            split_1k,
            split_2k,
            split_3k,
            split_4k,
            split_5k,
        }
    }

    pub fn as_array(&self) -> [SplitValue; FIELD_COUNT] {
        [
            self.total_5k,
            self.split_1k,
            self.split_2k,
            self.split_3k,
            self.split_4k,
            self.split_5k,
        ]
    }
}

/// One logged run. Built once from validated input, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub times: SplitTimes,
}

impl SessionRecord {
    pub fn new(date: NaiveDate, times: SplitTimes) -> Self {
        Self { date, times }
    }

    pub fn total_5k(&self) -> SplitValue {
        self.times.total_5k
    }

    /// Cells as written to the store: date first, then the six times.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(FIELD_COUNT + 1);
        row.push(self.date.format("%Y-%m-%d").to_string());
        row.extend(self.times.as_array().iter().map(|v| v.to_string()));
        row
    }
}
