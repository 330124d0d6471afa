use crate::core::validator;
use crate::errors::AppResult;
use crate::models::record::FIELD_COUNT;
use crate::models::{SessionRecord, SplitTimes};
use crate::store::RecordStore;
use crate::store::log::ttlog;
use crate::ui::messages::warning;
use chrono::NaiveDate;

/// High-level business logic for recording a run.
pub struct AddLogic;

impl AddLogic {
    /// Validate the six raw fields and, if all of them pass, persist the
    /// record dated `date`. Nothing is written when validation fails.
    pub fn apply<S: AsRef<str>>(
        store: &RecordStore,
        date: NaiveDate,
        raw: &[S; FIELD_COUNT],
    ) -> AppResult<SessionRecord> {
        let times = validator::validate(raw)?;
        Self::persist(store, date, times)
    }

    /// Persist already validated times.
    pub fn persist(
        store: &RecordStore,
        date: NaiveDate,
        times: SplitTimes,
    ) -> AppResult<SessionRecord> {
        let record = SessionRecord::new(date, times);
        store.append(&record)?;

        let splits = record.times.as_array()[1..]
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("/");
        let message = format!("total={}, splits={}", record.times.total_5k, splits);

        // non bloccante
        if let Err(e) = ttlog(&store.log_path(), "add", &date.to_string(), &message) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(record)
    }
}
