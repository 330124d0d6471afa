use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::ui::messages::success;
use crate::utils::date;

/// Record a run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        total,
        split_1k,
        split_2k,
        split_3k,
        split_4k,
        split_5k,
        date: date_arg,
    } = cmd
    {
        //
        // 1. Date: --date or today
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Validate and store
        //
        let store = RecordStore::new(cfg.data_path());
        let raw = [total, split_1k, split_2k, split_3k, split_4k, split_5k];
        let record = AddLogic::apply(&store, d, &raw)?;

        success(format!(
            "Run of {} saved: 5K total {}",
            record.date, record.times.total_5k
        ));
    }

    Ok(())
}
