use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::error;
use crate::ui::render::render_top;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Top { count } = cmd {
        let store = RecordStore::new(cfg.data_path());
        let n = count.unwrap_or(cfg.top_count);

        // read failures are shown, not propagated
        let records = match store.load_all() {
            Ok(r) => r,
            Err(e) => {
                error(e);
                return Ok(());
            }
        };

        println!("{}\n", bold(&format!("Top {} 5K times", n)));
        print!("{}", render_top(&report::top_n(&records, n)));
    }
    Ok(())
}
