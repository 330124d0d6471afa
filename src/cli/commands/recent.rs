use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::error;
use crate::ui::render::render_recent;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recent { count, no_graph } = cmd {
        let store = RecordStore::new(cfg.data_path());
        let n = count.unwrap_or(cfg.recent_count);

        let records = match store.load_all() {
            Ok(r) => r,
            Err(e) => {
                error(e);
                return Ok(());
            }
        };

        let recent = report::recent_n(&records, n);
        println!("{}\n", bold(&format!("Last {} runs (newest first)", recent.len())));
        print!("{}", render_recent(&recent, cfg, !*no_graph));
    }
    Ok(())
}
