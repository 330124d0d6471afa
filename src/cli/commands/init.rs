use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::log::ttlog;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with --test)
///  - an empty scores file
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.as_deref(), cli.test)?;
    let store = RecordStore::new(cfg.data_path());

    println!("⚙️  Initializing splitlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Scores file : {}", store.path().display());

    // log interno (non bloccante)
    if let Err(e) = ttlog(
        &store.log_path(),
        "init",
        &store.path().to_string_lossy(),
        "Scores file initialized",
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("splitlog initialization completed!");
    Ok(())
}
