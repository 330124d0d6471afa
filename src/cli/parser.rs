use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for splitlog
/// CLI application to record 5K split times in a local CSV file
#[derive(Parser)]
#[command(
    name = "splitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small 5K split-time logger: record runs and review top and recent results",
    long_about = None
)]
pub struct Cli {
    /// Override the scores file path (useful for tests or a custom file)
    #[arg(global = true, long = "data", value_name = "CSV")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the scores file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a run: 5K total and the five 1K splits, in minutes or N/A
    #[command(allow_negative_numbers = true)]
    Add {
        /// 5K total (minutes, or N/A)
        total: String,
        /// Split at 1K
        split_1k: String,
        /// Split at 2K
        split_2k: String,
        /// Split at 3K
        split_3k: String,
        /// Split at 4K
        split_4k: String,
        /// Split at 5K
        split_5k: String,

        /// Date of the run (YYYY-MM-DD); defaults to today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Show the fastest 5K totals
    Top {
        /// How many results to show (default from config: 10)
        #[arg(long, short = 'n')]
        count: Option<usize>,
    },

    /// Show the most recent runs, newest first, with a line graph
    Recent {
        /// How many runs to show (default from config: 10)
        #[arg(long, short = 'n')]
        count: Option<usize>,

        /// Print the table only
        #[arg(long = "no-graph")]
        no_graph: bool,
    },

    /// Start the interactive menu
    Menu,

    /// Print the internal operation log
    Log {
        /// Print the entries of the operation log
        #[arg(long = "print", help = "Print the internal operation log")]
        print: bool,
    },

    /// Create a backup copy of the scores file
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz on Unix)
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export recorded runs
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export.
        ///
        /// Supported formats:
        /// - YYYY, YYYY-MM, YYYY-MM-DD
        /// - start:end in the same format (e.g. "2025-06:2025-08")
        /// - all (default)
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
