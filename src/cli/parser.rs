use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rLifeTracker
/// CLI application to track daily life metrics with SQLite
#[derive(Parser)]
#[command(
    name = "rlifetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple life tracking CLI: record daily metrics and explore trends and correlations using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Start the interactive tracking shell
    Shell,

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export recorded entries
    Export {
        /// Account whose entries are exported
        #[arg(long = "user", value_name = "USERNAME")]
        user: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict the export to a single metric
        #[arg(long = "metric", value_name = "NAME")]
        metric: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
