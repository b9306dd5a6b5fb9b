use clap::{Parser, Subcommand};

use crate::export::ExportFormat;

/// Command-line interface definition for punchlog
#[derive(Parser)]
#[command(
    name = "punchlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Punch in/out work sessions, track a daily goal and weekly streaks",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for problems")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, maintenance, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log in and check for pending absences
    Login {
        /// User name (omit to reuse the last one)
        name: Option<String>,

        #[arg(long = "date", hide = true, help = "Override today's date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Log out the current user
    Logout,

    /// Clock in: open a new work session
    In {
        #[arg(long = "at", help = "Clock-in time (HH:MM), defaults to now")]
        at: Option<String>,

        #[arg(long = "date", hide = true, help = "Override today's date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Clock out: complete the active work session
    Out {
        #[arg(long = "at", help = "Clock-out time (HH:MM), defaults to now")]
        at: Option<String>,

        #[arg(long = "date", hide = true, help = "Override today's date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Close the workday (clocks out first if needed)
    Close {
        #[arg(long = "at", help = "Closing time (HH:MM), defaults to now")]
        at: Option<String>,

        #[arg(long = "date", hide = true, help = "Override today's date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Show today's sessions, total and goal progress
    Status {
        #[arg(long = "date", hide = true, help = "Override today's date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Show the trailing week and the current streak
    Week {
        #[arg(long = "date", hide = true, help = "Override today's date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Justify a day with no recorded activity
    Justify {
        /// Date to justify (YYYY-MM-DD)
        date: String,

        /// Free-text reason
        text: String,
    },

    /// Synchronize with the remote mirror
    Sync,

    /// Export day records
    Export {
        /// Export format: csv, json
        #[arg(long, value_name = "FORMAT", value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM               → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD            → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format, plus the special value
        /// `all` to export the entire archive.
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a JSON export and merge it into the local store
    Import {
        /// Input file path (a JSON export)
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
