use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimebank
#[derive(Parser)]
#[command(
    name = "rtimebank",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track working hours against your daily schedule and keep a running timebank (SQLite)",
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

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show or change the expected daily work schedule
    Schedule {
        /// Expected clock-in (HH:MM)
        #[arg(long = "in")]
        entry: Option<String>,

        /// Expected lunch start (HH:MM)
        #[arg(long = "lunch-start", conflicts_with = "no_lunch")]
        lunch_start: Option<String>,

        /// Expected lunch end (HH:MM)
        #[arg(long = "lunch-end", conflicts_with = "no_lunch")]
        lunch_end: Option<String>,

        /// Expected clock-out (HH:MM)
        #[arg(long = "out")]
        exit: Option<String>,

        /// Remove the lunch break from the schedule
        #[arg(long = "no-lunch")]
        no_lunch: bool,
    },

    /// Add or update the time entry of a day (omitted times are kept)
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Clock-in time (HH:MM, empty to clear)
        #[arg(long = "in")]
        entry: Option<String>,

        /// Lunch start (HH:MM, empty to clear)
        #[arg(long = "lunch-start")]
        lunch_start: Option<String>,

        /// Lunch end (HH:MM, empty to clear)
        #[arg(long = "lunch-end")]
        lunch_end: Option<String>,

        /// Clock-out time (HH:MM, empty to clear)
        #[arg(long = "out")]
        exit: Option<String>,
    },

    /// Delete the time entry of a day
    Del {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// List the entries of a month with their daily timebank
    List {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,
    },

    /// Show the monthly timebank
    Summary {
        /// Month to summarize (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,
    },

    /// Show a month calendar with recorded days
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(long, short)]
        month: Option<String>,
    },

    /// Export daily rows with their timebank
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Period to export: all, YYYY, YYYY-MM, YYYY-MM-DD or start:end
        #[arg(long, value_name = "RANGE", default_value = "all")]
        range: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
