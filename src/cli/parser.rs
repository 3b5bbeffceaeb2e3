use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to track daily work hours and monthly balances with SQLite
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A work-hour tracker: daily hours with break rules, monthly statistics and overwork, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// User whose entries are read or written (default from config)
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Day options shared by `add` and `calc`.
#[derive(Args, Debug, Clone)]
pub struct EntryArgs {
    /// Work type (O = Office, R = Remote, A = Annual leave)
    #[arg(
        long = "type",
        short = 't',
        help = "Work type: O=Office, R=Remote, A=Annual leave (default from config)"
    )]
    pub work_type: Option<String>,

    /// Check-in time (HH:MM)
    #[arg(long = "in", help = "Check-in time (HH:MM)")]
    pub start: Option<String>,

    /// Check-out time (HH:MM)
    #[arg(long = "out", help = "Check-out time (HH:MM)")]
    pub end: Option<String>,

    #[arg(
        long = "outside",
        default_value_t = 0,
        help = "Time spent outside during work, in minutes (multiple of 30)"
    )]
    pub outside: u32,

    #[arg(long = "dinner", help = "Deduct a dinner meal (30 minutes)")]
    pub dinner: bool,

    #[arg(
        long = "hourly-leave",
        value_name = "HOURS",
        help = "Hourly leave credited on a work day (0-4 hours)"
    )]
    pub hourly_leave: Option<f64>,

    #[arg(
        long = "leave-hours",
        value_name = "HOURS",
        help = "Hours of an annual leave day (4-8, default 8)"
    )]
    pub leave_hours: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add or replace the entry of a day
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Compute the hours of a day without saving anything
    Calc {
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Show the stored entry of a day with its breakdown
    Show {
        /// Date of the entry (YYYY-MM-DD)
        date: String,
    },

    /// Delete the entry of a day
    Del {
        /// Date of the entry (YYYY-MM-DD)
        date: String,
    },

    /// List entries
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's entry")]
        now: bool,
    },

    /// Monthly statistics: hours per type, overwork, averages and distribution
    Stats {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month (default: current)")]
        month: Option<String>,

        #[arg(long, help = "Print the statistics as JSON")]
        json: bool,
    },

    /// Month calendar with the recorded days
    Calendar {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month (default: current)")]
        month: Option<String>,
    },

    /// Delete entries of every user older than a cutoff date
    Purge {
        #[arg(
            long,
            value_name = "YYYY-MM-DD",
            help = "Cutoff date (default: first day of the previous month)"
        )]
        before: Option<String>,

        #[arg(long, help = "Only run on the configured purge day of the month")]
        auto: bool,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup file")]
        force: bool,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
