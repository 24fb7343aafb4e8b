use crate::export::ExportFormat;
use crate::models::payroll::HoursMode;
use clap::{Parser, Subcommand};

/// Command-line interface definition for promolog
/// CLI application to track promotional field actions with SQLite
#[derive(Parser)]
#[command(
    name = "promolog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track promotional field actions, aggregate working hours, and compute payroll bonuses",
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

    /// Manage the configuration file (view, check, or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

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

    /// Schedule a new action
    Add {
        /// Date of the action (DD.MM.YYYY)
        date: String,

        #[arg(long = "shop", help = "Shop or event name")]
        shop: String,

        #[arg(long = "address", help = "Shop address")]
        address: String,

        /// Planned start time (HH:MM)
        #[arg(long = "start", help = "Planned start time (HH:MM)")]
        start: String,

        /// Planned end time (HH:MM); earlier than start means past midnight
        #[arg(long = "end", help = "Planned end time (HH:MM)")]
        end: String,

        #[arg(long = "login", help = "Staff login (defaults to the configured one)")]
        login: Option<String>,
    },

    /// Edit an action; real times and the training flag require a past action
    Edit {
        /// Action id
        id: i64,

        #[arg(long = "date", help = "New date (DD.MM.YYYY)")]
        date: Option<String>,

        #[arg(long = "shop", help = "New shop name")]
        shop: Option<String>,

        #[arg(long = "address", help = "New shop address")]
        address: Option<String>,

        #[arg(long = "start", help = "New planned start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "New planned end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "real-start", help = "Observed start time (past actions only)")]
        real_start: Option<String>,

        #[arg(long = "real-end", help = "Observed end time (past actions only)")]
        real_end: Option<String>,

        #[arg(long = "training", help = "Mark as a training action (past actions only)")]
        training: Option<bool>,
    },

    /// Delete an action by id
    Del {
        /// Action id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List actions grouped by date
    List {
        #[arg(
            long,
            short,
            help = "Filter by month (MM.YYYY or 'all'; defaults to the current month when it has data)"
        )]
        month: Option<String>,

        #[arg(long, help = "Filter by status: past | upcoming | all")]
        status: Option<String>,

        #[arg(long, help = "Filter by shop name")]
        shop: Option<String>,

        #[arg(long, help = "Filter by staff login")]
        login: Option<String>,
    },

    /// Daily hour aggregates (system vs real)
    Hours {
        #[arg(long, short, help = "Restrict to one month (MM.YYYY)")]
        month: Option<String>,

        #[arg(long, help = "Restrict to one staff login")]
        login: Option<String>,
    },

    /// Per-login monthly hour totals across the roster
    Summary {
        #[arg(long, short, help = "Month to summarize (MM.YYYY; defaults to current)")]
        month: Option<String>,

        #[arg(long, value_enum, help = "Hour basis (defaults to the configured one)")]
        mode: Option<HoursMode>,
    },

    /// Payroll bonus calculator
    Bonus {
        #[arg(long = "device-a", help = "Devices of type A sold")]
        device_a: u32,

        #[arg(long = "device-b", help = "Devices of type B sold")]
        device_b: u32,

        #[arg(
            long,
            help = "Total worked hours (skips the database aggregation)",
            conflicts_with = "month"
        )]
        hours: Option<f64>,

        #[arg(long, short, help = "Aggregate hours from this month (MM.YYYY)")]
        month: Option<String>,

        #[arg(long, help = "Restrict aggregation to one staff login")]
        login: Option<String>,

        #[arg(long, value_enum, help = "Hour basis (defaults to the configured one)")]
        mode: Option<HoursMode>,
    },

    /// Manage the staff roster
    Staff {
        #[arg(long = "add", value_name = "LOGIN", help = "Register a new staff login")]
        add: Option<String>,

        #[arg(long = "first-name", requires = "add")]
        first_name: Option<String>,

        #[arg(long = "last-name", requires = "add")]
        last_name: Option<String>,

        #[arg(long = "area", requires = "add")]
        area: Option<String>,

        #[arg(long = "del", value_name = "LOGIN", help = "Remove a staff login")]
        del: Option<String>,

        #[arg(long = "list", help = "List the roster")]
        list: bool,
    },

    /// Import actions from a JSON dump of the legacy API
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export actions or the monthly summary
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by day/month/year or a custom range (dotted forms)"
        )]
        range: Option<String>,

        #[arg(long, help = "Export the per-login monthly summary instead of actions")]
        summary: bool,

        #[arg(long, short, help = "Month for --summary (MM.YYYY; defaults to current)")]
        month: Option<String>,

        #[arg(long, value_enum, help = "Hour basis for --summary")]
        mode: Option<HoursMode>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
