use clap::{Parser, Subcommand};

/// Command-line interface definition for punchlog.
/// CLI application to audit door-badge punch logs with SQLite.
#[derive(Parser)]
#[command(
    name = "punchlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn raw badge punches into work sessions and audit late/early minutes against per-day schedules",
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

    /// Import a month of raw punches (idempotent: a month already in the
    /// store is never re-ingested)
    Import {
        /// Punch file: one `<id> <date> <HH:MM> <code>` line per punch
        file: String,
    },

    /// List the stored sessions of a person
    List {
        #[arg(long, help = "8-digit person id")]
        id: String,
    },

    /// Correct a fallback session's entry/exit times
    Edit {
        #[arg(long, help = "Session row id (see `list`)")]
        session: i64,

        #[arg(long, help = "Corrected entry time (HH:MM)")]
        entry: String,

        #[arg(long, help = "Corrected exit time (HH:MM)")]
        exit: String,
    },

    /// Inspect or edit the per-day work schedule table
    Schedule {
        #[arg(long, help = "Backfill default rows for the loaded month")]
        fill: bool,

        #[arg(long, help = "Month to fill (YYYYMM); defaults to the loaded month")]
        month: Option<String>,

        #[arg(long, help = "Day to edit (YYYYMMDD)")]
        date: Option<String>,

        #[arg(long, help = "Scheduled entry time (HH:MM)")]
        entry: Option<String>,

        #[arg(long, help = "Scheduled exit time (HH:MM)")]
        exit: Option<String>,

        #[arg(long, help = "Floating window in hours (e.g. 0.5, 1.0)")]
        floating: Option<f64>,

        #[arg(long = "late-allowed", help = "Grant the extra late-arrival grace")]
        late_allowed: Option<bool>,

        #[arg(long, help = "Mark the day as a holiday")]
        holiday: Option<bool>,
    },

    /// Manage a person's standing entry/exit exception
    Exception {
        #[arg(long, help = "8-digit person id")]
        id: String,

        #[arg(long, help = "Exception entry time (HH:MM)")]
        entry: Option<String>,

        #[arg(long, help = "Exception exit time (HH:MM)")]
        exit: Option<String>,

        #[arg(long, help = "Remove the person's exception")]
        remove: bool,

        #[arg(
            long,
            requires = "date",
            help = "Reconcile the exception against a day's edited schedule"
        )]
        reconcile: bool,

        #[arg(long, help = "Schedule day to reconcile against (YYYYMMDD)")]
        date: Option<String>,
    },

    /// Build and print a person's late/early/leave report
    Report {
        #[arg(long, help = "8-digit person id")]
        id: String,
    },

    /// Assign reason codes to report events (all-or-nothing commit)
    Classify {
        #[arg(long, help = "8-digit person id")]
        id: String,

        #[arg(
            long = "reason",
            value_name = "N=REASON",
            help = "Event index and reason (impermissible, announced, other); repeatable"
        )]
        reasons: Vec<String>,
    },

    /// Export the classified report as CSV
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Restrict the export to one person id")]
        id: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
