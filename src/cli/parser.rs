use clap::{Parser, Subcommand};

/// Command-line interface definition for netbuddy
/// CLI application to take weekly net check-ins against a roster sheet
#[derive(Parser)]
#[command(
    name = "netbuddy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Net check-in helper: mark operators present on the weekly roster sheet",
    long_about = None
)]
pub struct Cli {
    /// Override audit database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override roster sheet path (`{year}` is replaced with the roster year)
    #[arg(global = true, long = "roster")]
    pub roster: Option<String>,

    /// Act as if today were this date (YYYY-MM-DD)
    #[arg(global = true, long = "date")]
    pub date: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, audit database and this year's roster sheet
    Init {
        /// Roster year to create (defaults to the current year)
        #[arg(long = "year")]
        year: Option<i32>,
    },

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
        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Show which roster column is this week's
    Week,

    /// Check an operator in for this week (early check-in)
    Checkin {
        /// Call sign to check in
        callsign: String,

        /// Register the operator with this name if the call sign is unknown
        #[arg(long = "name")]
        name: Option<String>,

        /// Never offer to register an unknown call sign
        #[arg(long = "no-add", conflicts_with = "name")]
        no_add: bool,
    },

    /// Register a new operator, checked in for this week
    Add {
        /// Call sign of the new operator
        callsign: String,

        /// Operator name
        #[arg(long = "name")]
        name: String,
    },

    /// Take the roll call and save this week's column in one write
    Rollcall {
        /// Comma-separated call signs present (skips the interactive prompts).
        /// Everyone else on the active roster is cleared.
        #[arg(long = "present", value_delimiter = ',')]
        present: Option<Vec<String>>,
    },

    /// List the active roster with this week's status
    List {
        /// Print JSON instead of a table
        #[arg(long = "json")]
        json: bool,
    },

    /// Print or manage the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
