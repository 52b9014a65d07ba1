use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for pinard
/// Employee hours and compensation tracker
#[derive(Parser)]
#[command(
    name = "pinard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pinard management tool: track employee hours and compensation",
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

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
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

    /// Validate the login form and echo the submitted values
    Login {
        #[arg(long, short = 'u', help = "Username (at least 2 characters)")]
        username: String,

        #[arg(long, short = 'p', help = "Password (at least 8 characters)")]
        password: String,
    },

    /// Add employee hours
    Add {
        #[arg(long, short = 'n', help = "Employee name (at least 2 characters)")]
        name: String,

        #[arg(long = "start", help = "Start time, e.g. 8 (default 0)", allow_hyphen_values = true)]
        start_time: Option<String>,

        #[arg(long = "end", help = "End time, e.g. 18 (default 0)", allow_hyphen_values = true)]
        end_time: Option<String>,

        #[arg(long = "rate", help = "Hourly rate, e.g. 20 (default 0)", allow_hyphen_values = true)]
        hourly_rate: Option<String>,

        #[arg(long = "days", help = "Number of days (default 1)", allow_hyphen_values = true)]
        days: Option<String>,
    },

    /// Show all records and the running total
    List,

    /// Delete a record by its row number (as shown by `list`)
    Del { row: usize },

    /// Delete every record
    Clear,

    /// Export records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Sign in through the identity provider
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
pub enum AuthAction {
    /// Print the provider authorization URL
    Url,

    /// Finish sign-in with the code returned by the provider
    Callback {
        #[arg(long)]
        code: String,
    },

    /// Show the account behind a session token
    Session {
        #[arg(long)]
        token: String,
    },

    /// Close a session
    Logout {
        #[arg(long)]
        token: String,
    },
}
