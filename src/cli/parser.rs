use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timestudy
/// CLI application to automate the time-study workflow with SQLite
#[derive(Parser)]
#[command(
    name = "timestudy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Provision dated time-study folders and sync completed spreadsheets into SQLite",
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
    /// Initialize the configuration, template workbook and database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Create a dated study folder with a Videos subfolder and a renamed
    /// copy of the template workbook
    New {
        /// Name of the study (without a date; today's date is appended)
        name: String,

        /// Destination directory (default from config)
        #[arg(long = "dest", value_name = "DIR")]
        dest: Option<String>,

        /// Template workbook to copy (default from config)
        #[arg(long = "template", value_name = "FILE")]
        template: Option<String>,

        /// Open the copied workbook with the system default handler
        #[arg(long = "open")]
        open: bool,
    },

    /// Write a blank time-study template workbook
    Template {
        /// Output path (default: the configured template file)
        #[arg(long = "file", value_name = "FILE")]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Sync a completed spreadsheet into the database, replacing any
    /// previously recorded actions for the same file
    Sync {
        /// Path of the completed spreadsheet (.xlsx / .xlsm)
        spreadsheet: String,
    },

    /// List synced files, or one file's recorded actions
    List {
        /// Show the actions of a single file id
        #[arg(long = "study", value_name = "ID")]
        study: Option<i64>,
    },

    /// Export synced action data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict the export to one file id
        #[arg(long = "study", value_name = "ID")]
        study: Option<i64>,

        /// Overwrite output file without confirmation
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

    /// Manage the database (integrity checks, vacuum, info)
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
}
