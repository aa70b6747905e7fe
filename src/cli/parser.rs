use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorklog
/// CLI application to track time spent on projects in CSV logs
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple project time tracker: start/stop timers and keep billable and non-billable CSV logs",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the logs (useful for tests or a shared folder)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print diagnostic logs on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the log files
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Start tracking a project
    Start {
        /// Project name
        project: String,

        #[arg(
            long,
            short = 'c',
            help = "Category: billable (b) or non-billable (nb)"
        )]
        category: Option<String>,
    },

    /// Stop tracking a project and log the session
    Stop {
        /// Project name
        project: String,

        #[arg(
            long,
            short = 'c',
            help = "Category: billable (b) or non-billable (nb)"
        )]
        category: Option<String>,
    },

    /// Start the project if idle, stop and log it if running
    Toggle {
        /// Project name
        project: String,

        #[arg(
            long,
            short = 'c',
            help = "Category: billable (b) or non-billable (nb)"
        )]
        category: Option<String>,
    },

    /// Show running timers
    Status,

    /// List recent sessions
    List {
        #[arg(long, short = 'c', help = "Category: billable (b) or non-billable (nb)")]
        category: Option<String>,

        #[arg(long, short = 'd', help = "Size of the trailing window in days")]
        days: Option<u32>,

        #[arg(long = "today", help = "Show only today's sessions")]
        today: bool,
    },

    /// Show per-project totals over the trailing window
    Summary {
        #[arg(long, short = 'c', help = "Category: billable (b) or non-billable (nb)")]
        category: Option<String>,

        #[arg(long, short = 'd', help = "Size of the trailing window in days")]
        days: Option<u32>,

        #[arg(long = "by-date", help = "Break totals down per day")]
        by_date: bool,
    },

    /// List every project name seen in the logs
    Projects,

    /// Interactive session: keeps timers in memory and refreshes the view after each change
    Shell,

    /// Export logged sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'c', help = "Export only one category")]
        category: Option<String>,

        #[arg(long, short = 'd', help = "Export only the trailing window of N days")]
        days: Option<u32>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
