use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for chulcheck
/// CLI application to turn chat-log exports into attendance reports
#[derive(Parser)]
#[command(
    name = "chulcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Parse a KakaoTalk chat export into attendance records and weekly worked-time deltas",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and a default config file
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Analyze a chat export and print the attendance tables
    Report {
        /// Path of the exported chat log (UTF-8 text)
        log_file: String,

        /// Range start (YYYY-MM-DD, default: Monday of the current week)
        #[arg(long = "start")]
        start: Option<String>,

        /// Range end (YYYY-MM-DD, inclusive, default: today)
        #[arg(long = "end")]
        end: Option<String>,

        /// Comma-separated weekdays to keep (e.g. mon,tue,wed; default from config)
        #[arg(long = "weekdays")]
        weekdays: Option<String>,

        /// Print only the weekly summary table
        #[arg(long = "weekly")]
        weekly_only: bool,
    },

    /// Analyze a chat export and write the result to a file
    Export {
        /// Path of the exported chat log (UTF-8 text)
        log_file: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Range start (YYYY-MM-DD, default: Monday of the current week)
        #[arg(long = "start")]
        start: Option<String>,

        /// Range end (YYYY-MM-DD, inclusive, default: today)
        #[arg(long = "end")]
        end: Option<String>,

        /// Comma-separated weekdays to keep (default from config)
        #[arg(long = "weekdays")]
        weekdays: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
