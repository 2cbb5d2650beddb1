use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "neatly")]
#[command(about = "Demos for the neatly formatting helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure a logging channel and emit sample messages
    #[command(alias = "log")]
    Logging {
        /// Minimum severity to emit (debug, info, warning, error, critical)
        #[arg(short, long, default_value = "info")]
        level: String,

        /// Append log lines to this file in addition to the console
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Show truncation and kebab-case conversion on sample strings
    #[command(alias = "str")]
    Strings,

    /// Show precision division and percentage calculations
    Math,
}
