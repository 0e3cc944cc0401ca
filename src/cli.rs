//! Command-line interface.
//!
//! With no arguments the tool fetches the board export and prints the report.
//! The flags only tune logging and where the export is read from.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::CliOverrides;

#[derive(Debug, Parser)]
#[command(
    name = "taiga-report",
    version,
    about = "Print a grouped status report from a Taiga user-story CSV export"
)]
pub struct Cli {
    /// Export location: an http(s) URL or a local CSV file.
    #[arg(short, long, value_name = "URL|PATH")]
    pub source: Option<String>,

    /// Read settings from this YAML file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write JSON logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            source: self.source.clone(),
            config: self.config.clone(),
        }
    }
}
