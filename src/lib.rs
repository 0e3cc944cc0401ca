//! `taiga_report` - readable status report from a Taiga CSV export
//!
//! This crate provides the core functionality for the `taiga-report` CLI
//! tool: fetch the user-story export, bucket rows by status, group each
//! bucket by tags, and render the text report with numbered URL footnotes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (Record, Status)
//! - [`fetch`] - Export download and CSV parsing
//! - [`report`] - Bucketing, section rendering, report assembly
//! - [`config`] - Configuration management
//! - [`error`] - Error types and handling
//! - [`logging`] - Tracing setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod report;

pub use config::ReporterConfig;
pub use error::{ReportError, Result};
pub use fetch::ReportSource;
pub use model::{Record, Status};

use std::io::{self, Write};

use report::{StatusBuckets, prepare_report};
use tracing::info;

/// Fetch the export described by `config` and build the report text.
///
/// # Errors
///
/// Returns an error if the export cannot be fetched or parsed, or a row
/// lacks a field the report needs.
pub fn run(config: &ReporterConfig) -> Result<String> {
    let records = fetch::fetch_records(&config.source)?;
    render_records(records)
}

/// Build the report text from already-parsed records.
///
/// # Errors
///
/// Returns an error if a row lacks a field the report needs.
pub fn render_records(records: Vec<Record>) -> Result<String> {
    let total = records.len();
    let buckets = StatusBuckets::from_records(records)?;
    info!(total, reported = buckets.total(), "Building report");
    prepare_report(&buckets)
}

/// Print the report followed by one newline.
///
/// # Errors
///
/// Returns an error if the writer fails, e.g. stdout was closed by the
/// reading end of a pipe.
pub fn write_report(mut out: impl Write, report: &str) -> io::Result<()> {
    writeln!(out, "{report}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_report_appends_newline() {
        let mut out = Vec::new();
        write_report(&mut out, "TODO\n====").unwrap();
        assert_eq!(out, b"TODO\n====\n");
    }

    #[test]
    fn write_report_surfaces_closed_output() {
        let err = write_report(ClosedPipe, "\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
