//! Error types for `taiga_report`.
//!
//! Every failure in the pipeline is fatal; the binary reports the error chain
//! and exits non-zero. Rows with an unknown status are not errors and never
//! reach this module.

use thiserror::Error;

/// Errors produced while fetching, parsing, or rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The HTTP request could not be completed.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The export body is not UTF-8.
    #[error("export from {source_name} is not valid UTF-8: {source}")]
    Encoding {
        source_name: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The export could not be parsed as CSV.
    #[error("malformed CSV export: {0}")]
    Csv(#[from] csv::Error),

    /// A row lacks a field the report needs.
    #[error("row {row} has no '{field}' field")]
    MissingField { field: String, row: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Build a [`ReportError::MissingField`] for a 1-based data row.
    #[must_use]
    pub fn missing_field(field: &str, row: usize) -> Self {
        Self::MissingField {
            field: field.to_string(),
            row,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = ReportError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_row_and_field() {
        let err = ReportError::missing_field("tags", 3);
        assert_eq!(err.to_string(), "row 3 has no 'tags' field");
    }

    #[test]
    fn http_status_message() {
        let err = ReportError::HttpStatus {
            url: "https://example.test/csv".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "request to https://example.test/csv returned HTTP 404"
        );
    }
}
