//! Retrieval and parsing of the user-story CSV export.
//!
//! The export is fetched with a single blocking GET (or read from a local
//! file) and parsed in one pass. There is no retry: any failure is returned
//! to the caller as fatal.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use csv::ReaderBuilder;
use indexmap::IndexMap;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::model::Record;

/// Export published by the project board.
pub const DEFAULT_REPORT_URL: &str =
    "https://api.taiga.io/api/v1/userstories/csv?uuid=b62e5a3fae554b479e6d56d5e50690f6";

/// Where the CSV export is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    Url(String),
    File(PathBuf),
}

impl ReportSource {
    /// Interpret a user-supplied location: `http://` and `https://` are URLs,
    /// anything else is a filesystem path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl Default for ReportSource {
    fn default() -> Self {
        Self::Url(DEFAULT_REPORT_URL.to_string())
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch the export and parse it into records.
///
/// # Errors
///
/// Returns an error if the download or file read fails, or the CSV is malformed.
pub fn fetch_records(source: &ReportSource) -> Result<Vec<Record>> {
    info!(%source, "Fetching report export");
    let body = match source {
        ReportSource::Url(url) => download(&http_client(url)?, url)?,
        ReportSource::File(path) => fs::read(path)?,
    };
    records_from_body(source, body)
}

/// Decode the raw export strictly as UTF-8, ignoring any declared charset.
fn records_from_body(source: &ReportSource, body: Vec<u8>) -> Result<Vec<Record>> {
    debug!(bytes = body.len(), "Export retrieved");
    let text = String::from_utf8(body).map_err(|err| ReportError::Encoding {
        source_name: source.to_string(),
        source: err.utf8_error(),
    })?;
    parse_records(&text)
}

/// Blocking client with no overall request deadline.
fn http_client(url: &str) -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(None::<Duration>)
        .build()
        .map_err(|source| http_error(url, source))
}

/// One GET; the body is returned undecoded.
fn download(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .map_err(|source| http_error(url, source))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ReportError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .bytes()
        .map(|body| body.to_vec())
        .map_err(|source| http_error(url, source))
}

fn http_error(url: &str, source: reqwest::Error) -> ReportError {
    ReportError::Http {
        url: url.to_string(),
        source,
    }
}

/// Parse CSV text whose first row is the header.
///
/// Rows shorter than the header lack the trailing fields; cells beyond the
/// header are ignored. A repeated header name keeps the last cell.
///
/// # Errors
///
/// Returns an error if the text is not valid CSV.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let fields: IndexMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        records.push(Record::new(index + 1, fields));
    }

    debug!(rows = records.len(), columns = headers.len(), "Parsed CSV export");
    Ok(records)
}
