//! Data types for the report: CSV rows and the statuses they are grouped by.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{ReportError, Result};

pub const SUBJECT_FIELD: &str = "subject";
pub const DESCRIPTION_FIELD: &str = "description";
pub const STATUS_FIELD: &str = "status";
pub const TAGS_FIELD: &str = "tags";

/// Story status, declared in report order.
///
/// The derived `Ord` follows declaration order, so any ordered collection
/// keyed by `Status` iterates in the order sections appear in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Todo,
    Blocked,
    Planned,
    InProgress,
    InReview,
    Done,
}

impl Status {
    /// All statuses in report order.
    pub const ALL: [Self; 6] = [
        Self::Todo,
        Self::Blocked,
        Self::Planned,
        Self::InProgress,
        Self::InReview,
        Self::Done,
    ];

    /// The section header text for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Blocked => "BLOCKED",
            Self::Planned => "PLANNED",
            Self::InProgress => "IN PROGRESS",
            Self::InReview => "IN REVIEW",
            Self::Done => "DONE",
        }
    }

    /// Match a raw status cell case-insensitively.
    ///
    /// Only case is normalized: surrounding whitespace or a different word
    /// separator makes the value unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.to_uppercase();
        Self::ALL.into_iter().find(|status| status.as_str() == upper)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One data row of the export, keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    row: usize,
    fields: IndexMap<String, String>,
}

impl Record {
    /// Create a record for the given 1-based data row.
    #[must_use]
    pub fn new(row: usize, fields: IndexMap<String, String>) -> Self {
        Self { row, fields }
    }

    /// Build a record from `(name, value)` pairs.
    #[must_use]
    pub fn from_pairs<K, V>(row: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::new(row, fields)
    }

    /// 1-based position among the data rows (header excluded).
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Look up a field by header name.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] if the row has no such field.
    pub fn field(&self, name: &str) -> Result<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ReportError::missing_field(name, self.row))
    }

    /// # Errors
    ///
    /// Returns an error if the row has no `subject` field.
    pub fn subject(&self) -> Result<&str> {
        self.field(SUBJECT_FIELD)
    }

    /// # Errors
    ///
    /// Returns an error if the row has no `description` field.
    pub fn description(&self) -> Result<&str> {
        self.field(DESCRIPTION_FIELD)
    }

    /// # Errors
    ///
    /// Returns an error if the row has no `status` field.
    pub fn status(&self) -> Result<&str> {
        self.field(STATUS_FIELD)
    }

    /// # Errors
    ///
    /// Returns an error if the row has no `tags` field.
    pub fn tags(&self) -> Result<&str> {
        self.field(TAGS_FIELD)
    }
}
