//! Partitioning of records into the fixed status buckets.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::Result;
use crate::model::{Record, Status};

/// Records grouped by recognized status.
///
/// Every status has a bucket, possibly empty. Within a bucket records keep
/// their input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBuckets {
    buckets: BTreeMap<Status, Vec<Record>>,
}

impl Default for StatusBuckets {
    fn default() -> Self {
        Self {
            buckets: Status::ALL
                .into_iter()
                .map(|status| (status, Vec::new()))
                .collect(),
        }
    }
}

impl StatusBuckets {
    /// Sort records into buckets. Rows whose status is not one of the known
    /// values are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a row has no `status` field.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Self> {
        let mut buckets = Self::default();
        let mut dropped = 0usize;

        for record in records {
            let raw = record.status()?;
            match Status::parse(raw) {
                Some(status) => buckets.push(status, record),
                None => {
                    debug!(
                        row = record.row(),
                        status = raw,
                        "Skipping row with unrecognized status"
                    );
                    dropped += 1;
                }
            }
        }

        debug!(kept = buckets.total(), dropped, "Bucketed records by status");
        Ok(buckets)
    }

    fn push(&mut self, status: Status, record: Record) {
        self.buckets.entry(status).or_default().push(record);
    }

    /// Records with the given status, in input order.
    #[must_use]
    pub fn get(&self, status: Status) -> &[Record] {
        self.buckets.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Buckets in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Status, &[Record])> {
        self.buckets
            .iter()
            .map(|(status, records)| (*status, records.as_slice()))
    }

    /// Number of records kept across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn row(row: usize, status: &str, subject: &str) -> Record {
        Record::from_pairs(
            row,
            [
                ("subject", subject),
                ("description", ""),
                ("status", status),
                ("tags", ""),
            ],
        )
    }

    fn subjects(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.subject().unwrap()).collect()
    }

    #[test]
    fn all_buckets_present_when_empty() {
        let buckets = StatusBuckets::from_records(Vec::new()).unwrap();
        let statuses: Vec<Status> = buckets.iter().map(|(status, _)| status).collect();
        assert_eq!(statuses, Status::ALL.to_vec());
        assert_eq!(buckets.total(), 0);
    }

    #[test]
    fn rows_land_in_uppercased_bucket() {
        let buckets = StatusBuckets::from_records(vec![
            row(1, "todo", "a"),
            row(2, "In Review", "b"),
            row(3, "TODO", "c"),
            row(4, "done", "d"),
        ])
        .unwrap();

        assert_eq!(subjects(buckets.get(Status::Todo)), vec!["a", "c"]);
        assert_eq!(subjects(buckets.get(Status::InReview)), vec!["b"]);
        assert_eq!(subjects(buckets.get(Status::Done)), vec!["d"]);
        assert!(buckets.get(Status::Blocked).is_empty());
    }

    #[test]
    fn unknown_status_is_dropped() {
        let buckets = StatusBuckets::from_records(vec![
            row(1, "CANCELLED", "gone"),
            row(2, "blocked", "kept"),
        ])
        .unwrap();

        assert_eq!(buckets.total(), 1);
        assert_eq!(subjects(buckets.get(Status::Blocked)), vec!["kept"]);
    }

    #[test]
    fn missing_status_field_is_fatal() {
        let record = Record::from_pairs(7, [("subject", "no status")]);
        let err = StatusBuckets::from_records(vec![record]).unwrap_err();
        assert!(matches!(err, ReportError::MissingField { row: 7, .. }));
    }
}
