//! Report assembly.
//!
//! A report is one section per non-empty status bucket, in fixed status
//! order, followed by the URL footnotes collected while rendering:
//!
//! ```text
//! TODO
//! ====
//! infra:
//! * Fix CI [0]
//!
//!
//! [0] - https://x.test/1
//! ```
//!
//! Reference numbers start at 0 and are threaded through each
//! [`render_section`] call, so they increase across the whole report in
//! bucket, tag group, row, then in-description order.

mod bucket;
mod section;
mod urls;

pub use bucket::StatusBuckets;
pub use section::{RenderedSection, group_by_tags, render_section};
pub use urls::extract_urls;

use tracing::debug;

use crate::error::Result;

/// Build the full report text from bucketed records.
///
/// With no kept records the report is a single newline.
///
/// # Errors
///
/// Returns an error if a record lacks a field used in rendering.
pub fn prepare_report(buckets: &StatusBuckets) -> Result<String> {
    let mut report = String::new();
    let mut urls = String::new();
    let mut next_reference = 0;

    for (status, records) in buckets.iter() {
        let section = render_section(records, next_reference)?;
        next_reference = section.next_reference;
        if section.is_empty() {
            continue;
        }

        debug!(%status, rows = records.len(), "Rendered section");
        let header = status.as_str();
        report.push_str(header);
        report.push('\n');
        report.push_str(&"=".repeat(header.len()));
        report.push('\n');
        report.push_str(&section.body);
        report.push('\n');
        urls.push_str(&section.urls);
    }

    report.push('\n');
    report.push_str(urls.strip_suffix('\n').unwrap_or(&urls));

    debug!(references = next_reference, "Assembled report");
    Ok(report)
}
