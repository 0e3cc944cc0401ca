//! Rendering of one status section: records grouped by tags, with numbered
//! URL references.

use indexmap::IndexMap;

use super::urls::extract_urls;
use crate::error::Result;
use crate::model::Record;

/// Output of rendering one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSection {
    /// Tag groups with their bullet lines. Empty when the bucket was empty.
    pub body: String,
    /// One `[n] - <url>` line per reference assigned in this section.
    pub urls: String,
    /// First reference number available to the next section.
    pub next_reference: usize,
}

impl RenderedSection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Group records by their exact tags value, in order of first appearance.
///
/// # Errors
///
/// Returns an error if a record has no `tags` field.
pub fn group_by_tags(records: &[Record]) -> Result<IndexMap<&str, Vec<&Record>>> {
    let mut groups: IndexMap<&str, Vec<&Record>> = IndexMap::new();
    for record in records {
        groups.entry(record.tags()?).or_default().push(record);
    }
    Ok(groups)
}

/// Render one bucket, numbering URL references from `first_reference`.
///
/// # Errors
///
/// Returns an error if a record lacks the `tags`, `subject`, or
/// `description` field.
pub fn render_section(records: &[Record], first_reference: usize) -> Result<RenderedSection> {
    let mut next_reference = first_reference;
    let mut body = String::new();
    let mut urls = String::new();

    for (tags, group) in group_by_tags(records)? {
        body.push_str(&format!("{tags}:\n"));
        for record in group {
            body.push_str(&format!("* {}", record.subject()?));
            for url in extract_urls(record.description()?) {
                urls.push_str(&format!("[{next_reference}] - {url}\n"));
                body.push_str(&format!(" [{next_reference}]"));
                next_reference += 1;
            }
            body.push('\n');
        }
        body.push('\n');
    }

    Ok(RenderedSection {
        body,
        urls,
        next_reference,
    })
}
