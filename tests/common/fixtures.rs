#![allow(dead_code)]

use taiga_report::Record;

pub const HEADER: &str = "ref,subject,description,assigned_to,status,tags";

/// One user story as it appears in the export.
#[derive(Debug, Clone)]
pub struct Story {
    pub subject: String,
    pub description: String,
    pub status: String,
    pub tags: String,
}

impl Story {
    pub fn new(status: &str, tags: &str, subject: &str, description: &str) -> Self {
        Self {
            subject: subject.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            tags: tags.to_string(),
        }
    }

    pub fn record(&self, row: usize) -> Record {
        Record::from_pairs(
            row,
            [
                ("ref", row.to_string()),
                ("subject", self.subject.clone()),
                ("description", self.description.clone()),
                ("assigned_to", String::new()),
                ("status", self.status.clone()),
                ("tags", self.tags.clone()),
            ],
        )
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render stories as a CRLF-terminated CSV export with a header row.
pub fn export_csv(stories: &[Story]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("\r\n");
    for (index, story) in stories.iter().enumerate() {
        let cells = [
            (index + 1).to_string(),
            quote(&story.subject),
            quote(&story.description),
            String::new(),
            quote(&story.status),
            quote(&story.tags),
        ];
        out.push_str(&cells.join(","));
        out.push_str("\r\n");
    }
    out
}

pub fn records(stories: &[Story]) -> Vec<Record> {
    stories
        .iter()
        .enumerate()
        .map(|(index, story)| story.record(index + 1))
        .collect()
}
