//! Classified report rows.

use serde::{Deserialize, Serialize};

use crate::record::{MessageRecord, Occurrence};

/// Thread context written for messages outside any thread.
pub const NO_THREAD: &str = "No Thread";

const DATE_LEN: usize = 10;
const EXCERPT_LEN: usize = 100;

/// The three labels assigned to a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub action: String,
    pub object: String,
    pub case: String,
}

/// One line of the report. Field names are the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Object")]
    pub object: String,
    #[serde(rename = "Case")]
    pub case: String,
    #[serde(rename = "Following request (Thread Context)")]
    pub thread_context: String,
    #[serde(rename = "Occurrence (Status)")]
    pub status: Occurrence,
    #[serde(rename = "Original Message")]
    pub excerpt: String,
}

impl AnnotatedRow {
    /// Report column names, in order.
    pub const HEADER: [&'static str; 8] = [
        "Date",
        "Author",
        "Action",
        "Object",
        "Case",
        "Following request (Thread Context)",
        "Occurrence (Status)",
        "Original Message",
    ];

    #[must_use]
    pub fn new(record: &MessageRecord, classification: Classification) -> Self {
        Self {
            date: record.timestamp.chars().take(DATE_LEN).collect(),
            author: record.author.clone(),
            action: classification.action,
            object: classification.object,
            case: classification.case,
            thread_context: record
                .thread_name
                .clone()
                .unwrap_or_else(|| NO_THREAD.to_string()),
            status: record.occurrence(),
            excerpt: excerpt(&record.content),
        }
    }
}

/// First hundred characters followed by an ellipsis, which is always appended.
fn excerpt(content: &str) -> String {
    let mut out: String = content.chars().take(EXCERPT_LEN).collect();
    out.push_str("...");
    out
}
