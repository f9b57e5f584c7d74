//! Message records pulled out of a raw chat dump.

use serde::{Deserialize, Serialize};

/// Resolution state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occurrence {
    /// A "done" style reaction was found on the message.
    Resolved,
    /// The message started a thread but nobody marked it done.
    #[serde(rename = "In Thread")]
    InThread,
    /// Neither resolved nor threaded.
    Pending,
}

impl Occurrence {
    /// Derive the occurrence, with `resolved` taking priority over the thread.
    #[must_use]
    pub const fn derive(resolved: bool, has_thread: bool) -> Self {
        if resolved {
            Self::Resolved
        } else if has_thread {
            Self::InThread
        } else {
            Self::Pending
        }
    }

    /// Label written to the report.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resolved => "Resolved",
            Self::InThread => "In Thread",
            Self::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message recovered from a block of the dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Body with mention tags stripped and newlines collapsed.
    pub content: String,
    pub author: String,
    /// ISO-like timestamp, empty when the block had none.
    pub timestamp: String,
    pub thread_name: Option<String>,
    pub resolved: bool,
}

impl MessageRecord {
    #[must_use]
    pub const fn occurrence(&self) -> Occurrence {
        Occurrence::derive(self.resolved, self.thread_name.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(thread_name: Option<&str>, resolved: bool) -> MessageRecord {
        MessageRecord {
            content: "hello".to_string(),
            author: "someone".to_string(),
            timestamp: String::new(),
            thread_name: thread_name.map(str::to_string),
            resolved,
        }
    }

    #[test]
    fn test_resolved_wins_over_thread() {
        assert_eq!(
            record(Some("ticket 42"), true).occurrence(),
            Occurrence::Resolved
        );
    }

    #[test]
    fn test_thread_without_resolution() {
        assert_eq!(
            record(Some("ticket 42"), false).occurrence(),
            Occurrence::InThread
        );
    }

    #[test]
    fn test_pending_by_default() {
        assert_eq!(record(None, false).occurrence(), Occurrence::Pending);
    }

    #[test]
    fn test_occurrence_labels() {
        assert_eq!(Occurrence::InThread.to_string(), "In Thread");
        assert_eq!(Occurrence::Resolved.as_str(), "Resolved");
    }
}
