//! Field searches over a single block.
//!
//! Each search reports `None` on no match; the fallback values are applied by
//! the extractor so that misses can be counted.

use std::sync::OnceLock;

use regex::Regex;

/// Reaction names that mark a message as handled.
const RESOLUTION_MARKERS: [&str; 4] = ["done", "check", "plus", "white_check_mark"];

struct FieldPatterns {
    content: Regex,
    mention: Regex,
    username: Regex,
    timestamp: Regex,
    thread: Regex,
    reactions: Regex,
}

static PATTERNS: OnceLock<FieldPatterns> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex patterns validated at compile time"
)]
fn patterns() -> &'static FieldPatterns {
    PATTERNS.get_or_init(|| {
        let build =
            |pattern: &str| Regex::new(pattern).expect("Static regex pattern is guaranteed to be valid");
        FieldPatterns {
            content: build(r"(?s)'content':\s*'(.*?)',\s*'mentions'"),
            mention: build(r"<@&?\d+>\s*"),
            username: build(r"'username':\s*'(.*?)'"),
            timestamp: build(r"'timestamp':\s*'(.*?)'"),
            thread: build(r"(?s)'thread':\s*\{.*?'name':\s*'(.*?)'"),
            reactions: build(r"(?s)'reactions':\s*\[(.*?)\]"),
        }
    })
}

fn capture(re: &Regex, block: &str) -> Option<String> {
    re.captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Remove `<@123>` / `<@&123>` mention tags and the whitespace after them.
#[must_use]
pub fn strip_mention_tags(content: &str) -> String {
    patterns().mention.replace_all(content, "").into_owned()
}

/// Collapse escaped `\n` sequences and real line breaks into spaces.
fn normalize_newlines(content: &str) -> String {
    content.replace("\\n", " ").replace('\n', " ")
}

/// Raw field matches from one block, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockFields {
    /// Cleaned content; `None` when the marker was missing or nothing was left
    /// after stripping mention tags.
    pub content: Option<String>,
    pub author: Option<String>,
    pub timestamp: Option<String>,
    /// Thread name; an empty name counts as no thread.
    pub thread_name: Option<String>,
    /// Raw text of the reactions list, if there was one.
    pub reactions: Option<String>,
}

impl BlockFields {
    #[must_use]
    pub fn parse(block: &str) -> Self {
        let patterns = patterns();

        let content = capture(&patterns.content, block)
            .map(|raw| strip_mention_tags(&raw))
            .filter(|cleaned| !cleaned.is_empty())
            .map(|cleaned| normalize_newlines(&cleaned));

        Self {
            content,
            author: capture(&patterns.username, block),
            timestamp: capture(&patterns.timestamp, block),
            thread_name: capture(&patterns.thread, block).filter(|name| !name.is_empty()),
            reactions: capture(&patterns.reactions, block),
        }
    }

    /// Whether the reactions list carries one of the resolution markers.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.reactions.as_deref().is_some_and(|raw| {
            let lower = raw.to_lowercase();
            RESOLUTION_MARKERS.iter().any(|marker| lower.contains(marker))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "{'type': 0, 'content': '<@&1186> <@42>please add the route\\nfor Spain\nthanks', 'mentions': [], \
        'author': {'id': '1', 'username': 'alice_77', 'global_name': 'Alice'}, \
        'timestamp': '2024-05-01T08:00:00.123000+00:00', \
        'thread': {'id': '9', 'type': 11,\n 'name': 'Spain route'}, \
        'reactions': [{'emoji': {'id': None, 'name': 'white_check_mark'}, 'count': 1}]}";

    #[test]
    fn test_parse_full_block() {
        let fields = BlockFields::parse(BLOCK);

        assert_eq!(
            fields.content.as_deref(),
            Some("please add the route for Spain thanks")
        );
        assert_eq!(fields.author.as_deref(), Some("alice_77"));
        assert_eq!(
            fields.timestamp.as_deref(),
            Some("2024-05-01T08:00:00.123000+00:00")
        );
        assert_eq!(fields.thread_name.as_deref(), Some("Spain route"));
        assert!(fields.is_resolved());
    }

    #[test]
    fn test_parse_empty_block_yields_nothing() {
        assert_eq!(BlockFields::parse("{'type': 19}"), BlockFields::default());
    }

    #[test]
    fn test_content_of_only_tags_is_missing() {
        let fields = BlockFields::parse("{'content': '<@123> ', 'mentions': []}");
        assert_eq!(fields.content, None);
    }

    #[test]
    fn test_content_spans_lines() {
        let fields = BlockFields::parse("{'content': 'line one\nline two', 'mentions': []}");
        assert_eq!(fields.content.as_deref(), Some("line one line two"));
    }

    #[test]
    fn test_strip_mention_tags_is_idempotent() {
        let once = strip_mention_tags("<@&99>hi <@1>  there <@x>");
        assert_eq!(once, "hi there <@x>");
        assert_eq!(strip_mention_tags(&once), once);
    }

    #[test]
    fn test_reactions_without_marker_not_resolved() {
        let fields = BlockFields::parse("{'reactions': [{'emoji': {'name': 'eyes'}}]}");
        assert!(fields.reactions.is_some());
        assert!(!fields.is_resolved());
    }

    #[test]
    fn test_reaction_markers_are_case_insensitive() {
        let fields = BlockFields::parse("{'reactions': [{'emoji': {'name': 'DONE'}}]}");
        assert!(fields.is_resolved());
    }

    #[test]
    fn test_missing_reactions_not_resolved() {
        assert!(!BlockFields::parse("{'content': 'x', 'mentions': []}").is_resolved());
    }

    #[test]
    fn test_empty_thread_name_counts_as_absent() {
        let fields = BlockFields::parse("{'thread': {'id': '1', 'name': ''}}");
        assert_eq!(fields.thread_name, None);
    }
}
