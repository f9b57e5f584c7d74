use msgtriage_core::MessageRecord;
use tracing::debug;

use crate::fields::BlockFields;
use crate::splitter::BlockSplitter;
use crate::stats::ExtractionStats;

const UNKNOWN_AUTHOR: &str = "Unknown";

/// Records recovered from a dump together with the fallback counters.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<MessageRecord>,
    pub stats: ExtractionStats,
}

/// Extract every message record from a dump, in input order.
#[must_use]
pub fn extract(text: &str) -> Vec<MessageRecord> {
    extract_with_stats(text).records
}

/// Like [`extract`], but also reports how many fields fell back to defaults.
///
/// Fallbacks: content → block dropped, author → `"Unknown"`, timestamp → empty,
/// thread → none, reactions → not resolved.
#[must_use]
pub fn extract_with_stats(text: &str) -> Extraction {
    let mut out = Extraction::default();

    for (index, block) in BlockSplitter::new(text).enumerate() {
        out.stats.blocks += 1;
        let fields = BlockFields::parse(&block);

        if fields.author.is_none() {
            out.stats.missing_author += 1;
        }
        if fields.timestamp.is_none() {
            out.stats.missing_timestamp += 1;
        }
        if fields.thread_name.is_none() {
            out.stats.missing_thread += 1;
        }
        if fields.reactions.is_none() {
            out.stats.missing_reactions += 1;
        }

        let resolved = fields.is_resolved();
        let Some(content) = fields.content else {
            debug!(block = index, "Dropping block without content");
            out.stats.empty_content += 1;
            continue;
        };

        out.records.push(MessageRecord {
            content,
            author: fields
                .author
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            timestamp: fields.timestamp.unwrap_or_default(),
            thread_name: fields.thread_name,
            resolved,
        });
        out.stats.records += 1;
    }

    out
}
