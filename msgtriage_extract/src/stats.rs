use serde::Serialize;

/// Counts of how often each field fell back to its default.
///
/// Purely observational: collecting these never changes what gets extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub blocks: usize,
    pub records: usize,
    /// Blocks dropped because no content survived cleaning.
    pub empty_content: usize,
    pub missing_author: usize,
    pub missing_timestamp: usize,
    pub missing_thread: usize,
    pub missing_reactions: usize,
}

impl ExtractionStats {
    /// Blocks that did not become a record.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.blocks - self.records
    }
}

impl std::fmt::Display for ExtractionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} blocks, {} records, {} dropped (empty content); defaults used: author={}, timestamp={}, thread={}, reactions={}",
            self.blocks,
            self.records,
            self.empty_content,
            self.missing_author,
            self.missing_timestamp,
            self.missing_thread,
            self.missing_reactions
        )
    }
}
