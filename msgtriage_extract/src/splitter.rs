use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Leading fragment of every message repr in the dump.
pub const BLOCK_PREFIX: &str = "{'type':";

static DELIMITER: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn delimiter() -> &'static Regex {
    DELIMITER.get_or_init(|| {
        Regex::new(r",\s*\{'type':").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Cuts a dump into per-message blocks.
///
/// The delimiter is consumed by the split, so its `{'type':` fragment is put
/// back on every piece that does not already start with it. A content field
/// that happens to contain the delimiter splits its message in two; nothing
/// detects that.
pub struct BlockSplitter<'a> {
    pieces: regex::Split<'static, 'a>,
}

impl<'a> BlockSplitter<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            pieces: delimiter().split(text),
        }
    }
}

impl<'a> Iterator for BlockSplitter<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let piece = self.pieces.next()?;
        if piece.trim_start().starts_with(BLOCK_PREFIX) {
            Some(Cow::Borrowed(piece))
        } else {
            Some(Cow::Owned(format!("{BLOCK_PREFIX}{piece}")))
        }
    }
}
