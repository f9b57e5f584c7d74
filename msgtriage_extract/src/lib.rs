#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Best-effort extraction of message records from a pseudo-structured dump.
//!
//! The dump is a run of Python-dict-like reprs, one per message. There is no
//! grammar to lean on, so the extractor works in two steps: cut the text into
//! blocks at the record delimiter, then search each block for the fields it
//! needs. Every field has a fallback and a malformed block never fails the run.

mod extractor;
mod fields;
mod splitter;
mod stats;

pub use extractor::{Extraction, extract, extract_with_stats};
pub use fields::{BlockFields, strip_mention_tags};
pub use splitter::{BLOCK_PREFIX, BlockSplitter};
pub use stats::ExtractionStats;
