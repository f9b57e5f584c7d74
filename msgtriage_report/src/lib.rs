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

//! Dump-to-CSV pipeline: extract records, classify them, write the report.

mod pipeline;
mod writer;

pub use pipeline::{Report, analyze, run};
pub use writer::{render_csv, write_csv, write_report};
