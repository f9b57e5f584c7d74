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

//! Keyword-driven classification of chat messages into action, object and
//! case labels.

mod classifier;
mod object;
pub mod rules;

pub use classifier::Classifier;
pub use rules::{
    ActionOverride, CaseRefinement, ClassifierRules, KeywordRule, ObjectRule, OverrideOrder,
    SupportNotice,
};
