use std::path::Path;

use msgtriage_classify::Classifier;
use msgtriage_core::{AnnotatedRow, Error, Result};
use msgtriage_extract::{ExtractionStats, extract_with_stats};
use tracing::info;

use crate::writer::write_report;

/// Classified rows of one dump plus the extraction diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub rows: Vec<AnnotatedRow>,
    pub stats: ExtractionStats,
}

/// Extract and classify every message in `text`, keeping input order.
#[must_use]
pub fn analyze(text: &str, classifier: &Classifier) -> Report {
    let extraction = extract_with_stats(text);

    let rows = extraction
        .records
        .iter()
        .map(|record| {
            let classification = classifier.classify(&record.content, &record.author);
            AnnotatedRow::new(record, classification)
        })
        .collect();

    Report {
        rows,
        stats: extraction.stats,
    }
}

/// Read `input`, analyze it and write the CSV report to `output`.
///
/// Nothing is written when the input is missing or unreadable.
pub fn run(input: &Path, output: &Path, classifier: &Classifier) -> Result<Report> {
    if !input.exists() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }
    let text = std::fs::read_to_string(input)?;

    let report = analyze(&text, classifier);
    info!(
        input = %input.display(),
        rows = report.rows.len(),
        "{}",
        report.stats
    );

    write_report(output, &report.rows)?;
    info!("Report written to {}", output.display());

    Ok(report)
}
