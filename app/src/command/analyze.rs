use std::path::PathBuf;

use msgtriage_report::run;
use tracing::info;

/// Input parameters for the Analyze command strategy.
#[derive(Debug, Clone)]
pub struct AnalyzeInput {
    /// Dump to read; falls back to `report.input` from the config
    pub input: Option<PathBuf>,
    /// CSV to write; falls back to `report.output` from the config
    pub output: Option<PathBuf>,
    /// Explicit config file
    pub config: Option<PathBuf>,
}

/// Strategy for turning a message dump into the CSV report.
///
/// The input is checked before anything is written, so a missing dump
/// produces an error and no output file.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeStrategy;

impl super::CommandStrategy for AnalyzeStrategy {
    type Input = AnalyzeInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (config, classifier) = super::load_classifier(input.config.as_deref())?;

        let dump = input.input.unwrap_or(config.report.input);
        let output = input.output.unwrap_or(config.report.output);
        info!("Analyzing {} into {}", dump.display(), output.display());

        let report = run(&dump, &output, &classifier)?;

        println!("Done! Report saved as {}", output.display());
        println!("  Rows: {}", report.rows.len());
        println!("  Extraction: {}", report.stats);
        Ok(())
    }
}
