//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use std::path::Path;

use msgtriage_classify::Classifier;
use msgtriage_config::Config;
use tracing::info;

mod analyze;
mod init;
mod rules;
mod version;

pub use analyze::{AnalyzeInput, AnalyzeStrategy};
pub use init::InitStrategy;
pub use rules::RulesStrategy;
pub use version::VersionStrategy;

/// Load the configuration and build the classifier it describes.
fn load_classifier(config_path: Option<&Path>) -> anyhow::Result<(Config, Classifier)> {
    let config = Config::load(config_path)?;
    let classifier = Classifier::new(&config.rules)?;
    info!(
        "Classifier ready: {} action rules, {} object rules, {} case rules, {} support members",
        config.rules.actions.len(),
        config.rules.objects.len(),
        config.rules.cases.len(),
        config.rules.support_team.len()
    );
    Ok((config, classifier))
}

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
