use std::path::PathBuf;

use msgtriage_config::Config;

/// Strategy for initializing the configuration.
///
/// Writes the built-in rules to `~/msgtriage/config.json`, or to the path
/// given with `--config`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = Option<PathBuf>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config(input.as_deref())?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Adjust report.input / report.output to your dump and report paths");
        println!("   2. Edit rules.support_team to list your support staff usernames");
        println!("   3. Run 'msgtriage analyze' to produce the report");
        println!();
        println!("🔧 Rule tables (first match wins, order matters):");
        println!("   - rules.actions: keyword → action label");
        println!("   - rules.objects: object cascade");
        println!("   - rules.cases: keyword → case label");
        println!("   - rules.action_override.order: before_object | after_object");
        println!();
        Ok(())
    }
}
