use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use msgtriage_classify::ClassifierRules;

const CONFIG_DIR: &str = "msgtriage";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub rules: ClassifierRules,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default = "ReportConfig::default_input")]
    pub input: PathBuf,
    #[serde(default = "ReportConfig::default_output")]
    pub output: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: Self::default_input(),
            output: Self::default_output(),
        }
    }
}

impl ReportConfig {
    fn default_input() -> PathBuf {
        PathBuf::from("messages.json")
    }

    fn default_output() -> PathBuf {
        PathBuf::from("discord_analytics_clean_v6.csv")
    }
}

impl Config {
    /// `~/msgtriage/config.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR);
        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from `path` if given, otherwise from the default location.
    ///
    /// An explicit path must exist. A missing default file is not an error:
    /// the built-in rules are used instead.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        Self::load_default(Self::default_path().ok())
    }

    /// Without a home directory or a file there, the built-in rules apply.
    fn load_default(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(config_path) = config_path else {
            warn!("Cannot find home directory, using built-in rules");
            return Ok(Self::default());
        };
        if !config_path.exists() {
            info!(
                "No config file at {}, using built-in rules",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Run 'msgtriage init' to create one.",
                path.display()
            );
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        if config.rules.support_team.is_empty() {
            warn!("Config has an empty support team; support rules will never fire");
        }
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the default configuration, refusing to overwrite an existing file.
    pub fn create_config(path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(&config_path, content)?;

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgtriage_classify::OverrideOrder;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty config should parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.report.input, PathBuf::from("messages.json"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_partial_config_keeps_other_defaults() {
        let json = r#"{
  "report": { "output": "out.csv" },
  "rules": { "action_override": { "keyword": "ss7", "action": "Testing", "order": "after_object" } }
}"#;
        let config: Config = serde_json::from_str(json).expect("partial config should parse");

        assert_eq!(config.report.input, PathBuf::from("messages.json"));
        assert_eq!(config.report.output, PathBuf::from("out.csv"));
        assert_eq!(
            config.rules.action_override.order,
            OverrideOrder::AfterObject
        );
        assert_eq!(config.rules.support_team.len(), 5);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_create_then_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let written =
            Config::create_config(Some(path.as_path())).expect("config should be created");
        assert_eq!(written, path);

        let loaded = Config::load(Some(path.as_path())).expect("config should load");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_create_refuses_to_overwrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{}").expect("write");

        assert!(Config::create_config(Some(path.as_path())).is_err());
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "{}");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Config::load(Some(dir.path().join("absent.json").as_path()))
            .expect_err("missing explicit config must fail");
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_default_without_home_uses_builtin_rules() {
        let config = Config::load_default(None).expect("missing home is not an error");
        assert_eq!(config, Config::default());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_missing_default_file_uses_builtin_rules() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_default(Some(dir.path().join(CONFIG_FILE)))
            .expect("missing default file is not an error");
        assert_eq!(config, Config::default());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_invalid_json_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").expect("write");

        assert!(Config::load_from(&path).is_err());
    }
}
