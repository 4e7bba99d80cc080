//! Configuration management for listjoin.
//!
//! This crate provides configuration loading and validation
//! with support for TOML format and XDG directory conventions.

pub mod constants;
mod settings;
mod xdg;

pub use settings::{Config, GeneralSettings, LoggingSettings, TransformSettings, UiSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const THEME_NAME: &str = "default";
    pub const NOTIFICATION_MS: u64 = 2000;
    pub const TICK_MS: u64 = 250;
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Load configuration from the XDG config file.
    ///
    /// On first run, creates config file with default values.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        let config = Self::load_from(&config_path)?;
        Self::ensure_themes_dir()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    ///
    /// Creates the file with defaults if it does not exist.
    /// Auto-completes missing keys with default values.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::validate_content(&original_content)?;

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;

        // If content changed, save the updated config
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Get path to themes directory.
    pub fn get_themes_dir() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("themes"))
    }

    /// Get path to the log file, honoring the `logging.file_path` override.
    pub fn log_file_path(&self) -> PathBuf {
        if let Some(ref path) = self.logging.file_path {
            return PathBuf::from(path);
        }
        get_cache_dir()
            .unwrap_or_else(|_| std::env::temp_dir())
            .join(constants::LOG_FILE_NAME)
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }

    /// Ensure themes directory exists.
    fn ensure_themes_dir() -> Result<()> {
        let themes_dir = Self::get_themes_dir()?;
        if !themes_dir.exists() {
            std::fs::create_dir_all(themes_dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listjoin_transform::DelimiterMode;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.theme, "default");
        assert_eq!(config.transform.delimiter, DelimiterMode::Comma);
        assert!(config.transform.custom_delimiter.is_empty());
        assert_eq!(config.ui.notification_ms, 2000);
        assert_eq!(config.logging.min_level, "info");
    }

    #[test]
    fn test_partial_content_fills_defaults() {
        let config = Config::validate_content(
            r#"
[transform]
delimiter = "custom"
custom_delimiter = " / "
"#,
        )
        .unwrap();
        assert_eq!(config.transform.delimiter, DelimiterMode::Custom);
        assert_eq!(config.transform.custom_delimiter, " / ");
        assert_eq!(config.ui, UiSettings::default());
        assert_eq!(config.general.theme, "default");
    }

    #[test]
    fn test_invalid_delimiter_rejected() {
        let result = Config::validate_content("[transform]\ndelimiter = \"colon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_from_normalizes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[transform]\ndelimiter = \"tab\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.transform.delimiter, DelimiterMode::Tab);

        // Missing sections were written back
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[ui]"));
        assert!(written.contains("notification_ms"));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_log_file_override() {
        let mut config = Config::default();
        config.logging.file_path = Some("/tmp/custom.log".to_string());
        assert_eq!(config.log_file_path(), PathBuf::from("/tmp/custom.log"));
    }
}
