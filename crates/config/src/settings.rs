//! Configuration structures for listjoin settings.

use listjoin_transform::DelimiterMode;
use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Initial delimiter selection
    #[serde(default)]
    pub transform: TransformSettings,

    /// Interface timing
    #[serde(default)]
    pub ui: UiSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Selected theme name
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

/// Delimiter selected when the application starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformSettings {
    /// Delimiter mode (comma, semicolon, tab, newline, space, pipe, custom)
    #[serde(default)]
    pub delimiter: DelimiterMode,

    /// Text used when the mode is `custom`
    #[serde(default)]
    pub custom_delimiter: String,
}

/// Interface timing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// How long notifications stay visible, in ms
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,

    /// Event poll interval, in ms
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_theme_name() -> String {
    defaults::THEME_NAME.to_string()
}

fn default_notification_ms() -> u64 {
    defaults::NOTIFICATION_MS
}

fn default_tick_ms() -> u64 {
    defaults::TICK_MS
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

// Default implementations
impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            notification_ms: default_notification_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
