//! Configuration settings for practimer.
//!
//! Settings are loaded from `~/.practimer/config.yaml`. Every field has a
//! default, so a partial file (or none at all) is fine.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PracticeError;

/// Bounds for the display refresh interval in milliseconds.
const TICK_INTERVAL_RANGE: std::ops::RangeInclusive<u64> = 10..=200;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
    /// Storage settings.
    pub storage: StorageConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// How often the display is recomputed, in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Countdown presets offered for selection, in minutes.
    #[serde(default = "default_presets")]
    pub presets: Vec<u32>,
    /// Section labels offered for selection.
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
}

/// Where session history is kept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A JSON file.
    #[default]
    Json,
    /// A `SQLite` database.
    Sqlite,
}

/// Storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend for session history.
    pub backend: StorageBackend,
}

// Default value functions for serde
const fn default_tick_interval() -> u64 {
    100
}

fn default_presets() -> Vec<u32> {
    vec![5, 10, 15, 20, 30, 45, 60]
}

fn default_sections() -> Vec<String> {
    ["Reading", "Listening", "Writing", "Translation"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            presets: default_presets(),
            sections: default_sections(),
        }
    }
}

impl TimerConfig {
    /// Check values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<(), PracticeError> {
        if !TICK_INTERVAL_RANGE.contains(&self.tick_interval_ms) {
            return Err(PracticeError::Config(format!(
                "timer.tick_interval_ms must be between {} and {} (got {})",
                TICK_INTERVAL_RANGE.start(),
                TICK_INTERVAL_RANGE.end(),
                self.tick_interval_ms
            )));
        }

        if let Some(blank) = self.sections.iter().position(|s| s.trim().is_empty()) {
            return Err(PracticeError::Config(format!(
                "timer.sections[{blank}] must not be blank"
            )));
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from the config file under `paths`.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds invalid values.
    pub fn load(paths: &Paths) -> Result<Self, PracticeError> {
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds invalid values.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PracticeError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PracticeError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PracticeError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.timer.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PracticeError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PracticeError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PracticeError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
