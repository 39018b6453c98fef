//! Configuration management for practimer.
//!
//! This module handles loading and saving configuration from `~/.practimer/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, StorageBackend, StorageConfig, TimerConfig};
