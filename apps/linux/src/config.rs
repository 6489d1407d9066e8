//! Configuration management for the Create User app
//!
//! Window and logging preferences, read from
//! `<config dir>/create-user/config.yml`. A missing file means defaults.
//! The signup endpoint and token are constants and cannot be configured here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main application configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User interface configuration
    pub ui: UiConfig,

    /// Logging configuration
    pub logging: LogSettings,
}

/// User interface configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial window width
    pub window_width: f32,

    /// Initial window height
    pub window_height: f32,

    /// Whether the gradient backdrop animates
    pub animate_background: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 640.0,
            window_height: 720.0,
            animate_background: true,
        }
    }
}

/// Logging overrides. `None` keeps the preset for the current build.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Console log level ("error", "warn", "info", "debug", "trace")
    pub console_level: Option<String>,

    /// Whether to write a rotated log file
    pub file_enabled: Option<bool>,

    /// File log level
    pub file_level: Option<String>,
}

impl AppConfig {
    /// Default location of the configuration file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"))
            .join("create-user")
            .join("config.yml")
    }

    /// Load from the default location
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`, falling back to defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_yaml(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse a YAML document. An empty document yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).context("Failed to parse YAML configuration")
    }
}
