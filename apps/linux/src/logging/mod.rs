//! Logging configuration for the Create User app
//!
//! Structured logging with a console layer and an optional daily-rotated log
//! file. Development builds log verbosely to the console; release builds keep
//! the console quiet and record details in the file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LogSettings;

/// Logging configuration for the application
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Directory where log files will be stored
    pub log_dir: PathBuf,
    /// Base name for log files
    pub log_file_name: String,
    /// Log level for console output
    pub console_level: String,
    /// Log level for file output
    pub file_level: String,
    /// Whether to enable console logging
    pub enable_console: bool,
    /// Whether to enable file logging
    pub enable_file: bool,
    /// Whether to include source code locations in logs
    pub include_source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: get_default_log_dir(),
            log_file_name: "create-user".to_string(),
            console_level: "INFO".to_string(),
            file_level: "DEBUG".to_string(),
            enable_console: true,
            enable_file: cfg!(feature = "file-logging"),
            include_source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create development configuration with more verbose logging
    pub fn development() -> Self {
        Self {
            console_level: "DEBUG".to_string(),
            file_level: "TRACE".to_string(),
            include_source_location: true,
            ..Default::default()
        }
    }

    /// Create production configuration with optimized logging
    pub fn production() -> Self {
        Self {
            console_level: "WARN".to_string(),
            file_level: "INFO".to_string(),
            ..Default::default()
        }
    }

    /// Preset matching the current build profile
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Apply overrides from the app configuration
    pub fn with_settings(mut self, settings: &LogSettings) -> Self {
        if let Some(level) = &settings.console_level {
            self.console_level = level.clone();
        }
        if let Some(enabled) = settings.file_enabled {
            self.enable_file = enabled;
        }
        if let Some(level) = &settings.file_level {
            self.file_level = level.clone();
        }
        self
    }
}

/// Initialize logging with the given configuration
pub fn initialize_logging(config: &LoggingConfig) -> Result<()> {
    if config.enable_file {
        fs::create_dir_all(&config.log_dir)
            .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;
    }

    let mut layers = Vec::new();

    if config.enable_console {
        let console_filter =
            EnvFilter::try_new(&config.console_level).unwrap_or_else(|_| EnvFilter::new("INFO"));

        let console_layer = fmt::layer()
            .with_target(false)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_writer(std::io::stdout)
            .with_filter(console_filter);

        layers.push(console_layer.boxed());
    }

    if config.enable_file {
        let file_filter =
            EnvFilter::try_new(&config.file_level).unwrap_or_else(|_| EnvFilter::new("DEBUG"));

        let file_appender =
            tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(file_filter);

        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    info!(
        "Logging initialized (console: {} at {}, file: {} at {})",
        config.enable_console, config.console_level, config.enable_file, config.file_level
    );
    if config.enable_file {
        info!("Log files written to {:?}", config.log_dir);
    }

    Ok(())
}

/// Platform log directory
pub fn get_default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("create-user")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let dev = LoggingConfig::development();
        assert_eq!(dev.console_level, "DEBUG");
        assert!(dev.include_source_location);

        let prod = LoggingConfig::production();
        assert_eq!(prod.console_level, "WARN");
        assert_eq!(prod.file_level, "INFO");
        assert!(!prod.include_source_location);
    }

    #[test]
    fn test_settings_override_preset() {
        let settings = LogSettings {
            console_level: Some("trace".to_string()),
            file_enabled: Some(false),
            file_level: None,
        };

        let config = LoggingConfig::production().with_settings(&settings);
        assert_eq!(config.console_level, "trace");
        assert!(!config.enable_file);
        assert_eq!(config.file_level, "INFO");
    }

    #[test]
    fn test_empty_settings_keep_preset() {
        let preset = LoggingConfig::development();
        let config = preset.clone().with_settings(&LogSettings::default());
        assert_eq!(config, preset);
    }

    #[test]
    fn test_default_log_dir() {
        assert!(get_default_log_dir().ends_with("create-user/logs"));
    }
}
