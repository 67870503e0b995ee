//! Configuration management for Secure Eye

use secureeye_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `SECUREEYE__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "SECUREEYE";

/// Base name of the optional configuration file in the working directory
pub const CONFIG_FILE: &str = "secureeye";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Dashboard configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// JSON file with camera records to seed the store from, instead of the
    /// built-in fixtures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    /// Search box contents when the admin dashboard opens
    #[serde(default)]
    pub initial_search: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from an optional `secureeye.{toml,json,...}` file
    /// and `SECUREEYE__*` environment variables
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if a source cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::build(config::File::with_name(CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file, still honoring environment
    /// overrides
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the file is missing or invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(|e| Error::configuration(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| Error::configuration(e.to_string()))
    }

    /// Render the resolved configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::configuration(e.to_string()))
    }
}
