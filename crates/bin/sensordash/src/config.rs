//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `sensordash.toml` in the working directory unless another path
//! is given on the command line. Every field has a sensible default so the
//! file is optional. Environment variables take precedence over file values.

use std::path::Path;

use sensordash_adapter_http_reqwest::HttpConfig;
use sensordash_app::config::{DashboardConfig, InvalidConfig};
use serde::Deserialize;

/// Default config file name.
pub const DEFAULT_PATH: &str = "sensordash.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sensor server connection.
    pub server: HttpConfig,
    /// Refresh/render behaviour.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Day shown by `watch` when none is given on the command line.
    pub filter: FilterConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Preselected date filter. Unset fields fall back to today (UTC).
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SENSORDASH_BASE_URL") {
            self.server.base_url = val;
        }
        if let Some(secs) = var("SENSORDASH_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.server.timeout_secs = secs;
        }
        if let Some(secs) = var("SENSORDASH_REFRESH_SECS").and_then(|v| v.parse().ok()) {
            self.dashboard.refresh_interval_secs = secs;
        }
        if let Some(secs) = var("SENSORDASH_RENDER_SECS").and_then(|v| v.parse().ok()) {
            self.dashboard.render_interval_secs = secs;
        }
        if let Some(val) = var("SENSORDASH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "server.timeout_secs must be non-zero".to_string(),
            ));
        }
        self.dashboard.validate()?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sensordash=info,sensordash_app=info,sensordash_adapter_http_reqwest=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Dashboard settings rejected.
    #[error("invalid dashboard configuration")]
    Dashboard(#[from] InvalidConfig),
    /// Other semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
