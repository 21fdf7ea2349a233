//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `meterwatch.toml` in the working directory unless another path is
//! given. Every field has a default so the file is optional. Environment
//! variables take precedence over file values, and `--meter` over both.

use std::path::Path;
use std::time::Duration;

use meterdash_app::polling::{POWER_POLL_INTERVAL, REPORT_POLL_INTERVAL};
use meterdash_domain::meter::MeterNumber;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Metering backend settings.
    pub backend: BackendConfig,
    /// The meter to watch.
    pub meter: MeterConfig,
    /// Poll periods.
    pub polling: PollingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Metering backend location.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
}

/// Meter selection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Meter number; required by every command except `check`.
    pub number: String,
}

/// Poll periods in milliseconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub power_interval_ms: u64,
    pub report_interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present), apply environment
    /// overrides, then the command-line meter override.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the resulting configuration is invalid.
    pub fn load(path: &Path, meter_override: Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        if let Some(meter) = meter_override {
            config.meter.number = meter;
        }
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
        if let Ok(val) = std::env::var("METERWATCH_BASE_URL") {
            self.backend.base_url = val;
        }
        if let Ok(val) = std::env::var("METERWATCH_METER") {
            self.meter.number = val;
        }
        if let Ok(val) = std::env::var("METERWATCH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.backend.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "backend base_url must be an http(s) URL, got {url:?}"
            )));
        }
        if self.polling.power_interval_ms == 0 || self.polling.report_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll intervals must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured meter number.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when no meter number is set.
    pub fn meter_number(&self) -> Result<MeterNumber, ConfigError> {
        MeterNumber::new(self.meter.number.as_str()).map_err(|_| {
            ConfigError::Validation(
                "meter number is required (set [meter] number, METERWATCH_METER or --meter)"
                    .to_string(),
            )
        })
    }

    #[must_use]
    pub fn power_interval(&self) -> Duration {
        Duration::from_millis(self.polling.power_interval_ms)
    }

    #[must_use]
    pub fn report_interval(&self) -> Duration {
        Duration::from_millis(self.polling.report_interval_ms)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            power_interval_ms: u64::try_from(POWER_POLL_INTERVAL.as_millis()).unwrap_or(1000),
            report_interval_ms: u64::try_from(REPORT_POLL_INTERVAL.as_millis()).unwrap_or(2000),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "meterwatch=info,meterdash_app=info".to_string(),
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
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.meter.number, "");
        assert_eq!(config.power_interval(), Duration::from_millis(1000));
        assert_eq!(config.report_interval(), Duration::from_millis(2000));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.polling.power_interval_ms, 1000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [backend]
            base_url = 'https://meters.example.com'

            [meter]
            number = 'MTR-77'

            [polling]
            power_interval_ms = 500
            report_interval_ms = 5000

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.base_url, "https://meters.example.com");
        assert_eq!(config.meter_number().unwrap().as_str(), "MTR-77");
        assert_eq!(config.power_interval(), Duration::from_millis(500));
        assert_eq!(config.report_interval(), Duration::from_millis(5000));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [polling]
            power_interval_ms = 250
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.polling.power_interval_ms, 250);
        assert_eq!(config.polling.report_interval_ms, 2000);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent-meterwatch.toml")).unwrap();
        assert_eq!(config.polling.report_interval_ms, 2000);
    }

    #[test]
    fn should_reject_non_http_base_url() {
        let mut config = Config::default();
        config.backend.base_url = "ftp://meters".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_interval() {
        let mut config = Config::default();
        config.polling.report_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_require_meter_number() {
        let config = Config::default();
        assert!(matches!(
            config.meter_number(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_trim_meter_number() {
        let mut config = Config::default();
        config.meter.number = "  MTR-5 ".to_string();
        assert_eq!(config.meter_number().unwrap().as_str(), "MTR-5");
    }
}
