//! Application configuration loading and validation.
//!
//! Configuration is loaded from an optional TOML file. Every section has
//! defaults, so an empty file (or no file at all) is a valid configuration.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::detector::DetectorConfig;
use crate::error::{ConfigError, Result};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Install the global subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Logs go to
    /// stderr so stdout carries only scan output.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format {
            LogFormat::Json => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            LogFormat::Pretty => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "level",
                reason: format!(
                    "expected one of {}, got '{}'",
                    LOG_LEVELS.join(", "),
                    self.logging.level
                ),
            }
            .into());
        }

        let min_edge = self.detector.min_edge;
        if min_edge < Decimal::ZERO || min_edge >= Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "min_edge",
                reason: format!("must be in [0, 1), got {min_edge}"),
            }
            .into());
        }

        Ok(())
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(!config.detector.opportunities_only);
        assert_eq!(config.detector.min_edge, Decimal::ZERO);
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::parse(
            r#"
[logging]
level = "debug"
format = "json"

[detector]
opportunities_only = true
min_edge = 0.02
include_quotes = true
"#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.detector.opportunities_only);
        assert!(config.detector.include_quotes);
        assert_eq!(config.detector.min_edge, dec!(0.02));
    }

    #[test]
    fn rejects_min_edge_of_one() {
        let result = Config::parse("[detector]\nmin_edge = 1.0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "min_edge",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_negative_min_edge() {
        let result = Config::parse("[detector]\nmin_edge = -0.1\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "min_edge",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = Config::parse("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "level", .. }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse("[logging]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = Config::parse("[detector]\nmin_profit = 1\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
