use std::fs;

use oddsarb::config::{Config, LogFormat};
use oddsarb::error::{ConfigError, Error};
use rust_decimal_macros::dec;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[logging]
level = "warn"
format = "json"

[detector]
opportunities_only = true
min_edge = 0.015
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.detector.opportunities_only);
    assert_eq!(config.detector.min_edge, dec!(0.015));
    assert!(!config.detector.include_quotes);
}

#[test]
fn config_rejects_invalid_min_edge() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[detector]\nmin_edge = 2\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "min_edge", ..
        })) => {}
        Err(err) => panic!("Expected invalid min_edge error, got {err}"),
        Ok(config) => panic!(
            "Expected min_edge to be rejected, got {}",
            config.detector.min_edge
        ),
    }
}

#[test]
fn config_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(dir.path().join("missing.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn config_reports_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[detector\nmin_edge = 0\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}
