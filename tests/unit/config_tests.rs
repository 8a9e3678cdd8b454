// ==========================
// tests/unit/config_tests.rs
// ==========================
//! Unit tests for the configuration module
use std::fs;

use account_directory_lib::{ConfigError, LogFormat, Settings};
use tempfile::tempdir;

#[test]
fn test_settings_custom() {
    let settings = Settings {
        log_level: "trace".to_string(),
        log_format: LogFormat::Json,
        token_seed: Some(11),
    };
    assert!(settings.validate().is_ok());
    assert_eq!(settings.token_seed, Some(11));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("accounts.toml");
    fs::write(&path, "token_seed = 3\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.token_seed, Some(3));
    assert_eq!(settings.log_format, LogFormat::Pretty);
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("accounts.toml");
    fs::write(&path, "log_format = \"xml\"\n").unwrap();

    assert!(matches!(Settings::load_from(&path), Err(ConfigError::Load(_))));
}
