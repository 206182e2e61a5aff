//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, KumuConfig, Validate};
use crate::error::config::ConfigError;
use std::fs;
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = KumuConfig::default();
    assert!(config.validate().is_ok());
    assert!(!config.trie.case_sensitive);
    assert_eq!(config.log.level, "info");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = KumuConfig::default();

    config.trie.max_key_length = 0;
    assert!(config.validate().is_err());

    config.trie.max_key_length = 64;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("kumu.toml");

    let config_content = r#"
    [trie]
    case_sensitive = true
    max_key_length = 32

    [log]
    level = "debug"
    "#;
    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "KUMU_TEST_FILE");
    let config = loader.load().unwrap();

    assert!(config.trie.case_sensitive);
    assert_eq!(config.trie.max_key_length, 32);
    assert_eq!(config.log.level, "debug");
    // Unset values keep their defaults.
    assert!(!config.log.json);
}

/// Test loading a JSON configuration file.
#[test]
fn test_load_json_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("kumu.json");
    fs::write(&config_path, r#"{ "trie": { "max_key_length": 10 } }"#).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "KUMU_TEST_JSON")
        .load()
        .unwrap();
    assert_eq!(config.trie.max_key_length, 10);
}

/// Test that environment variables override file values.
#[test]
fn test_env_overrides_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("kumu.toml");
    fs::write(&config_path, "[trie]\nmax_key_length = 32\n").unwrap();

    std::env::set_var("KUMU_TEST_ENV__TRIE__MAX_KEY_LENGTH", "48");
    let result = ConfigLoader::new(Some(&config_path), "KUMU_TEST_ENV").load();
    std::env::remove_var("KUMU_TEST_ENV__TRIE__MAX_KEY_LENGTH");

    assert_eq!(result.unwrap().trie.max_key_length, 48);
}

/// Test that loading fails for a missing file.
#[test]
fn test_missing_config_file() {
    let loader = ConfigLoader::new(Some("/nonexistent/kumu.toml"), "KUMU_TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that unsupported file extensions are rejected.
#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("kumu.ini");
    fs::write(&config_path, "").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "KUMU_TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that invalid values in a file fail validation.
#[test]
fn test_invalid_file_values() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("kumu.toml");
    fs::write(&config_path, "[log]\nlevel = \"loud\"\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "KUMU_TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ValidationError(_))));
}

/// Test that the default configuration survives a TOML round trip, as
/// written by `gen-config`.
#[test]
fn test_generated_config_loads() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("generated.toml");
    fs::write(&config_path, toml::to_string_pretty(&KumuConfig::default()).unwrap()).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "KUMU_TEST_GENERATED")
        .load()
        .unwrap();
    assert_eq!(config, KumuConfig::default());
}
