//! Tests for configuration loading

use std::fs;
use std::path::PathBuf;

use pawnkyc::config::{ConfigError, KycConfig};
use pawnkyc::core::ports::ExtractorKind;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = KycConfig::default();
    assert_eq!(config.extractor.backend, ExtractorKind::Mock);
    assert_eq!(config.engine.locale, "en");
    assert!(config.store.dir.ends_with("records"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = KycConfig::load(Some(&temp.path().join("absent.toml"))).unwrap();
    assert_eq!(config, KycConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[extractor]\nbackend = \"mrz\"\n").unwrap();

    let config = KycConfig::load_from(&path).unwrap();
    assert_eq!(config.extractor.backend, ExtractorKind::Mrz);
    assert_eq!(config.engine.locale, "en");
}

#[test]
fn test_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");

    let mut config = KycConfig::default();
    config.engine.locale = "nl".to_string();
    config.store.dir = PathBuf::from("/srv/kyc");
    config.save_to(&path).unwrap();

    assert_eq!(KycConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_invalid_backend_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[extractor]\nbackend = \"ocr-cloud\"\n").unwrap();

    assert!(matches!(KycConfig::load_from(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn test_default_config_path() {
    assert!(KycConfig::config_path().ends_with("pawnkyc/config.toml"));
}
