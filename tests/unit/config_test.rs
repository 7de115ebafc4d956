//! Tests for the gate settings file

use std::fs;
use std::path::{Path, PathBuf};

use checklist_gate::config::{DEFAULT_EXCLUSIONS_FILE, DEFAULT_ITEMS_FILE, GateConfig};
use checklist_gate::core::models::{DeclinedPolicy, StatusVocabulary};
use checklist_gate::error::GateError;
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = GateConfig::default();
    assert_eq!(config.status.vocabulary, StatusVocabulary::Extended);
    assert_eq!(config.status.declined, DeclinedPolicy::Fail);
    assert_eq!(config.sources.items_file, PathBuf::from(DEFAULT_ITEMS_FILE));
    assert_eq!(config.sources.exclusions_file, PathBuf::from(DEFAULT_EXCLUSIONS_FILE));
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(GateConfig::from_toml("").unwrap(), GateConfig::default());
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn test_partial_config() {
    let config = GateConfig::from_toml(
        r#"
[status]
vocabulary = "glyph"

[sources]
items_file = ".github/checklist.txt"
"#,
    )
    .unwrap();

    assert_eq!(config.status.vocabulary, StatusVocabulary::Glyph);
    assert_eq!(config.status.declined, DeclinedPolicy::Fail);
    assert_eq!(config.sources.items_file, PathBuf::from(".github/checklist.txt"));
    assert_eq!(config.sources.exclusions_file, PathBuf::from(DEFAULT_EXCLUSIONS_FILE));
}

#[test]
fn test_unknown_vocabulary_rejected() {
    assert!(GateConfig::from_toml("[status]\nvocabulary = \"emoji\"\n").is_err());
}

#[test]
fn test_round_trip_through_toml() {
    let mut config = GateConfig::default();
    config.status.declined = DeclinedPolicy::Pass;

    let text = config.to_toml().unwrap();
    assert!(text.contains("declined = \"pass\""));
    assert_eq!(GateConfig::from_toml(&text).unwrap(), config);
}

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_load_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gate.toml");
    fs::write(&path, "[status]\ndeclined = \"pass\"\n").unwrap();

    let config = GateConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.status.declined, DeclinedPolicy::Pass);
}

#[test]
fn test_explicit_missing_file_is_fatal() {
    let result = GateConfig::load(Some(Path::new("/nonexistent/gate.toml")));
    assert!(matches!(result, Err(GateError::ConfigRead { .. })));
}

#[test]
fn test_invalid_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gate.toml");
    fs::write(&path, "[status\n").unwrap();

    let result = GateConfig::load_file(&path);
    assert!(matches!(result, Err(GateError::ConfigParse { .. })));
}
