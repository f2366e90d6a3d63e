//! Tests for TOML configuration loading.

use std::io::Write;
use tictactoe_timeline::GameConfig;

#[test]
fn test_load_full_config() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "history_sort_reversed = true\nlog_file = \"game.log\"\nlog_filter = \"debug\""
    )
    .expect("write config");

    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert!(*config.history_sort_reversed());
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_fields_use_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "history_sort_reversed = true").expect("write config");

    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert!(*config.history_sort_reversed());
    assert_eq!(config.log_filter(), GameConfig::default().log_filter());
}

#[test]
fn test_invalid_toml_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "history_sort_reversed = maybe").expect("write config");

    let err = GameConfig::from_file(file.path()).expect_err("invalid config");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_explicit_missing_path_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");

    let err = GameConfig::load(Some(missing.as_path())).expect_err("missing file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_absent_default_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let default = dir.path().join("tictactoe_timeline.toml");

    let config = GameConfig::load_from(None, &default).expect("defaults");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_present_default_file_is_loaded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let default = dir.path().join("tictactoe_timeline.toml");
    std::fs::write(&default, "log_filter = \"trace\"\n").expect("write config");

    let config = GameConfig::load_from(None, &default).expect("valid config");
    assert_eq!(config.log_filter(), "trace");
}
