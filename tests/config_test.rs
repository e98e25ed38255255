//! Loading `noughts.toml`.

use noughts::AppConfig;
use noughts_core::Mode;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let config = AppConfig::load(dir.path().join("noughts.toml")).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.mode(), &Mode::PlayerVsPlayer);
    assert_eq!(config.ai_delay_ms(), &500);
    assert_eq!(config.seed(), &None);
    assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"pvai\"\nseed = 7").unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.mode(), &Mode::PlayerVsAi);
    assert_eq!(config.seed(), &Some(7));
    assert_eq!(config.ai_delay_ms(), &500);
}

#[test]
fn test_cli_values_win_over_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"pvai\"\nai_delay_ms = 250").unwrap();

    let config = AppConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(Mode::PlayerVsPlayer), None, Some(3));
    assert_eq!(config.mode(), &Mode::PlayerVsPlayer);
    assert_eq!(config.ai_delay_ms(), &250);
    assert_eq!(config.seed(), &Some(3));
}

#[test]
fn test_bad_mode_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"solo\"").unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_unreadable_path_is_read_error() {
    let dir = tempdir().unwrap();
    // A directory exists but cannot be read as a file.
    let err = AppConfig::from_file(dir.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
