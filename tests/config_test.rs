//! Tests for loading the game configuration.

use std::io::Write;
use std::path::PathBuf;
use strictly_tictactoe::{GameConfig, Mode};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_without_file() {
    let config = GameConfig::load(None).unwrap();
    assert_eq!(config.mode(), &Mode::PlayerVsPlayer);
    assert_eq!(config.log_file(), &PathBuf::from("strictly_tictactoe.log"));
}

#[test]
fn test_load_from_file() {
    let file = write_config("mode = \"pvb\"\nlog_file = \"game.log\"\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.mode(), &Mode::PlayerVsBot);
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_missing_fields_use_defaults() {
    let file = write_config("mode = \"pvb\"\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.mode(), &Mode::PlayerVsBot);
    assert_eq!(config.log_file(), &PathBuf::from("strictly_tictactoe.log"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("mode = \"pvb\"\n");
    let config = GameConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(Mode::PlayerVsPlayer), Some(PathBuf::from("other.log")));
    assert_eq!(config.mode(), &Mode::PlayerVsPlayer);
    assert_eq!(config.log_file(), &PathBuf::from("other.log"));
}

#[test]
fn test_invalid_mode_is_an_error() {
    let file = write_config("mode = \"online\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = GameConfig::from_file("/nonexistent/strictly_tictactoe.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
