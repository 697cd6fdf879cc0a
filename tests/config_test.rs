//! Configuration loading from files on disk.

use std::io::Write;
use tempfile::NamedTempFile;
use unbeaten::AppConfig;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r##"
human_symbol = "@"
opponent_symbol = "#"
show_hints = true
log_file = "game.log"
log_filter = "unbeaten=debug"
"##
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human_symbol(), '@');
    assert_eq!(*config.opponent_symbol(), '#');
    assert!(*config.show_hints());
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.log_filter(), "unbeaten=debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "show_hints = \"sometimes\"").unwrap();

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "show_hints = true").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert!(*config.show_hints());
    assert_eq!(*config.human_symbol(), 'O');
    assert_eq!(config.log_filter(), "info");
}
