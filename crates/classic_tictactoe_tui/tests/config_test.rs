//! Tests for loading the front-end config.

use classic_tictactoe_tui::TuiConfig;
use std::io::Write;
use std::path::{Path, PathBuf};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_no_path_uses_defaults() {
    let config = TuiConfig::load(None).expect("defaults");
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.log_file(), &PathBuf::from("classic_tictactoe.log"));
    assert_eq!(config.log_filter(), "info");
    assert!(config.show_indices());
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = TuiConfig::from_file(file.path()).expect("empty config is valid");
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_fields_override_defaults() {
    let file = write_config(
        r#"
log_file = "/tmp/ttt.log"
log_filter = "classic_tictactoe=debug"
show_indices = false
"#,
    );
    let config = TuiConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "classic_tictactoe=debug");
    assert!(!config.show_indices());
}

#[test]
fn test_missing_file_is_an_error() {
    let err = TuiConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error: "));
}

#[test]
fn test_unknown_key_is_an_error() {
    let file = write_config("theme = \"dark\"\n");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_wrong_type_is_an_error() {
    let file = write_config("show_indices = \"yes\"\n");
    assert!(TuiConfig::from_file(file.path()).is_err());
}
