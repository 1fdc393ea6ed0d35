//! Settings file loading.

use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tictactoe::Mark;
use tictactoe_tui::{Cli, Settings};

fn write_settings(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_settings(
        r##"
[labels]
x = "@"
o = "#"

[log]
file = "custom.log"
filter = "debug"
"##,
    );

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.labels().label(Mark::X), "@");
    assert_eq!(settings.labels().label(Mark::O), "#");
    assert_eq!(settings.log().file(), &PathBuf::from("custom.log"));
    assert_eq!(settings.log().filter(), "debug");
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_settings("");
    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_malformed_file() {
    let file = write_settings("[labels\nx = ");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_invalid_labels_in_file() {
    let file = write_settings("[labels]\nx = \"TOOLONG\"\n");
    assert!(Settings::from_file(file.path()).is_err());
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let args: Vec<OsString> = vec!["tictactoe".into(), "--config".into(), missing.into()];
    let cli = Cli::try_parse_from(args).unwrap();
    let err = Settings::resolve(&cli).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_resolve_applies_cli_over_file() {
    let file = write_settings("[labels]\nx = \"A\"\no = \"B\"\n");
    let args: Vec<OsString> = vec![
        "tictactoe".into(),
        "--config".into(),
        file.path().into(),
        "--o-label".into(),
        "C".into(),
    ];
    let cli = Cli::try_parse_from(args).unwrap();
    let settings = Settings::resolve(&cli).unwrap();
    assert_eq!(settings.labels().label(Mark::X), "A");
    assert_eq!(settings.labels().label(Mark::O), "C");
}
