//! Config file loading.

use std::io::Write;
use strictly_stars::NumberStatus;
use strictly_stars_tui::StarsConfig;
use tempfile::NamedTempFile;

#[test]
fn test_from_file_reads_seed_and_theme() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "seed = 42\nlog_filter = \"debug\"\n\n[theme]\ncandidate = \"yellow\"\n"
    )
    .unwrap();

    let config = StarsConfig::from_file(file.path()).unwrap();
    assert_eq!(config.seed(), &Some(42));
    assert_eq!(config.log_filter(), "debug");

    let palette = config.theme().palette().unwrap();
    assert_eq!(
        palette.color(NumberStatus::Candidate),
        ratatui::style::Color::Yellow
    );
}

#[test]
fn test_invalid_toml_reports_location() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "seed = \"not a number\"").unwrap();

    let err = StarsConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_invalid_colour_fails_load() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[theme]\nwrong = \"blurple\"").unwrap();

    let err = StarsConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("wrong"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = StarsConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, StarsConfig::default());
}
