use std::path::PathBuf;
use std::time::Duration;

use grid_invaders::config::GameConfig;
use grid_invaders::error::ConfigError;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("grid_invaders_{}_{name}", std::process::id()))
}

#[test]
fn defaults_match_fixed_constants() {
    let c = GameConfig::default();
    assert_eq!((c.width, c.height), (40, 20));
    assert_eq!(c.tick_interval(), Duration::from_millis(100));
    assert!(c.log_file.is_none());
    assert!(c.validate().is_ok());
}

#[test]
fn partial_file_overrides_only_given_keys() {
    let c = GameConfig::from_toml_str("width = 60\nlog_file = \"game.log\"\n").unwrap();
    assert_eq!(c.width, 60);
    assert_eq!(c.height, 20);
    assert_eq!(c.tick_interval_ms, 100);
    assert_eq!(c.log_file, Some(PathBuf::from("game.log")));
}

#[test]
fn empty_document_is_default() {
    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn narrow_grid_is_rejected() {
    let err = GameConfig::from_toml_str("width = 39").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "width", .. }));
}

#[test]
fn short_grid_is_rejected() {
    let err = GameConfig::from_toml_str("height = 11").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "height", .. }));
}

#[test]
fn zero_tick_interval_is_rejected() {
    let err = GameConfig::from_toml_str("tick_interval_ms = 0").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "tick_interval_ms",
            ..
        }
    ));
}

#[test]
fn unknown_key_is_a_parse_error() {
    let err = GameConfig::from_toml_str("lives = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let c = GameConfig::load(temp_path("does_not_exist.toml")).unwrap();
    assert_eq!(c, GameConfig::default());
}

#[test]
fn load_reads_file() {
    let path = temp_path("load_reads_file.toml");
    std::fs::write(&path, "height = 30\ntick_interval_ms = 50\n").unwrap();
    let c = GameConfig::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(c.height, 30);
    assert_eq!(c.tick_interval(), Duration::from_millis(50));
}

#[test]
fn load_reports_bad_file() {
    let path = temp_path("load_reports_bad_file.toml");
    std::fs::write(&path, "width = \"wide\"\n").unwrap();
    let result = GameConfig::load(&path);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
