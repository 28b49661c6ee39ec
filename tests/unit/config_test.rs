//! Unit tests for configuration loading and saving.

use treino::plans::generator::FitnessGoal;
use treino::storage::config::{load_config_from, save_config_to, AppConfig, ConfigError};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = load_config_from(&path).expect("Should fall back to defaults");
    assert_eq!(config.scheduler.default_frequency, 3);
    assert_eq!(config.scheduler.upcoming_days, 14);
    assert_eq!(config.session.default_rest_seconds, 60);
    assert_eq!(config.data_dir, dir.path());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.scheduler.default_frequency = 5;
    config.scheduler.upcoming_days = 21;
    config.session.auto_advance = false;
    config.questionnaire.goal = FitnessGoal::Strength;

    save_config_to(&config, &path).expect("Should save config");
    let loaded = load_config_from(&path).expect("Should load config");

    assert_eq!(loaded.scheduler.default_frequency, 5);
    assert_eq!(loaded.scheduler.upcoming_days, 21);
    assert!(!loaded.session.auto_advance);
    assert_eq!(loaded.questionnaire.goal, FitnessGoal::Strength);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[scheduler\ndefault_frequency = ").unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}
