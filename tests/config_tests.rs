//! Unit tests for configuration module

use boboddy_engine::config::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.server.static_dir, "static");
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, "json");
}

#[test]
fn test_settings_validation_valid() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validation_invalid_port() {
    let mut settings = Settings::default();
    settings.server.port = 0;
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_empty_static_dir() {
    let mut settings = Settings::default();
    settings.server.static_dir = String::new();
    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_invalid_log_format() {
    let mut settings = Settings::default();
    settings.logging.format = "xml".to_string();
    assert!(settings.validate().is_err());
}
