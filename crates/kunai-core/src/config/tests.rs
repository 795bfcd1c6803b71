//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_defaults_apply_to_empty_toml() {
    let settings = Settings::from_toml("").unwrap();

    assert_eq!(settings.logging.level, "info");
    assert!(settings.validation.strict);
}

#[test]
fn test_toml_overrides_defaults() {
    let settings = Settings::from_toml(
        r#"
[logging]
level = "kunai_rfc=trace"

[validation]
strict = false
"#,
    )
    .unwrap();

    assert_eq!(settings.logging.level, "kunai_rfc=trace");
    assert!(!settings.validation.strict);
}

#[test]
fn test_empty_log_level_is_rejected() {
    let err = Settings::from_toml("[logging]\nlevel = \"  \"\n").unwrap_err();

    assert!(err.to_string().contains("logging.level"));
}

#[test]
fn test_validation_config_constructors() {
    assert!(ValidationConfig::strict().strict);
    assert!(!ValidationConfig::lenient().strict);
    assert!(ValidationConfig::default().strict);
}

#[test]
fn test_validate_reports_invalid_configuration() {
    let settings = Settings {
        logging: LoggingConfig {
            level: String::new(),
        },
        validation: ValidationConfig::default(),
    };

    let err = settings.validate().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfiguration(_)));
}
