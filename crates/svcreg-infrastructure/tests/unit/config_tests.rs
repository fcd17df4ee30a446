//! Configuration loader tests

use std::io::Write;
use std::time::Duration;

use svcreg_infrastructure::config::loader::validate_registry_config;
use svcreg_infrastructure::config::{ConfigLoader, LifecycleConfig, RegistryConfig};
use svcreg_infrastructure::constants::{CONFIG_ENV_PREFIX, DEFAULT_LOG_LEVEL};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_defaults() {
    let config = RegistryConfig::default();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.lifecycle, LifecycleConfig::default());
    assert!(validate_registry_config(&config).is_ok());
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[logging]
level = "debug"
json_format = true

[lifecycle]
initialize_timeout_ms = 2500
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("valid config");

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert_eq!(config.lifecycle.initialize_timeout_ms, Some(2500));
    assert_eq!(config.lifecycle.destroy_timeout_ms, None);
    assert_eq!(
        config.lifecycle.to_options().initialize_timeout,
        Some(Duration::from_millis(2500))
    );
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .expect("defaults are valid");

    assert_eq!(config, RegistryConfig::default());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let file = write_config("[logging]\nlevel = \"chatty\"\n");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let file = write_config("[lifecycle]\ndestroy_timeout_ms = 0\n");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("destroy_timeout_ms"));
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let file = write_config("[lifecycle]\ninitialize_timeout_ms = \"soon\"\n");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();

    assert!(matches!(err, svcreg_domain::Error::Configuration { .. }));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = RegistryConfig::default();
    config.logging.level = "warn".to_string();
    config.lifecycle.destroy_timeout_ms = Some(750);

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_default_env_prefix() {
    assert_eq!(ConfigLoader::new().env_prefix(), CONFIG_ENV_PREFIX);
    assert_eq!(
        ConfigLoader::new().with_env_prefix("APP").env_prefix(),
        "APP"
    );
}
