// Unit tests for config load/save/validate, env overrides and path detection

use crate::DEFAULT_BASE_URL;
use crate::config::env::{BASE_URL_ENV_VAR, apply_env_overrides};
use crate::config::paths::DATA_DIR_ENV_VAR;
use crate::config::{AppConfig, ParleyPaths, PathSource};
use crate::error::ConfigError;

use std::time::Duration;

use serial_test::serial;
use tempfile::tempdir;

/// **VALUE**: Verifies a missing config file yields defaults.
///
/// **WHY THIS MATTERS**: First run must work without any setup.
///
/// **BUG THIS CATCHES**: Would catch `load` erroring on a fresh machine.
#[test]
fn given_missing_config_file_when_loading_then_returns_defaults() {
    let dir = tempdir().unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.server.request_timeout(), None);
    assert_eq!(config.storage.store_file, "storage.json");
}

#[test]
fn given_saved_config_when_loaded_then_values_preserved() {
    let dir = tempdir().unwrap();
    let mut config = AppConfig::default();
    config.server.base_url = String::from("https://chat.example.com/");
    config.server.request_timeout_secs = Some(15);

    config.save(dir.path()).unwrap();
    let loaded = AppConfig::load(dir.path()).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.server.request_timeout(), Some(Duration::from_secs(15)));
    assert!(!dir.path().join("config.json.tmp").exists(), "temp file renamed away");
}

#[test]
fn given_partial_config_when_loaded_then_missing_fields_defaulted() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"server": {"base_url": "http://10.0.0.5:8080/"}}"#,
    )
    .unwrap();

    let config = AppConfig::load(dir.path()).unwrap();

    assert_eq!(config.version, 1);
    assert_eq!(config.server.base_url, "http://10.0.0.5:8080/");
    assert_eq!(config.storage.store_file, "storage.json");
}

#[test]
fn given_corrupt_config_when_loading_then_parse_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ nope").unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies validation rejects unusable values.
///
/// **WHY THIS MATTERS**: A bad base URL otherwise fails every request with an
/// opaque "Login failed".
///
/// **BUG THIS CATCHES**: Would catch a validate() that only checks the version.
#[test]
fn given_invalid_values_when_validated_then_validation_errors() {
    let mut bad_scheme = AppConfig::default();
    bad_scheme.server.base_url = String::from("ftp://example.com");

    let mut zero_timeout = AppConfig::default();
    zero_timeout.server.request_timeout_secs = Some(0);

    let mut nested_store = AppConfig::default();
    nested_store.storage.store_file = String::from("../escape.json");

    let mut future_version = AppConfig::default();
    future_version.version = 99;

    for config in [bad_scheme, zero_timeout, nested_store, future_version] {
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "should reject {config:?}"
        );
    }
}

#[test]
fn given_invalid_config_when_saving_then_nothing_written() {
    let dir = tempdir().unwrap();
    let mut config = AppConfig::default();
    config.server.base_url = String::new();

    assert!(config.save(dir.path()).is_err());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
#[serial]
fn given_base_url_env_var_when_overrides_applied_then_base_url_replaced() {
    // SAFETY: serialized with every other env-mutating test
    unsafe { std::env::set_var(BASE_URL_ENV_VAR, " http://override:9000/ ") };
    let mut config = AppConfig::default();

    let changed = apply_env_overrides(&mut config);

    unsafe { std::env::remove_var(BASE_URL_ENV_VAR) };
    assert!(changed);
    assert_eq!(config.server.base_url, "http://override:9000/");
}

#[test]
#[serial]
fn given_no_env_var_when_overrides_applied_then_config_unchanged() {
    unsafe { std::env::remove_var(BASE_URL_ENV_VAR) };
    let mut config = AppConfig::default();

    assert!(!apply_env_overrides(&mut config));
    assert_eq!(config, AppConfig::default());
}

#[test]
#[serial]
fn given_data_dir_env_var_when_detecting_paths_then_all_rooted_there() {
    let dir = tempdir().unwrap();
    unsafe { std::env::set_var(DATA_DIR_ENV_VAR, dir.path()) };

    let paths = ParleyPaths::detect();

    unsafe { std::env::remove_var(DATA_DIR_ENV_VAR) };
    let paths = paths.unwrap();
    assert_eq!(paths.source, PathSource::EnvVar);
    assert_eq!(paths.data_dir, dir.path());
    assert_eq!(paths.config_dir, dir.path());
    assert_eq!(paths.log_dir, dir.path());
}
