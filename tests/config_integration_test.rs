//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX so they do not
//! interfere with each other.

use deidentify::config::{load_config, DeidentifyConfig};
use deidentify::{Deidentifier, DeidentifyError};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("DEIDENTIFY_SECRET_KEY");
    std::env::remove_var("DEIDENTIFY_LOG_LEVEL");
    std::env::remove_var("DEIDENTIFY_INFERENCE_SAMPLE_ROWS");
    std::env::remove_var("TEST_DEIDENTIFY_KEY");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[engine]
secret_key = "complete-key"

[inference]
sample_rows = 5
name_threshold_pct = 40
default_threshold_pct = 60

[logging]
level = "debug"
local_enabled = false
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.inference.sample_rows, 5);
    assert_eq!(config.inference.name_threshold_pct, 40);
    assert_eq!(config.logging.level, "debug");

    let engine = Deidentifier::from_config(&config).unwrap();
    let direct = Deidentifier::new("complete-key").unwrap();
    assert_eq!(
        engine.email("john@example.com").unwrap(),
        direct.email("john@example.com").unwrap()
    );
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_DEIDENTIFY_KEY", "substituted-key");

    let file = write_config("[engine]\nsecret_key = \"${TEST_DEIDENTIFY_KEY}\"\n");
    let config = load_config(file.path());
    cleanup_env_vars();

    let engine = Deidentifier::from_config(&config.unwrap()).unwrap();
    let direct = Deidentifier::new("substituted-key").unwrap();
    assert_eq!(engine.ssn("123-45-6789").unwrap(), direct.ssn("123-45-6789").unwrap());
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[engine]\nsecret_key = \"${TEST_DEIDENTIFY_KEY}\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_DEIDENTIFY_KEY"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("DEIDENTIFY_SECRET_KEY", "env-key");
    std::env::set_var("DEIDENTIFY_LOG_LEVEL", "WARN");
    std::env::set_var("DEIDENTIFY_INFERENCE_SAMPLE_ROWS", "3");

    let file = write_config("[engine]\nsecret_key = \"file-key\"\n");
    let config = load_config(file.path());
    cleanup_env_vars();

    let config = config.unwrap();
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.inference.sample_rows, 3);

    let engine = Deidentifier::from_config(&config).unwrap();
    let env_engine = Deidentifier::new("env-key").unwrap();
    assert_eq!(engine.name("Jane Doe").unwrap(), env_engine.name("Jane Doe").unwrap());
}

#[test]
fn test_invalid_override_is_config_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("DEIDENTIFY_INFERENCE_SAMPLE_ROWS", "many");

    let file = write_config("");
    let result = load_config(file.path());
    cleanup_env_vars();

    assert!(matches!(result, Err(DeidentifyError::Configuration(_))));
}

#[test]
fn test_empty_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.inference, DeidentifyConfig::default().inference);
    assert!(config.engine.secret_key.is_none());

    let err = Deidentifier::from_config(&config).unwrap_err();
    assert!(matches!(err, DeidentifyError::Configuration(_)));
}

#[test]
fn test_validation_failure() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[inference]\nsample_rows = 0\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("sample_rows"));
}
