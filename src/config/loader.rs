//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DeidentifyConfig;
use super::secret_key;
use crate::domain::errors::DeidentifyError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DeidentifyConfig
/// 4. Applies environment variable overrides (DEIDENTIFY_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`DeidentifyError::Configuration`] if the file cannot be read or
/// parsed, a referenced variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use deidentify::config::loader::load_config;
///
/// let config = load_config("deidentify.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DeidentifyConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DeidentifyError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DeidentifyError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: DeidentifyConfig = toml::from_str(&contents)
        .map_err(|e| DeidentifyError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(&mut config)?;
    Ok(config)
}

/// Builds configuration from defaults and `DEIDENTIFY_*` variables only
pub fn config_from_env() -> Result<DeidentifyConfig> {
    let mut config = DeidentifyConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut DeidentifyConfig) -> Result<()> {
    apply_env_overrides(config)?;
    config.validate().map_err(|e| {
        DeidentifyError::Configuration(format!("Configuration validation failed: {e}"))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All missing variables are reported together.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| DeidentifyError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DeidentifyError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using DEIDENTIFY_* prefix
fn apply_env_overrides(config: &mut DeidentifyConfig) -> Result<()> {
    if let Ok(val) = std::env::var("DEIDENTIFY_SECRET_KEY") {
        config.engine.secret_key = Some(secret_key(val));
    }

    if let Ok(val) = std::env::var("DEIDENTIFY_LOG_LEVEL") {
        config.logging.level = val.to_lowercase();
    }
    if let Ok(val) = std::env::var("DEIDENTIFY_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            DeidentifyError::Configuration(format!(
                "Invalid DEIDENTIFY_LOGGING_LOCAL_ENABLED value: {val}"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("DEIDENTIFY_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("DEIDENTIFY_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    config
        .inference
        .apply_env_overrides()
        .map_err(|e| DeidentifyError::Configuration(format!("{e:#}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("DEIDENTIFY_TEST_SUBST_KEY", "from-env");
        let result = substitute_env_vars("secret_key = \"${DEIDENTIFY_TEST_SUBST_KEY}\"").unwrap();
        std::env::remove_var("DEIDENTIFY_TEST_SUBST_KEY");
        assert_eq!(result, "secret_key = \"from-env\"\n");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let err = substitute_env_vars("a = \"${DEIDENTIFY_TEST_UNSET_A}\"\nb = \"${DEIDENTIFY_TEST_UNSET_B}\"")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("DEIDENTIFY_TEST_UNSET_A"));
        assert!(msg.contains("DEIDENTIFY_TEST_UNSET_B"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# secret_key = \"${DEIDENTIFY_TEST_COMMENTED}\"";
        assert_eq!(substitute_env_vars(input).unwrap(), format!("{input}\n"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/deidentify.toml");
        assert!(matches!(result, Err(DeidentifyError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[engine]
secret_key = "file-key"

[logging]
level = "warn"
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.engine.secret_key.is_some());
        if std::env::var("DEIDENTIFY_SECRET_KEY").is_err() {
            assert_eq!(
                config.engine.secret_key.unwrap().expose_secret().as_bytes(),
                b"file-key"
            );
        }
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[engine\nsecret_key = ").unwrap();
        assert!(load_config(file.path()).is_err());
    }
}
