//! Type inference configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Column type inference tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Number of leading rows sampled per column
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,

    /// Share of valid sampled cells (percent) a Name score must reach
    #[serde(default = "default_name_threshold_pct")]
    pub name_threshold_pct: u8,

    /// Share of valid sampled cells (percent) every other category must reach
    #[serde(default = "default_threshold_pct")]
    pub default_threshold_pct: u8,
}

fn default_sample_rows() -> usize {
    10
}

fn default_name_threshold_pct() -> u8 {
    30
}

fn default_threshold_pct() -> u8 {
    50
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_rows: default_sample_rows(),
            name_threshold_pct: default_name_threshold_pct(),
            default_threshold_pct: default_threshold_pct(),
        }
    }
}

impl InferenceConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.sample_rows == 0 {
            anyhow::bail!("inference.sample_rows must be at least 1");
        }
        for (name, pct) in [
            ("name_threshold_pct", self.name_threshold_pct),
            ("default_threshold_pct", self.default_threshold_pct),
        ] {
            if !(1..=100).contains(&pct) {
                anyhow::bail!("inference.{name} must be between 1 and 100, got {pct}");
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("DEIDENTIFY_INFERENCE_SAMPLE_ROWS") {
            self.sample_rows = val
                .parse()
                .context("Invalid DEIDENTIFY_INFERENCE_SAMPLE_ROWS value")?;
        }

        if let Ok(val) = std::env::var("DEIDENTIFY_INFERENCE_NAME_THRESHOLD_PCT") {
            self.name_threshold_pct = val
                .parse()
                .context("Invalid DEIDENTIFY_INFERENCE_NAME_THRESHOLD_PCT value")?;
        }

        if let Ok(val) = std::env::var("DEIDENTIFY_INFERENCE_DEFAULT_THRESHOLD_PCT") {
            self.default_threshold_pct = val
                .parse()
                .context("Invalid DEIDENTIFY_INFERENCE_DEFAULT_THRESHOLD_PCT value")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.sample_rows, 10);
        assert_eq!(config.name_threshold_pct, 30);
        assert_eq!(config.default_threshold_pct, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = InferenceConfig {
            sample_rows: 0,
            ..InferenceConfig::default()
        };
        assert!(config.validate().is_err());

        let config = InferenceConfig {
            name_threshold_pct: 101,
            ..InferenceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: InferenceConfig = toml::from_str("sample_rows = 25").unwrap();
        assert_eq!(config.sample_rows, 25);
        assert_eq!(config.name_threshold_pct, 30);
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("DEIDENTIFY_INFERENCE_SAMPLE_ROWS", "4");
        let mut config = InferenceConfig::default();
        let result = config.apply_env_overrides();
        std::env::remove_var("DEIDENTIFY_INFERENCE_SAMPLE_ROWS");

        assert!(result.is_ok());
        assert_eq!(config.sample_rows, 4);
    }
}
