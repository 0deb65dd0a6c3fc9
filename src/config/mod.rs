//! Configuration management.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every section
//! - `DEIDENTIFY_*` environment overrides applied after parsing
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`EngineConfig`] - Secret key for the keyed hash
//! - [`InferenceConfig`] - Sample size and thresholds for column type inference
//! - [`LoggingConfig`] - Log level and optional JSON file output
//!
//! # Example Configuration
//!
//! ```toml
//! [engine]
//! secret_key = "${DEIDENTIFY_KEY}"
//!
//! [inference]
//! sample_rows = 10
//! name_threshold_pct = 30
//! default_threshold_pct = 50
//!
//! [logging]
//! level = "info"
//! local_enabled = false
//! ```
//!
//! # Validation
//!
//! ```rust,no_run
//! use deidentify::config::load_config;
//!
//! match load_config("deidentify.toml") {
//!     Ok(_config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use crate::pseudonymization::config::InferenceConfig;
pub use loader::{config_from_env, load_config};
pub use schema::{DeidentifyConfig, EngineConfig, LoggingConfig};
pub use secret::{generate_secret_key, secret_key, KeyMaterial, SecretKey};
