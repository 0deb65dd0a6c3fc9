//! Domain error types
//!
//! This module defines the error hierarchy for deidentify. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main deidentify error type
///
/// Schema and parameter errors surface immediately to the caller. Per-match
/// replacement failures inside free text are normally absorbed by the detector
/// and only become a [`DeidentifyError::Redaction`] when the caller asks for
/// strict handling.
#[derive(Debug, Error)]
pub enum DeidentifyError {
    /// Category or name arrays disagree with the number of matrix/table columns
    #[error(
        "Schema mismatch: data has {columns} columns but {categories} categories and {names} names were supplied"
    )]
    SchemaMismatch {
        columns: usize,
        categories: usize,
        names: usize,
    },

    /// An optional parameter has the wrong shape or an unknown value
    #[error("Bad parameter: {0}")]
    BadParameter(String),

    /// A table cell could not be turned into a string
    #[error("Invalid value in column '{column}', row {row}: {reason}")]
    InvalidValue {
        column: String,
        row: usize,
        reason: String,
    },

    /// A single replacement failed
    #[error("Failed to redact {category} value: {reason}")]
    Redaction { category: String, reason: String },

    /// The input source could not be read
    #[error("Input error: {0}")]
    Input(String),

    /// Secret key generation failed
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl DeidentifyError {
    /// Whether the caller must correct its input before retrying
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::SchemaMismatch { .. }
                | Self::BadParameter(_)
                | Self::InvalidValue { .. }
                | Self::Input(_)
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for DeidentifyError {
    fn from(err: std::io::Error) -> Self {
        DeidentifyError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DeidentifyError {
    fn from(err: serde_json::Error) -> Self {
        DeidentifyError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DeidentifyError {
    fn from(err: toml::de::Error) -> Self {
        DeidentifyError::Configuration(format!("TOML parse error: {err}"))
    }
}
