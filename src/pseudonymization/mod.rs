//! Deterministic pseudonymization of free text and tabular data
//!
//! Detected PII is replaced with synthetic values derived from a keyed hash
//! of the original, so the same input and key always yield the same output
//! and the output keeps the shape of the input.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Detection**: a [`PatternCatalog`](detector::patterns::PatternCatalog) of
//!   compiled rules and a single-scan [`RegexDetector`](detector::regex::RegexDetector)
//! - **Generation**: a keyed [`Generator`](generator::Generator) producing
//!   format-preserving replacements
//! - **Consistency**: a [`ConsistencyStore`](store::ConsistencyStore) caching
//!   replacements per field context
//! - **Inference**: [`TypeInference`](inference::TypeInference) classifying
//!   columns by sampling their cells
//!
//! # Usage
//!
//! ```rust
//! use deidentify::pseudonymization::Deidentifier;
//!
//! let engine = Deidentifier::new("my-secret-key")?;
//! let output = engine.text("Contact john.doe@company.com")?;
//! assert!(!output.contains("john.doe@company.com"));
//! # Ok::<(), deidentify::DeidentifyError>(())
//! ```

pub mod anonymizer;
pub mod config;
pub mod detector;
pub mod engine;
pub mod generator;
pub mod inference;
pub mod models;
pub mod report;
pub mod store;

// Re-export main types
pub use config::InferenceConfig;
pub use engine::Deidentifier;
pub use models::{
    Column, MatchRule, MatrixSchema, PiiCategory, PiiMatch, Replacement, ReplacementOutcome,
    Table, TextOutcome,
};
pub use report::DetectionReport;
