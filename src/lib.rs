// deidentify - Deterministic PII pseudonymization
// Copyright (c) 2025 Deidentify Contributors
// Licensed under the MIT License

//! # deidentify - Deterministic PII pseudonymization
//!
//! deidentify finds personally identifiable information in free text and
//! tabular data and replaces it with realistic synthetic values. Replacements
//! are derived from `HMAC-SHA256(secret_key, original)`, so the same input and
//! key always produce the same output, across runs and across processes.
//!
//! ## Overview
//!
//! This library provides:
//! - **Detection** of emails, phone numbers, SSNs, credit cards, names and
//!   addresses (including international formats) in free text
//! - **Format-preserving generation**: phones keep their punctuation, SSNs stay
//!   valid, card numbers pass the Luhn check
//! - **Consistency**: repeated values within a field context map to the same
//!   replacement for the lifetime of an engine
//! - **Type inference** for untyped string matrices
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`pseudonymization`] - Detection, generation, consistency and inference
//! - [`domain`] - Error and result types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use deidentify::Deidentifier;
//!
//! # fn main() -> deidentify::Result<()> {
//! let engine = Deidentifier::new("my-secret-key")?;
//!
//! let text = engine.text("Call John Smith at 555-123-4567")?;
//! assert!(!text.contains("555-123-4567"));
//!
//! let ssn = engine.ssn("123-45-6789")?;
//! assert_eq!(ssn.len(), 11);
//! # Ok(())
//! # }
//! ```
//!
//! ## Tabular Data
//!
//! Typed tables carry a category per column; string matrices may omit them and
//! have the categories inferred from a sample of rows:
//!
//! ```rust
//! use deidentify::{Deidentifier, MatrixSchema};
//!
//! # fn main() -> deidentify::Result<()> {
//! let engine = Deidentifier::new("my-secret-key")?;
//! let rows = vec![
//!     vec!["John Smith".to_string(), "john@example.com".to_string()],
//!     vec!["Jane Doe".to_string(), "jane@example.com".to_string()],
//! ];
//! let out = engine.matrix(&rows, &MatrixSchema::new())?;
//! assert_ne!(out[0][1], "john@example.com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`Result`] with a [`DeidentifyError`]:
//!
//! ```rust
//! use deidentify::{Deidentifier, DeidentifyError};
//!
//! let err = Deidentifier::new("").unwrap_err();
//! assert!(matches!(err, DeidentifyError::BadParameter(_)));
//! ```
//!
//! ## Logging
//!
//! deidentify uses structured logging with the `tracing` crate. Events carry
//! categories, counts and durations, never original or replacement values.

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod pseudonymization;

pub use config::generate_secret_key;
pub use domain::{DeidentifyError, Result};
pub use pseudonymization::{
    Column, DetectionReport, Deidentifier, MatrixSchema, PiiCategory, PiiMatch, Table,
    TextOutcome,
};
