//! Main deidentification engine
//!
//! This module provides the [`Deidentifier`] that binds a secret key to a
//! consistency store and exposes every transform: free text, single values,
//! typed tables and untyped string matrices.
//!
//! # Architecture
//!
//! The engine coordinates four components:
//! - **Detector**: finds PII spans in free text with the compiled pattern catalog
//! - **Generator**: derives synthetic values from `HMAC-SHA256(key, original)`
//! - **Consistency store**: remembers replacements per field context
//! - **Type inference**: guesses categories for untyped matrix columns
//!
//! # Examples
//!
//! ```
//! use deidentify::Deidentifier;
//!
//! # fn example() -> deidentify::Result<()> {
//! let engine = Deidentifier::new("my-secret-key")?;
//!
//! let text = engine.text("Contact john.doe@company.com or 555-123-4567")?;
//! assert!(!text.contains("john.doe@company.com"));
//!
//! // The same input maps to the same replacement for the engine's lifetime
//! assert_eq!(engine.email("jane@example.com")?, engine.email("jane@example.com")?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::config::{secret_key, DeidentifyConfig, KeyMaterial, SecretKey};
use crate::domain::{DeidentifyError, Result};
use crate::pseudonymization::{
    anonymizer::{Anonymizer, ConsistentAnonymizer},
    config::InferenceConfig,
    detector::{patterns::PatternCatalog, regex::RegexDetector, PiiDetector},
    generator::{Generator, WordLists},
    inference::TypeInference,
    models::{Column, MatrixSchema, PiiCategory, PiiMatch, Table, TextOutcome},
    report::DetectionReport,
    store::ConsistencyStore,
};
use crate::{log_transform_complete, log_transform_start};
use std::fmt;
use std::io::Read;
use std::sync::Arc;
use std::time::Instant;

/// Deterministic PII deidentification engine
///
/// Every transform is synchronous and the engine is `Send + Sync`, so one
/// instance can be shared across threads behind an `Arc`. Replacements are
/// remembered for the lifetime of the instance (or until
/// [`clear_mappings`](Self::clear_mappings)), so repeated values always map to
/// the same synthetic value within a field context.
///
/// # Examples
///
/// ```
/// use deidentify::{Deidentifier, MatrixSchema, PiiCategory};
///
/// # fn example() -> deidentify::Result<()> {
/// let engine = Deidentifier::new("my-secret-key")?;
///
/// let rows = vec![
///     vec!["a@b.com".to_string(), "555-123-4567".to_string()],
///     vec!["c@d.com".to_string(), "555-987-6543".to_string()],
/// ];
/// let schema = MatrixSchema::new().with_categories(vec![PiiCategory::Email, PiiCategory::Phone]);
/// let out = engine.matrix(&rows, &schema)?;
/// assert_eq!(out.len(), 2);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct Deidentifier {
    detector: RegexDetector,
    anonymizer: ConsistentAnonymizer,
    inference: TypeInference,
}

impl Deidentifier {
    /// Create an engine for `secret_key` with built-in patterns and word lists
    ///
    /// The UTF-8 bytes of the key are the HMAC key; hex keys are not decoded.
    ///
    /// # Errors
    ///
    /// Returns [`DeidentifyError::BadParameter`] for an empty key.
    pub fn new(key: impl Into<KeyMaterial>) -> Result<Self> {
        Self::with_key(&secret_key(key))
    }

    /// Create an engine from an already wrapped key
    pub fn with_key(key: &SecretKey) -> Result<Self> {
        Self::with_catalog(
            key,
            Arc::new(PatternCatalog::new()?),
            WordLists::default(),
            InferenceConfig::default(),
        )
    }

    /// Create an engine around a shared, already compiled catalog
    ///
    /// Useful when several engines (for example one per tenant key) should not
    /// each compile the address patterns.
    pub fn with_catalog(
        key: &SecretKey,
        catalog: Arc<PatternCatalog>,
        words: WordLists,
        inference: InferenceConfig,
    ) -> Result<Self> {
        inference
            .validate()
            .map_err(|e| DeidentifyError::BadParameter(format!("{e:#}")))?;

        let generator = Generator::with_word_lists(key, words)?;
        let anonymizer =
            ConsistentAnonymizer::new(Arc::new(generator), Arc::new(ConsistencyStore::new()));

        Ok(Self {
            detector: RegexDetector::with_catalog(Arc::clone(&catalog)),
            anonymizer,
            inference: TypeInference::new(catalog, inference),
        })
    }

    /// Create an engine from a loaded configuration
    ///
    /// # Errors
    ///
    /// Returns [`DeidentifyError::Configuration`] when no secret key is configured.
    pub fn from_config(config: &DeidentifyConfig) -> Result<Self> {
        let key = Self::configured_key(config)?;
        Self::with_catalog(
            key,
            Arc::new(PatternCatalog::new()?),
            WordLists::default(),
            config.inference.clone(),
        )
    }

    fn configured_key(config: &DeidentifyConfig) -> Result<&SecretKey> {
        config.engine.secret_key.as_ref().ok_or_else(|| {
            DeidentifyError::Configuration(
                "no secret key configured (engine.secret_key or DEIDENTIFY_SECRET_KEY)".to_string(),
            )
        })
    }

    /// Deidentify free text
    ///
    /// Failed replacements leave their category's sentinel (for example
    /// `[EMAIL REDACTION ERROR]`) in the output; use
    /// [`text_report`](Self::text_report) to inspect them.
    pub fn text(&self, text: &str) -> Result<String> {
        Ok(self.text_report(text).text)
    }

    /// Deidentify free text and report the outcome of every replacement
    pub fn text_report(&self, text: &str) -> TextOutcome {
        if text.is_empty() {
            return TextOutcome::unchanged("");
        }

        let started = Instant::now();
        log_transform_start!("text", text.len());

        let outcome = self.detector.redact(text, &self.anonymizer);

        let failures = outcome.failures().count();
        if failures > 0 {
            tracing::warn!(failures, "Some replacements fell back to sentinels");
        }
        log_transform_complete!("text", outcome.replacements.len(), started.elapsed());
        outcome
    }

    /// Deidentify free text read from `reader`
    ///
    /// # Errors
    ///
    /// Returns [`DeidentifyError::Input`] when the reader fails or yields invalid UTF-8.
    pub fn text_from_reader<R: Read>(&self, mut reader: R) -> Result<String> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| DeidentifyError::Input(format!("failed to read text: {e}")))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| DeidentifyError::Input(format!("text is not valid UTF-8: {e}")))?;
        self.text(&text)
    }

    /// PII spans that [`text`](Self::text) would replace, without replacing them
    pub fn detect(&self, text: &str) -> Vec<PiiMatch> {
        if text.is_empty() {
            return Vec::new();
        }
        self.detector.detect(text)
    }

    /// Detection statistics for `text`
    pub fn report(&self, text: &str) -> DetectionReport {
        DetectionReport::from_matches(&self.detect(text))
    }

    pub fn name(&self, value: &str) -> Result<String> {
        self.single(value, PiiCategory::Name)
    }

    pub fn email(&self, value: &str) -> Result<String> {
        self.single(value, PiiCategory::Email)
    }

    /// Keeps the original's punctuation, spacing and area code
    pub fn phone(&self, value: &str) -> Result<String> {
        self.single(value, PiiCategory::Phone)
    }

    pub fn ssn(&self, value: &str) -> Result<String> {
        self.single(value, PiiCategory::Ssn)
    }

    pub fn credit_card(&self, value: &str) -> Result<String> {
        self.single(value, PiiCategory::CreditCard)
    }

    pub fn generic(&self, value: &str) -> Result<String> {
        self.single(value, PiiCategory::Generic)
    }

    /// Deidentify an address, keeping a leading label such as `"European HQ:"`
    ///
    /// ```
    /// # let engine = deidentify::Deidentifier::new("k").unwrap();
    /// let out = engine.address("European HQ: 15 Rue de Rivoli").unwrap();
    /// assert!(out.starts_with("European HQ: "));
    /// ```
    pub fn address(&self, value: &str) -> Result<String> {
        let trimmed = value.trim();
        match trimmed.find(':') {
            Some(colon) => {
                let (label, rest) = trimmed.split_at(colon + 1);
                let rest = rest.trim();
                if rest.is_empty() {
                    return Ok(trimmed.to_string());
                }
                let replaced = self.single(rest, PiiCategory::Address)?;
                Ok(format!("{label} {replaced}"))
            }
            None => self.single(trimmed, PiiCategory::Address),
        }
    }

    /// Deidentify one value of `category` under an explicit field context
    pub fn value(&self, value: &str, category: PiiCategory, field_context: &str) -> Result<String> {
        self.anonymizer.anonymize_field(category, value, field_context)
    }

    fn single(&self, value: &str, category: PiiCategory) -> Result<String> {
        self.value(value, category, category.field_context())
    }

    /// Deidentify a typed table
    ///
    /// Each column uses its name as field context. `null` cells stay `null` at
    /// the same position; other scalars are stringified first.
    ///
    /// # Errors
    ///
    /// Returns [`DeidentifyError::InvalidValue`] for array or object cells.
    pub fn table(&self, table: &Table) -> Result<Table> {
        let started = Instant::now();
        log_transform_start!("table", table.columns.len());

        let mut columns = Vec::with_capacity(table.columns.len());
        let mut replaced = 0usize;

        for column in &table.columns {
            let mut values = Vec::with_capacity(column.values.len());
            for row in 0..column.values.len() {
                match column.cell_as_string(row)? {
                    None => values.push(serde_json::Value::Null),
                    Some(cell) => {
                        let out = self.value(&cell, column.category, &column.name)?;
                        replaced += 1;
                        values.push(serde_json::Value::String(out));
                    }
                }
            }
            columns.push(Column::new(column.name.clone(), column.category, values));
        }

        log_transform_complete!("table", replaced, started.elapsed());
        Ok(Table::new(columns))
    }

    /// Deidentify a row-major string matrix
    ///
    /// The column count is the width of the first row. Missing categories are
    /// inferred from the data and missing names default to `column_N`; supplied
    /// lists must match the column count. Empty cells pass through and short
    /// rows keep their width.
    ///
    /// # Errors
    ///
    /// Returns [`DeidentifyError::SchemaMismatch`] when a supplied list has the
    /// wrong length or a row is wider than the first.
    pub fn matrix<R: AsRef<[String]>>(
        &self,
        rows: &[R],
        schema: &MatrixSchema,
    ) -> Result<Vec<Vec<String>>> {
        let Some(first) = rows.first() else {
            return Ok(Vec::new());
        };
        let columns = first.as_ref().len();

        let categories = match &schema.categories {
            Some(categories) => categories.clone(),
            None => self.inference.infer_matrix(rows, columns),
        };
        let names = match &schema.names {
            Some(names) => names.clone(),
            None => MatrixSchema::default_names(columns),
        };

        if categories.len() != columns || names.len() != columns {
            return Err(DeidentifyError::SchemaMismatch {
                columns,
                categories: categories.len(),
                names: names.len(),
            });
        }

        let started = Instant::now();
        log_transform_start!("matrix", rows.len());

        let mut out = Vec::with_capacity(rows.len());
        let mut replaced = 0usize;

        for row in rows {
            let row = row.as_ref();
            if row.len() > columns {
                return Err(DeidentifyError::SchemaMismatch {
                    columns: row.len(),
                    categories: categories.len(),
                    names: names.len(),
                });
            }

            let mut out_row = Vec::with_capacity(row.len());
            for (col, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    out_row.push(String::new());
                    continue;
                }
                out_row.push(self.value(cell, categories[col], &names[col])?);
                replaced += 1;
            }
            out.push(out_row);
        }

        log_transform_complete!("matrix", replaced, started.elapsed());
        Ok(out)
    }

    /// Categories the matrix transform would infer for `rows`
    pub fn infer_categories<R: AsRef<[String]>>(&self, rows: &[R]) -> Vec<PiiCategory> {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        self.inference.infer_matrix(rows, columns)
    }

    /// Forget every stored replacement, starting a fresh consistency scope
    pub fn clear_mappings(&self) {
        self.anonymizer.store().clear();
        tracing::debug!("Cleared replacement mappings");
    }

    /// Number of stored replacements across all field contexts
    pub fn mapping_count(&self) -> usize {
        self.anonymizer.store().len()
    }

    /// Number of field contexts holding replacements
    pub fn context_count(&self) -> usize {
        self.anonymizer.store().context_count()
    }
}

impl fmt::Debug for Deidentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deidentifier")
            .field("key", &"[REDACTED]")
            .field("mappings", &self.mapping_count())
            .field("contexts", &self.context_count())
            .finish()
    }
}
