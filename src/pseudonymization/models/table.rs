//! Tabular input models

use super::PiiCategory;
use crate::domain::{DeidentifyError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named, typed column of optional values
///
/// `null` entries are preserved as-is. Scalars (strings, numbers, booleans)
/// are stringified before deidentification; arrays and objects are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub category: PiiCategory,
    #[serde(default)]
    pub values: Vec<Value>,
}

impl Column {
    /// Create a column from raw JSON values
    pub fn new(name: impl Into<String>, category: PiiCategory, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            category,
            values,
        }
    }

    /// Create a column from optional strings, `None` becoming `null`
    pub fn from_options<I, S>(name: impl Into<String>, category: PiiCategory, values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|v| v.map_or(Value::Null, |s| Value::String(s.into())))
            .collect();
        Self::new(name, category, values)
    }

    /// Stringify the value at `row`; `None` means the cell is null
    pub fn cell_as_string(&self, row: usize) -> Result<Option<String>> {
        match self.values.get(row) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(Value::Array(_)) | Some(Value::Object(_)) => Err(DeidentifyError::InvalidValue {
                column: self.name.clone(),
                row,
                reason: "arrays and objects cannot be stringified".to_string(),
            }),
        }
    }
}

/// Ordered collection of columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

/// Optional explicit schema for a string matrix
///
/// Missing categories are inferred from the data; missing names default to
/// `column_N`. When supplied, each list must have exactly one entry per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixSchema {
    #[serde(default)]
    pub categories: Option<Vec<PiiCategory>>,
    #[serde(default)]
    pub names: Option<Vec<String>>,
}

impl MatrixSchema {
    /// Schema with everything derived from the data
    pub fn new() -> Self {
        Self::default()
    }

    /// Set explicit per-column categories
    pub fn with_categories(mut self, categories: Vec<PiiCategory>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Set explicit per-column names
    pub fn with_names<S: Into<String>>(mut self, names: Vec<S>) -> Self {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Default names for `columns` columns
    pub fn default_names(columns: usize) -> Vec<String> {
        (0..columns).map(|i| format!("column_{i}")).collect()
    }
}
