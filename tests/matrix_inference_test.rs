//! Integration tests for column type inference on untyped matrices

use deidentify::config::InferenceConfig;
use deidentify::config::secret_key;
use deidentify::pseudonymization::detector::patterns::PatternCatalog;
use deidentify::pseudonymization::generator::WordLists;
use deidentify::{Deidentifier, MatrixSchema, PiiCategory};
use std::sync::Arc;

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_inference_scenario() {
    let engine = Deidentifier::new("inference-key").unwrap();
    let data = rows(&[
        &["a@b.com", "Jane Doe", "555-123-4567"],
        &["c@d.com", "Bob Lee", "555-987-6543"],
    ]);

    let categories = engine.infer_categories(&data);
    assert_eq!(categories[0], PiiCategory::Email);
    assert_eq!(categories[2], PiiCategory::Phone);

    let out = engine.matrix(&data, &MatrixSchema::new()).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out[0][0].contains('@'));
    assert_ne!(out[0][0], "a@b.com");
    assert_ne!(out[0][2], "555-123-4567");
}

#[test]
fn test_unrecognised_column_is_generic() {
    let engine = Deidentifier::new("inference-key").unwrap();
    let data = rows(&[&["alpha"], &["beta"], &["gamma"]]);

    assert_eq!(engine.infer_categories(&data), vec![PiiCategory::Generic]);
    let out = engine.matrix(&data, &MatrixSchema::new()).unwrap();
    assert!(out.iter().all(|row| row[0].starts_with("DATA_")));
}

#[test]
fn test_empty_column_is_generic() {
    let engine = Deidentifier::new("inference-key").unwrap();
    let data = rows(&[&["", "x@y.com"], &["", "z@y.com"]]);
    assert_eq!(
        engine.infer_categories(&data),
        vec![PiiCategory::Generic, PiiCategory::Email]
    );
}

#[test]
fn test_zero_rows() {
    let engine = Deidentifier::new("inference-key").unwrap();
    let data: Vec<Vec<String>> = Vec::new();
    assert!(engine.infer_categories(&data).is_empty());
    assert!(engine.matrix(&data, &MatrixSchema::new()).unwrap().is_empty());
}

#[test]
fn test_shared_catalog_with_custom_thresholds() {
    let catalog = Arc::new(PatternCatalog::new().unwrap());
    let strict = InferenceConfig {
        sample_rows: 10,
        name_threshold_pct: 100,
        default_threshold_pct: 100,
    };
    let engine = Deidentifier::with_catalog(
        &secret_key("inference-key"),
        Arc::clone(&catalog),
        WordLists::default(),
        strict,
    )
    .unwrap();

    // One email out of two cells no longer clears a 100% threshold
    let data = rows(&[&["a@b.com"], &["not an email"]]);
    assert_eq!(engine.infer_categories(&data), vec![PiiCategory::Generic]);
}
