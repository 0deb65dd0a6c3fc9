//! Concurrent use of one engine from many threads

use deidentify::{Deidentifier, MatrixSchema, PiiCategory};
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_engine_is_consistent_across_threads() {
    let engine = Arc::new(Deidentifier::new("concurrency-key").unwrap());
    let emails: Vec<String> = (0..20).map(|i| format!("user{i}@example.com")).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let emails = emails.clone();
            thread::spawn(move || {
                emails
                    .iter()
                    .map(|e| engine.email(e).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for result in &results[1..] {
        assert_eq!(result, &results[0]);
    }
    assert_eq!(engine.mapping_count(), emails.len());
    assert_eq!(engine.context_count(), 1);
}

#[test]
fn test_text_and_matrix_in_parallel() {
    let engine = Arc::new(Deidentifier::new("concurrency-key").unwrap());

    let text_engine = Arc::clone(&engine);
    let text = thread::spawn(move || {
        (0..50)
            .map(|_| text_engine.text("Reach me at 555-123-4567").unwrap())
            .collect::<Vec<_>>()
    });

    let matrix_engine = Arc::clone(&engine);
    let matrix = thread::spawn(move || {
        let rows = vec![vec!["555-123-4567".to_string()]];
        let schema = MatrixSchema::new()
            .with_categories(vec![PiiCategory::Phone])
            .with_names(vec!["phone"]);
        (0..50)
            .map(|_| matrix_engine.matrix(&rows, &schema).unwrap()[0][0].clone())
            .collect::<Vec<_>>()
    });

    let texts = text.join().unwrap();
    let cells = matrix.join().unwrap();
    assert!(texts.windows(2).all(|w| w[0] == w[1]));
    assert!(cells.windows(2).all(|w| w[0] == w[1]));

    // Free text and the "phone" column share the fixed phone context
    assert_eq!(texts[0], format!("Reach me at {}", cells[0]));
}
