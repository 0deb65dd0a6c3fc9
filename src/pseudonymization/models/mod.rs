//! Data models shared by the detector, generator and engine

pub mod pii_category;
pub mod pii_match;
pub mod table;

pub use pii_category::PiiCategory;
pub use pii_match::{MatchRule, PiiMatch, Replacement, ReplacementOutcome, TextOutcome};
pub use table::{Column, MatrixSchema, Table};
