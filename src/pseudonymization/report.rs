//! Dry-run reporting for text deidentification
//!
//! Summarises what the detector would replace without exposing the matched
//! values themselves: only categories, rules and byte spans are kept.

use crate::pseudonymization::models::{MatchRule, PiiCategory, PiiMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Location of one detection, without its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionSpan {
    pub category: PiiCategory,
    pub rule: MatchRule,
    pub start: usize,
    pub end: usize,
}

/// Detection statistics for one or more documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Documents analysed
    pub total_documents: usize,

    /// Total spans that would be replaced
    pub total_detections: usize,

    /// Detections by category
    pub detections_by_category: BTreeMap<PiiCategory, usize>,

    /// Detections by producing rule
    pub detections_by_rule: BTreeMap<MatchRule, usize>,

    /// Spans in document order (capped)
    pub spans: Vec<DetectionSpan>,
}

/// Spans kept in a report
const MAX_SPANS: usize = 100;

impl DetectionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for a single document
    pub fn from_matches(matches: &[PiiMatch]) -> Self {
        let mut report = Self::new();
        report.add_document(matches);
        report
    }

    /// Add the matches found in one document
    pub fn add_document(&mut self, matches: &[PiiMatch]) {
        self.total_documents += 1;
        self.total_detections += matches.len();

        for m in matches {
            *self.detections_by_category.entry(m.category).or_insert(0) += 1;
            *self.detections_by_rule.entry(m.rule).or_insert(0) += 1;

            if self.spans.len() < MAX_SPANS {
                self.spans.push(DetectionSpan {
                    category: m.category,
                    rule: m.rule,
                    start: m.start,
                    end: m.end,
                });
            }
        }
    }

    pub fn count(&self, category: PiiCategory) -> usize {
        self.detections_by_category.get(&category).copied().unwrap_or(0)
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push_str("DEIDENTIFICATION DRY-RUN REPORT\n");
        output.push_str("-------------------------------\n");
        output.push_str(&format!("  Documents analysed: {}\n", self.total_documents));
        output.push_str(&format!("  PII detected:       {}\n", self.total_detections));

        if !self.detections_by_category.is_empty() {
            output.push_str("\nBY CATEGORY\n");

            let mut categories: Vec<_> = self.detections_by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1));

            for (category, count) in categories {
                output.push_str(&format!("  {:20} {:>5}\n", category.label(), count));
            }
        }

        if !self.spans.is_empty() {
            output.push_str("\nSPANS\n");
            for span in &self.spans {
                output.push_str(&format!(
                    "  {:12} {:>6}..{:<6} ({:?})\n",
                    span.category.label(),
                    span.start,
                    span.end,
                    span.rule
                ));
            }
        }

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
