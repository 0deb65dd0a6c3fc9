//! Column type inference for untyped matrices

use crate::pseudonymization::config::InferenceConfig;
use crate::pseudonymization::detector::patterns::PatternCatalog;
use crate::pseudonymization::models::PiiCategory;
use std::sync::Arc;

/// Points a sampled cell adds to a category it matches
const HIT_SCORE: u64 = 10;
/// Names are matched loosely, so a name hit counts half
const NAME_HIT_SCORE: u64 = 5;

/// Candidates in tie-break order; a later category must score strictly higher to win
const CANDIDATES: [PiiCategory; 6] = [
    PiiCategory::Email,
    PiiCategory::CreditCard,
    PiiCategory::Ssn,
    PiiCategory::Phone,
    PiiCategory::Address,
    PiiCategory::Name,
];

/// Accumulated evidence for one column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnScores {
    /// Sampled cells that were neither empty nor whitespace
    pub valid_cells: usize,
    pub email: u64,
    pub phone: u64,
    pub ssn: u64,
    pub credit_card: u64,
    pub address: u64,
    pub name: u64,
}

impl ColumnScores {
    pub fn score(&self, category: PiiCategory) -> u64 {
        match category {
            PiiCategory::Email => self.email,
            PiiCategory::Phone => self.phone,
            PiiCategory::Ssn => self.ssn,
            PiiCategory::CreditCard => self.credit_card,
            PiiCategory::Address => self.address,
            PiiCategory::Name => self.name,
            PiiCategory::Generic => 0,
        }
    }
}

/// Guesses each column's category from a sample of its cells
#[derive(Debug, Clone)]
pub struct TypeInference {
    catalog: Arc<PatternCatalog>,
    config: InferenceConfig,
}

impl TypeInference {
    pub fn new(catalog: Arc<PatternCatalog>, config: InferenceConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Score the sampled cells of one column
    pub fn score_column<'a, I>(&self, cells: I) -> ColumnScores
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut scores = ColumnScores::default();

        for cell in cells.into_iter().take(self.config.sample_rows) {
            if cell.trim().is_empty() {
                continue;
            }
            scores.valid_cells += 1;

            if self.catalog.is_email(cell) {
                scores.email += HIT_SCORE;
            }
            if self.catalog.is_phone(cell) {
                scores.phone += HIT_SCORE;
            }
            if self.catalog.is_ssn(cell) {
                scores.ssn += HIT_SCORE;
            }
            if self.catalog.is_credit_card(cell) {
                scores.credit_card += HIT_SCORE;
            }
            if self.catalog.is_address(cell) {
                scores.address += HIT_SCORE;
            }
            if self.catalog.is_name_like(cell) && !self.catalog.has_street_type(cell) {
                scores.name += NAME_HIT_SCORE;
            }
        }

        scores
    }

    /// Pick the winning category, or `Generic` when the evidence is too thin
    pub fn classify(&self, scores: &ColumnScores) -> PiiCategory {
        if scores.valid_cells == 0 {
            return PiiCategory::Generic;
        }

        let mut best = PiiCategory::Generic;
        let mut best_score = 0;
        for category in CANDIDATES {
            let score = scores.score(category);
            if score > best_score {
                best = category;
                best_score = score;
            }
        }

        if best_score > 0 && best_score >= self.threshold(best, scores.valid_cells) {
            best
        } else {
            PiiCategory::Generic
        }
    }

    /// Infer one column from its cells in row order
    pub fn infer_column<'a, I>(&self, cells: I) -> PiiCategory
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.classify(&self.score_column(cells))
    }

    /// Infer every column of a row-major matrix; short rows contribute nothing to missing columns
    pub fn infer_matrix<R: AsRef<[String]>>(&self, rows: &[R], columns: usize) -> Vec<PiiCategory> {
        (0..columns)
            .map(|col| {
                self.infer_column(
                    rows.iter()
                        .take(self.config.sample_rows)
                        .map(|row| row.as_ref().get(col).map_or("", String::as_str)),
                )
            })
            .collect()
    }

    fn threshold(&self, category: PiiCategory, valid_cells: usize) -> u64 {
        let pct = match category {
            PiiCategory::Name => self.config.name_threshold_pct,
            _ => self.config.default_threshold_pct,
        };
        valid_cells as u64 * HIT_SCORE * u64::from(pct) / 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn inference() -> TypeInference {
        TypeInference::new(
            Arc::new(PatternCatalog::new().unwrap()),
            InferenceConfig::default(),
        )
    }

    #[test_case(&["a@b.com", "c@d.com"], PiiCategory::Email ; "emails")]
    #[test_case(&["Jane Doe", "Bob Lee"], PiiCategory::Name ; "names")]
    #[test_case(&["555-123-4567", "555-987-6543"], PiiCategory::Phone ; "phones")]
    #[test_case(&["4111 1111 1111 1111", "4000 1234 5678 9010"], PiiCategory::CreditCard ; "cards")]
    #[test_case(&["42 Baker Street", "7 Oak Avenue"], PiiCategory::Address ; "addresses")]
    #[test_case(&["apple", "banana"], PiiCategory::Generic ; "no evidence")]
    #[test_case(&["", "   "], PiiCategory::Generic ; "no valid cells")]
    fn test_infer_column(cells: &[&str], expected: PiiCategory) {
        assert_eq!(inference().infer_column(cells.iter().copied()), expected);
    }

    #[test]
    fn test_name_scores_half_weight() {
        let scores = inference().score_column(["Jane Doe", "Baker Street"]);
        assert_eq!(scores.valid_cells, 2);
        assert_eq!(scores.name, NAME_HIT_SCORE);
        assert_eq!(scores.address, HIT_SCORE);
    }

    #[test]
    fn test_ties_prefer_earlier_category() {
        let scores = ColumnScores {
            valid_cells: 1,
            ssn: 10,
            phone: 10,
            ..ColumnScores::default()
        };
        assert_eq!(inference().classify(&scores), PiiCategory::Ssn);
    }

    #[test]
    fn test_threshold_rejects_sparse_evidence() {
        let column = ["a@b.com", "x", "y", "z"];
        assert_eq!(inference().infer_column(column), PiiCategory::Generic);

        let column = ["a@b.com", "c@d.com", "y", "z"];
        assert_eq!(inference().infer_column(column), PiiCategory::Email);
    }

    #[test]
    fn test_only_leading_rows_sampled() {
        let mut column = vec!["plain"; 10];
        column.extend(["a@b.com"; 20]);
        assert_eq!(inference().infer_column(column), PiiCategory::Generic);
    }

    #[test]
    fn test_infer_matrix() {
        let rows = vec![
            vec!["a@b.com".to_string(), "Jane Doe".to_string(), "555-123-4567".to_string()],
            vec!["c@d.com".to_string(), "Bob Lee".to_string(), "555-987-6543".to_string()],
        ];
        assert_eq!(
            inference().infer_matrix(&rows, 3),
            vec![PiiCategory::Email, PiiCategory::Name, PiiCategory::Phone]
        );
    }
}
