// src/similarity/token_overlap.rs

use crate::similarity::{SimilarityScorer, to_percent, tokenize};

/// Shared distinct tokens over all distinct tokens (Jaccard index).
pub struct TokenOverlap;

impl SimilarityScorer for TokenOverlap {
    fn name(&self) -> &str {
        "token_overlap"
    }

    fn description(&self) -> &str {
        "Share of distinct tokens the two texts have in common, ignoring order and repeats."
    }

    fn ratio(&self, left: &str, right: &str) -> u8 {
        let left = tokenize(left);
        let right = tokenize(right);

        match (left.is_empty(), right.is_empty()) {
            (true, true) => return 100,
            (true, false) | (false, true) => return 0,
            _ => {}
        }

        let shared = left.intersection(&right).count();
        let total = left.union(&right).count();
        to_percent(shared, total)
    }
}
