// src/similarity/mod.rs

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub mod token_overlap;
pub mod token_set;

pub use token_overlap::TokenOverlap;
pub use token_set::TokenSet;

static NON_WORD: OnceLock<Regex> = OnceLock::new();

/// Trait for a pluggable description similarity scorer.
pub trait SimilarityScorer {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// Similarity of two strings on a 0-100 scale.
    fn ratio(&self, left: &str, right: &str) -> u8;
}

/// Which scorer fuzzy description matching uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    #[default]
    TokenOverlap,
    TokenSet,
}

impl SimilarityMetric {
    pub fn scorer(&self) -> &'static dyn SimilarityScorer {
        match self {
            SimilarityMetric::TokenOverlap => &TokenOverlap,
            SimilarityMetric::TokenSet => &TokenSet,
        }
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scorer().name())
    }
}

impl FromStr for SimilarityMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "token_overlap" => Ok(SimilarityMetric::TokenOverlap),
            "token_set" => Ok(SimilarityMetric::TokenSet),
            other => Err(format!(
                "unknown metric '{}', expected 'token_overlap' or 'token_set'",
                other
            )),
        }
    }
}

/// Lower-cases, turns every non-word character into a separator and
/// collects the distinct tokens in sorted order.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let non_word =
        NON_WORD.get_or_init(|| Regex::new(r"\W+").expect("Invalid non-word pattern"));
    let lowered = text.to_lowercase();
    non_word
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Scales `num / den` to 0-100, rounding half up in integer arithmetic.
///
/// A zero denominator means both sides were empty, which counts as identical.
pub(crate) fn to_percent(num: usize, den: usize) -> u8 {
    if den == 0 {
        return 100;
    }
    ((200 * num + den) / (2 * den)).min(100) as u8
}
