// src/protocol/mod.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing a plan description with an action name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptionMatch {
    Match,
    Partial,
    None,
}

impl fmt::Display for DescriptionMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DescriptionMatch::Match => "Match",
            DescriptionMatch::Partial => "Partial",
            DescriptionMatch::None => "None",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Perfect,
    Likely,
    Mismatch,
}

impl Verdict {
    /// Maps the number of matching signals (0..=3) to a verdict.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Verdict::Mismatch,
            2 => Verdict::Likely,
            _ => Verdict::Perfect,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Perfect => "Perfect",
            Verdict::Likely => "Likely",
            Verdict::Mismatch => "Mismatch",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub plan_id: String,
    pub description_match: DescriptionMatch,
    pub frequency_match: bool,
    pub type_match: bool,
    pub verdict: Verdict,
    /// Similarity ratio (0-100) when fuzzy matching produced the description signal.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub similarity: Option<u8>,
}

impl EvaluationResult {
    /// Number of exact signals. Partial descriptions do not count.
    pub fn score(&self) -> u8 {
        [
            self.description_match == DescriptionMatch::Match,
            self.frequency_match,
            self.type_match,
        ]
        .iter()
        .filter(|hit| **hit)
        .count() as u8
    }

    pub fn is_perfect(&self) -> bool {
        self.verdict == Verdict::Perfect
    }
}
