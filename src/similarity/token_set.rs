// src/similarity/token_set.rs

use crate::similarity::{SimilarityScorer, to_percent, tokenize};

/// Classic token-set ratio.
///
/// Both texts are reduced to sorted distinct tokens. The shared tokens form a
/// common prefix `s`; each side is then rebuilt as `s` followed by its own
/// leftover tokens. The score is the best character-level similarity among
/// the three pairs (`s`, left), (`s`, right) and (left, right). A text whose
/// tokens are a subset of the other's therefore scores 100.
pub struct TokenSet;

impl SimilarityScorer for TokenSet {
    fn name(&self) -> &str {
        "token_set"
    }

    fn description(&self) -> &str {
        "Best character similarity between the shared tokens and each side's full token set."
    }

    fn ratio(&self, left: &str, right: &str) -> u8 {
        let left = tokenize(left);
        let right = tokenize(right);

        match (left.is_empty(), right.is_empty()) {
            (true, true) => return 100,
            (true, false) | (false, true) => return 0,
            _ => {}
        }

        let shared = join(left.intersection(&right));
        let left_full = combine(&shared, join(left.difference(&right)));
        let right_full = combine(&shared, join(right.difference(&left)));

        [
            indel_ratio(&shared, &left_full),
            indel_ratio(&shared, &right_full),
            indel_ratio(&left_full, &right_full),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

fn join<'a>(tokens: impl Iterator<Item = &'a String>) -> String {
    tokens.map(String::as_str).collect::<Vec<_>>().join(" ")
}

fn combine(prefix: &str, rest: String) -> String {
    format!("{} {}", prefix, rest).trim().to_string()
}

/// `2 * LCS / (len_a + len_b)` over characters, scaled to 0-100.
fn indel_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    to_percent(2 * lcs_len(&a, &b), total)
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_scores_full() {
        assert_eq!(TokenSet.ratio("Replace Filter", "Replace Hydraulic Filter"), 100);
    }

    #[test]
    fn reordered_tokens_score_full() {
        assert_eq!(TokenSet.ratio("filter hydraulic replace", "Replace Hydraulic Filter"), 100);
    }

    #[test]
    fn one_shared_token_lands_in_partial_band() {
        // shared "pump": best pair is "pump seal" / "pump valve" = 2*7/19
        assert_eq!(TokenSet.ratio("pump seal", "pump valve"), 74);
    }

    #[test]
    fn nothing_in_common() {
        assert_eq!(TokenSet.ratio("abc", "xyz"), 0);
    }

    #[test]
    fn empty_sides() {
        assert_eq!(TokenSet.ratio("", ""), 100);
        assert_eq!(TokenSet.ratio("", "filter"), 0);
    }

    #[test]
    fn lcs_counts_subsequence() {
        let a: Vec<char> = "seal".chars().collect();
        let b: Vec<char> = "valve".chars().collect();
        assert_eq!(lcs_len(&a, &b), 2);
    }
}
