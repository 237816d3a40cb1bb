//! Multi-factor similarity scoring for suggestion candidates.
//!
//! A candidate's score combines four signals measured in code points:
//! edit similarity, length similarity, and the shared prefix and suffix.
//! The prefix and suffix terms are bonuses layered on top of the other two,
//! so a score can exceed 1.0. Callers must not treat it as a probability.

use serde::{Deserialize, Serialize};

/// Weights applied to each similarity factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight of `(max_len - distance) / max_len`.
    pub edit: f64,
    /// Weight of `1 - |len_a - len_b| / max_len`.
    pub length: f64,
    /// Weight of the shared leading code points ratio.
    pub prefix: f64,
    /// Weight of the shared trailing code points ratio.
    pub suffix: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            edit: 0.6,
            length: 0.2,
            prefix: 0.3,
            suffix: 0.2,
        }
    }
}

/// The individual factors that make up a score, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub edit_similarity: f64,
    pub length_similarity: f64,
    pub prefix_ratio: f64,
    pub suffix_ratio: f64,
    pub score: f64,
}

/// Count matching leading code points, stopping at the first mismatch.
pub fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Count matching trailing code points, scanning backward from both ends.
pub fn common_suffix_len(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Scores an input word against candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimilarityScorer {
    weights: ScoringWeights,
}

impl SimilarityScorer {
    /// Create a scorer with the given weights.
    pub fn new(weights: ScoringWeights) -> Self {
        SimilarityScorer { weights }
    }

    /// Get the weights used by this scorer.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a candidate given its precomputed edit distance from the input.
    ///
    /// Higher is more similar. Returns 0.0 when both words are empty.
    pub fn score(&self, input: &[char], candidate: &[char], edit_distance: usize) -> f64 {
        self.breakdown(input, candidate, edit_distance).score
    }

    /// Score a candidate and report every factor that went into it.
    pub fn breakdown(
        &self,
        input: &[char],
        candidate: &[char],
        edit_distance: usize,
    ) -> ScoreBreakdown {
        let max_len = input.len().max(candidate.len());
        if max_len == 0 {
            return ScoreBreakdown {
                edit_similarity: 0.0,
                length_similarity: 0.0,
                prefix_ratio: 0.0,
                suffix_ratio: 0.0,
                score: 0.0,
            };
        }

        let max_len = max_len as f64;
        let edit_similarity = (max_len - edit_distance as f64) / max_len;
        let length_similarity = 1.0 - input.len().abs_diff(candidate.len()) as f64 / max_len;
        let prefix_ratio = common_prefix_len(input, candidate) as f64 / max_len;
        let suffix_ratio = common_suffix_len(input, candidate) as f64 / max_len;

        let score = edit_similarity * self.weights.edit
            + length_similarity * self.weights.length
            + prefix_ratio * self.weights.prefix
            + suffix_ratio * self.weights.suffix;

        ScoreBreakdown {
            edit_similarity,
            length_similarity,
            prefix_ratio,
            suffix_ratio,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_common_prefix_and_suffix() {
        assert_eq!(common_prefix_len(&chars("maal"), &chars("mal")), 2);
        assert_eq!(common_suffix_len(&chars("maal"), &chars("mal")), 2);
        assert_eq!(common_prefix_len(&chars("سڵو"), &chars("سڵاو")), 2);
        assert_eq!(common_suffix_len(&chars("سڵو"), &chars("سڵاو")), 1);
        assert_eq!(common_prefix_len(&chars(""), &chars("nan")), 0);
        assert_eq!(common_suffix_len(&chars("xyz"), &chars("nan")), 0);
    }

    #[test]
    fn test_prefix_and_suffix_may_overlap() {
        // Both scans cover the whole word independently
        let a = chars("aa");
        let b = chars("aaa");
        assert_eq!(common_prefix_len(&a, &b), 2);
        assert_eq!(common_suffix_len(&a, &b), 2);
    }

    #[test]
    fn test_score_formula() {
        let scorer = SimilarityScorer::default();

        // maal -> mal: max_len 4, distance 1, prefix 2, suffix 2
        let breakdown = scorer.breakdown(&chars("maal"), &chars("mal"), 1);
        assert!((breakdown.edit_similarity - 0.75).abs() < 1e-9);
        assert!((breakdown.length_similarity - 0.75).abs() < 1e-9);
        assert!((breakdown.prefix_ratio - 0.5).abs() < 1e-9);
        assert!((breakdown.suffix_ratio - 0.5).abs() < 1e-9);

        let expected = 0.75 * 0.6 + 0.75 * 0.2 + 0.5 * 0.3 + 0.5 * 0.2;
        assert!((breakdown.score - expected).abs() < 1e-9);
        assert!((scorer.score(&chars("maal"), &chars("mal"), 1) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_score_can_exceed_one() {
        let scorer = SimilarityScorer::default();
        let word = chars("silav");

        // Identical words get every bonus
        let score = scorer.score(&word, &word, 0);
        assert!((score - 1.3).abs() < 1e-9);
        assert!(score > 1.0);
    }

    #[test]
    fn test_empty_words_score_zero() {
        let scorer = SimilarityScorer::default();
        assert_eq!(scorer.score(&[], &[], 0), 0.0);
    }

    #[test]
    fn test_custom_weights() {
        let scorer = SimilarityScorer::new(ScoringWeights {
            edit: 1.0,
            length: 0.0,
            prefix: 0.0,
            suffix: 0.0,
        });

        let score = scorer.score(&chars("maal"), &chars("mal"), 1);
        assert!((score - 0.75).abs() < 1e-9);
        assert_eq!(scorer.weights().edit, 1.0);
    }

    #[test]
    fn test_weights_deserialize_with_defaults() {
        let weights: ScoringWeights = serde_json::from_str(r#"{"prefix": 0.5}"#).unwrap();
        assert_eq!(weights.prefix, 0.5);
        assert_eq!(weights.edit, 0.6);
        assert_eq!(weights.suffix, 0.2);
    }
}
