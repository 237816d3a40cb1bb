//! Levenshtein distance calculation for spelling correction.
//!
//! Every function here compares Unicode scalar values (`char`), never bytes,
//! so a multi-byte Sorani letter such as `ڵ` counts as a single edit.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    levenshtein_distance_chars(&s1_chars, &s2_chars)
}

/// Calculate the Levenshtein distance between two already decoded code point sequences.
///
/// Uses two rolling rows sized by the shorter sequence.
pub fn levenshtein_distance_chars(s1: &[char], s2: &[char]) -> usize {
    // Keep the shorter sequence along the row
    let (long, short) = if s1.len() >= s2.len() {
        (s1, s2)
    } else {
        (s2, s1)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &long_ch) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &short_ch) in short.iter().enumerate() {
            curr_row[j + 1] = if long_ch == short_ch {
                prev_row[j]
            } else {
                1 + min(
                    min(
                        prev_row[j + 1], // deletion
                        curr_row[j],     // insertion
                    ),
                    prev_row[j], // substitution
                )
            };
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold, which can be more efficient
/// for filtering candidates.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    levenshtein_distance_threshold_chars(&s1_chars, &s2_chars, threshold)
}

/// Code point variant of [`levenshtein_distance_threshold`].
pub fn levenshtein_distance_threshold_chars(
    s1: &[char],
    s2: &[char],
    threshold: usize,
) -> Option<usize> {
    // The distance is never smaller than the length difference
    if s1.len().abs_diff(s2.len()) > threshold {
        return None;
    }

    let (long, short) = if s1.len() >= s2.len() {
        (s1, s2)
    } else {
        (s2, s1)
    };

    if short.is_empty() {
        return Some(long.len());
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &long_ch) in long.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &short_ch) in short.iter().enumerate() {
            curr_row[j + 1] = if long_ch == short_ch {
                prev_row[j]
            } else {
                1 + min(min(prev_row[j + 1], curr_row[j]), prev_row[j])
            };

            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Row minimums never decrease, so nothing below can come back under the threshold
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[short.len()];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}

/// Precomputed query for calculating distances against many candidates.
///
/// The query is decoded into code points once, instead of once per candidate.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();

        LevenshteinMatcher { query, query_chars }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the decoded code points of the query.
    pub fn query_chars(&self) -> &[char] {
        &self.query_chars
    }

    /// Length of the query in code points.
    pub fn query_len(&self) -> usize {
        self.query_chars.len()
    }

    /// Calculate distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        levenshtein_distance_chars(&self.query_chars, &candidate_chars)
    }

    /// Calculate distance to already decoded candidate code points, giving up past `threshold`.
    pub fn distance_threshold_chars(&self, candidate: &[char], threshold: usize) -> Option<usize> {
        levenshtein_distance_threshold_chars(&self.query_chars, candidate, threshold)
    }

    /// Calculate distance with threshold for early termination.
    pub fn distance_threshold(&self, candidate: &str, threshold: usize) -> Option<usize> {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        self.distance_threshold_chars(&candidate_chars, threshold)
    }

    /// Check if a candidate is within the given edit distance threshold.
    pub fn is_match(&self, candidate: &str, max_distance: usize) -> bool {
        self.distance_threshold(candidate, max_distance).is_some()
    }
}
