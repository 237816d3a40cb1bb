//! Spelling suggestion ranking.
//!
//! [`SuggestionEngine::suggest`] walks a query through a fixed pipeline:
//! validate the input, stop early if the word is already known, score every
//! dictionary word, drop candidates past the edit distance threshold, sort,
//! and keep the best few.

use std::cmp::Ordering;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::levenshtein::LevenshteinMatcher;
use crate::spelling::similarity::{ScoringWeights, SimilarityScorer};

/// Default number of suggestions returned by [`SuggestionEngine::suggest`].
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Default maximum edit distance used by [`SuggestionEngine::suggest`].
pub const DEFAULT_THRESHOLD: usize = 3;

/// A scored candidate produced while ranking one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Similarity score (higher is better, may exceed 1.0).
    pub score: f64,
    /// Edit distance from the original word.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, score: f64, distance: usize) -> Self {
        Suggestion {
            word,
            score,
            distance,
        }
    }
}

impl Eq for Suggestion {}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher scores first, then closer words, then code point order
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.distance.cmp(&other.distance))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Configuration for spelling suggestion generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Maximum edit distance to consider (inclusive).
    pub threshold: usize,
    /// Weights of the similarity factors.
    pub weights: ScoringWeights,
    /// Dictionaries with at least this many words are scored on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            threshold: DEFAULT_THRESHOLD,
            weights: ScoringWeights::default(),
            parallel_threshold: 1024,
        }
    }
}

/// Main spelling suggestion engine.
///
/// The engine shares its dictionary through an [`Arc`], so another component
/// may keep adding words while queries run.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    dictionary: Arc<SpellingDictionary>,
    config: SuggestionConfig,
    scorer: SimilarityScorer,
}

impl SuggestionEngine {
    /// Create a new suggestion engine with the given dictionary.
    pub fn new<D: Into<Arc<SpellingDictionary>>>(dictionary: D) -> Self {
        Self::with_config(dictionary, SuggestionConfig::default())
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config<D: Into<Arc<SpellingDictionary>>>(
        dictionary: D,
        config: SuggestionConfig,
    ) -> Self {
        SuggestionEngine {
            dictionary: dictionary.into(),
            scorer: SimilarityScorer::new(config.weights),
            config,
        }
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: SuggestionConfig) {
        self.scorer = SimilarityScorer::new(config.weights);
        self.config = config;
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Get the shared dictionary.
    pub fn dictionary(&self) -> &Arc<SpellingDictionary> {
        &self.dictionary
    }

    /// Get suggestions using the configured limits (3 suggestions within distance 3 by default).
    pub fn suggest(&self, input: &str) -> Vec<String> {
        self.suggest_with(input, self.config.max_suggestions, self.config.threshold)
    }

    /// Get suggestions for possibly absent input. `None` yields no suggestions.
    pub fn suggest_opt(&self, input: Option<&str>) -> Vec<String> {
        match input {
            Some(input) => self.suggest(input),
            None => Vec::new(),
        }
    }

    /// Get at most `max_suggestions` words within `threshold` edits of `input`.
    ///
    /// Returns nothing when the input is blank or already a dictionary word.
    pub fn suggest_with(&self, input: &str, max_suggestions: usize, threshold: usize) -> Vec<String> {
        self.suggest_detailed(input, max_suggestions, threshold)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Variant of [`suggest_with`](Self::suggest_with) taking signed limits.
    ///
    /// A negative `max_suggestions` or `threshold` yields no suggestions.
    pub fn suggest_signed(&self, input: &str, max_suggestions: i64, threshold: i64) -> Vec<String> {
        self.suggest_detailed_signed(input, max_suggestions, threshold)
            .into_iter()
            .map(|suggestion| suggestion.word)
            .collect()
    }

    /// Variant of [`suggest_detailed`](Self::suggest_detailed) taking signed limits.
    pub fn suggest_detailed_signed(
        &self,
        input: &str,
        max_suggestions: i64,
        threshold: i64,
    ) -> Vec<Suggestion> {
        match (usize::try_from(max_suggestions), usize::try_from(threshold)) {
            (Ok(max_suggestions), Ok(threshold)) => {
                self.suggest_detailed(input, max_suggestions, threshold)
            }
            _ => {
                debug!(
                    "Negative limits (max_suggestions={max_suggestions}, threshold={threshold}), no suggestions"
                );
                Vec::new()
            }
        }
    }

    /// Rank candidates for `input`, keeping their scores and distances.
    pub fn suggest_detailed(
        &self,
        input: &str,
        max_suggestions: usize,
        threshold: usize,
    ) -> Vec<Suggestion> {
        let word = input.trim();
        if word.is_empty() {
            debug!("Blank input, no suggestions");
            return Vec::new();
        }

        // Every later step reads the same snapshot
        let snapshot = self.dictionary.snapshot();
        if snapshot.contains(word) {
            debug!("'{word}' is a dictionary word, no suggestions");
            return Vec::new();
        }

        if max_suggestions == 0 {
            return Vec::new();
        }

        let matcher = LevenshteinMatcher::new(word);
        let mut candidates: Vec<Suggestion> = if snapshot.len() >= self.config.parallel_threshold
        {
            snapshot
                .par_iter()
                .filter_map(|candidate| self.score_candidate(&matcher, candidate, threshold))
                .collect()
        } else {
            snapshot
                .iter()
                .filter_map(|candidate| self.score_candidate(&matcher, candidate, threshold))
                .collect()
        };

        debug!(
            "'{word}': {} of {} words within distance {threshold}",
            candidates.len(),
            snapshot.len()
        );

        candidates.sort_unstable();
        candidates.truncate(max_suggestions);
        candidates
    }

    /// Distance and score one dictionary word, or None if it is too far away.
    fn score_candidate(
        &self,
        matcher: &LevenshteinMatcher,
        candidate: &str,
        threshold: usize,
    ) -> Option<Suggestion> {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        let distance = matcher.distance_threshold_chars(&candidate_chars, threshold)?;
        let score = self
            .scorer
            .score(matcher.query_chars(), &candidate_chars, distance);

        Some(Suggestion::new(candidate.to_string(), score, distance))
    }

    /// Add words to the shared dictionary, returning how many were new.
    pub fn add_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dictionary.add_words(words)
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Get the number of words in the dictionary.
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }
}
