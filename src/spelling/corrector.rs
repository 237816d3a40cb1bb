//! Phrase level spelling correction built on top of [`SuggestionEngine`].

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::spelling::suggest::{Suggestion, SuggestionConfig, SuggestionEngine};

/// Suggestions for one misspelled word of a phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCorrection {
    /// The word as written.
    pub word: String,
    /// Byte offset of the word in the original text.
    pub offset: usize,
    /// Ranked suggestions, best first. Empty when nothing is close enough.
    pub suggestions: Vec<Suggestion>,
}

impl WordCorrection {
    /// Get the best suggestion, if any.
    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

/// Result of spelling correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Original text.
    pub original: String,
    /// Text with each misspelled word replaced by its best suggestion, if any changed.
    pub corrected: Option<String>,
    /// Every word that is not in the dictionary, in text order.
    pub words: Vec<WordCorrection>,
    /// Number of words checked.
    pub checked_words: usize,
}

impl CorrectionResult {
    /// Check if any word was misspelled.
    pub fn has_misspellings(&self) -> bool {
        !self.words.is_empty()
    }

    /// Check if any corrections were suggested.
    pub fn has_suggestions(&self) -> bool {
        self.words.iter().any(|word| !word.suggestions.is_empty())
    }

    /// Get the corrected text or original if no correction.
    pub fn text(&self) -> &str {
        self.corrected.as_deref().unwrap_or(&self.original)
    }
}

/// Checks every word of a phrase against the dictionary.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    engine: SuggestionEngine,
}

impl SpellingCorrector {
    /// Create a corrector from a suggestion engine.
    pub fn new(engine: SuggestionEngine) -> Self {
        SpellingCorrector { engine }
    }

    /// Get the underlying suggestion engine.
    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    /// Update the suggestion configuration.
    pub fn set_config(&mut self, config: SuggestionConfig) {
        self.engine.set_config(config);
    }

    /// Correct a piece of text.
    ///
    /// Punctuation and spacing are kept as they are; only word segments are
    /// looked up and replaced.
    pub fn correct(&self, text: &str) -> CorrectionResult {
        let config = self.engine.config();
        let mut corrected = String::with_capacity(text.len());
        let mut words = Vec::new();
        let mut checked_words = 0;

        for (offset, segment) in text.split_word_bound_indices() {
            if !is_word(segment) {
                corrected.push_str(segment);
                continue;
            }

            checked_words += 1;
            if self.engine.contains(segment) {
                corrected.push_str(segment);
                continue;
            }

            let suggestions =
                self.engine
                    .suggest_detailed(segment, config.max_suggestions, config.threshold);

            match suggestions.first() {
                Some(best) => corrected.push_str(&best.word),
                None => corrected.push_str(segment),
            }

            words.push(WordCorrection {
                word: segment.to_string(),
                offset,
                suggestions,
            });
        }

        CorrectionResult {
            original: text.to_string(),
            corrected: (corrected != text).then_some(corrected),
            words,
            checked_words,
        }
    }

    /// Get suggestions for a single word.
    pub fn suggest_word(&self, word: &str) -> Vec<String> {
        self.engine.suggest(word)
    }

    /// Check if a word is correctly spelled.
    pub fn is_correct(&self, word: &str) -> bool {
        self.engine.contains(word)
    }
}

/// Extract the words of a text, skipping punctuation and whitespace.
pub fn extract_words(text: &str) -> Vec<&str> {
    text.split_word_bounds().filter(|s| is_word(s)).collect()
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::dictionary::{BuiltinDictionary, SpellingDictionary};

    fn corrector() -> SpellingCorrector {
        SpellingCorrector::new(SuggestionEngine::new(BuiltinDictionary::kurdish()))
    }

    #[test]
    fn test_word_extraction() {
        assert_eq!(extract_words("silav, heval!"), vec!["silav", "heval"]);
        assert_eq!(extract_words("سڵاو، چۆنی؟"), vec!["سڵاو", "چۆنی"]);
        assert!(extract_words("  ... ").is_empty());
    }

    #[test]
    fn test_correct_text_unchanged() {
        let result = corrector().correct("silav heval");

        assert!(!result.has_misspellings());
        assert_eq!(result.corrected, None);
        assert_eq!(result.text(), "silav heval");
        assert_eq!(result.checked_words, 2);
    }

    #[test]
    fn test_correct_text_with_typos() {
        let result = corrector().correct("maal, سڵو!");

        assert!(result.has_suggestions());
        assert_eq!(result.words.len(), 2);
        assert_eq!(result.words[0].word, "maal");
        assert_eq!(result.words[0].offset, 0);
        assert_eq!(result.words[0].best().map(|s| s.word.as_str()), Some("mal"));
        assert_eq!(result.words[1].word, "سڵو");
        assert_eq!(result.text(), "mal, سڵاو!");
    }

    #[test]
    fn test_unknown_word_without_suggestions() {
        let engine = SuggestionEngine::new(SpellingDictionary::from_words(["heval"]));
        let mut corrector = SpellingCorrector::new(engine);
        corrector.set_config(SuggestionConfig {
            threshold: 1,
            ..Default::default()
        });

        let result = corrector.correct("heval xyz");
        assert!(result.has_misspellings());
        assert!(!result.has_suggestions());
        assert_eq!(result.words[0].word, "xyz");
        assert_eq!(result.words[0].offset, 6);
        assert_eq!(result.corrected, None);
    }

    #[test]
    fn test_single_word_helpers() {
        let corrector = corrector();

        assert!(corrector.is_correct("pirtûk"));
        assert!(!corrector.is_correct("pirtuk"));
        assert_eq!(
            corrector.suggest_word("pirtuk").first().map(String::as_str),
            Some("pirtûk")
        );
    }
}
