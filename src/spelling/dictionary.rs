//! Dictionary management for spelling correction.
//!
//! [`SpellingDictionary`] is a set of known words that can be shared between
//! threads. Queries read an immutable [`DictionarySnapshot`] while other threads
//! keep adding words; each add becomes visible atomically to queries started
//! after it.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;

use crate::error::Result;

/// An immutable view of the dictionary taken at a point in time.
pub type DictionarySnapshot = Arc<HashSet<String>>;

/// Lines of a word list that hold a word.
fn word_list_entries(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// A set of known words for spelling correction.
///
/// Lookups are exact: case, diacritics and every code point must match.
#[derive(Debug, Default)]
pub struct SpellingDictionary {
    words: RwLock<DictionarySnapshot>,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary {
            words: RwLock::new(Arc::new(HashSet::new())),
        }
    }

    /// Create a dictionary seeded with the given words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dictionary = SpellingDictionary::new();
        dictionary.add_words(words);
        dictionary
    }

    /// Parse a word list with one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored, and surrounding
    /// whitespace is trimmed.
    pub fn from_str(content: &str) -> Self {
        let dictionary = SpellingDictionary::new();
        dictionary.add_words(word_list_entries(content));
        dictionary
    }

    /// Load dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let dictionary = Self::from_str(&content);

        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Add every word from a word list file, returning how many were new.
    pub fn extend_from_file<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let added = self.add_words(word_list_entries(&content));

        info!("Added {} new words from {}", added, path.display());

        Ok(added)
    }

    /// Save the dictionary as a word list, sorted by code point order.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let snapshot = self.snapshot();
        let mut words: Vec<&String> = snapshot.iter().collect();
        words.sort();

        let mut writer = BufWriter::new(File::create(path)?);
        for word in words {
            writeln!(writer, "{word}")?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Add a single word. Returns false if it was empty or already present.
    pub fn add_word<S: Into<String>>(&self, word: S) -> bool {
        self.add_words(std::iter::once(word)) == 1
    }

    /// Add words to the dictionary, ignoring duplicates and empty words.
    ///
    /// Returns the number of words that were not already present.
    pub fn add_words<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let new_words: Vec<String> = words
            .into_iter()
            .map(|word| Into::<String>::into(word).trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if new_words.is_empty() {
            return 0;
        }

        let mut guard = self.words.write();
        // Snapshots held by in-flight queries keep the old set alive
        let set = Arc::make_mut(&mut *guard);
        let before = set.len();
        set.extend(new_words);
        let added = set.len() - before;

        debug!("Dictionary grew by {} words to {}", added, set.len());

        added
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.read().contains(word)
    }

    /// Take an immutable snapshot of the current contents.
    pub fn snapshot(&self) -> DictionarySnapshot {
        Arc::clone(&self.words.read())
    }

    /// Get the total number of unique words.
    pub fn len(&self) -> usize {
        self.words.read().len()
    }

    /// Check whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.read().is_empty()
    }

    /// Get words that start with the given prefix, sorted.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let snapshot = self.snapshot();
        let mut words: Vec<String> = snapshot
            .iter()
            .filter(|word| word.starts_with(prefix))
            .cloned()
            .collect();
        words.sort();
        words
    }
}

impl Clone for SpellingDictionary {
    fn clone(&self) -> Self {
        SpellingDictionary {
            words: RwLock::new(Arc::new((*self.snapshot()).clone())),
        }
    }
}

/// Built-in Kurdish seed dictionaries.
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// Common Sorani words (Arabic script).
    pub const SORANI: &'static [&'static str] = &[
        "سڵاو", "چۆنی", "سوپاس", "بەڵێ", "نەخێر", "ماڵ", "ئاو", "نان", "کتێب", "قوتابی",
        "مامۆستا", "دایک", "باوک", "برا", "خوشک", "هاوڕێ", "ئیشت", "خواردن", "خەوتن", "وتن",
        "بینین", "گوێگرتن", "ڕۆیشتن", "هاتن", "کردن", "زانین", "فێربوون", "یاری", "کار",
        "پێکەنین",
    ];

    /// Common Kurmanji words (Latin script).
    pub const KURMANJI: &'static [&'static str] = &[
        "silav", "çoni", "spas", "erê", "na", "mal", "av", "nan", "pirtûk", "xwendekar",
        "mamosta", "dayik", "bav", "bira", "xwişk", "heval", "kar", "xwarin", "razân", "gotin",
        "dîtin", "guhdarî", "çûn", "hatin", "kirin", "zanîn", "hînbûn", "lîstin", "pêkenîn",
    ];

    /// Sorani and Kurmanji words together.
    pub fn kurdish() -> SpellingDictionary {
        SpellingDictionary::from_words(Self::SORANI.iter().chain(Self::KURMANJI).copied())
    }

    /// Sorani words only.
    pub fn sorani() -> SpellingDictionary {
        SpellingDictionary::from_words(Self::SORANI.iter().copied())
    }

    /// Kurmanji words only.
    pub fn kurmanji() -> SpellingDictionary {
        SpellingDictionary::from_words(Self::KURMANJI.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_basic_operations() {
        let dict = SpellingDictionary::new();

        assert!(!dict.contains("mal"));
        assert!(dict.is_empty());

        assert!(dict.add_word("mal"));
        assert!(dict.contains("mal"));
        assert_eq!(dict.len(), 1);

        // Duplicates are ignored
        assert!(!dict.add_word("mal"));
        assert_eq!(dict.add_words(["mal", "av", "av"]), 1);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_dictionary_is_exact() {
        let dict = SpellingDictionary::from_words(["pirtûk", "Heval"]);

        assert!(dict.contains("pirtûk"));
        assert!(!dict.contains("pirtuk"));
        assert!(dict.contains("Heval"));
        assert!(!dict.contains("heval"));
    }

    #[test]
    fn test_add_words_trims_and_skips_empty() {
        let dict = SpellingDictionary::new();
        assert_eq!(dict.add_words(["  ئاسمان ", "", "   "]), 1);
        assert!(dict.contains("ئاسمان"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_adds() {
        let dict = SpellingDictionary::from_words(["nan"]);
        let snapshot = dict.snapshot();

        dict.add_words(["کوردستان"]);

        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.contains("کوردستان"));
        assert!(dict.contains("کوردستان"));
        assert_eq!(dict.snapshot().len(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let dict = SpellingDictionary::from_words(["av"]);
        let copy = dict.clone();
        dict.add_word("bav");

        assert!(dict.contains("bav"));
        assert!(!copy.contains("bav"));
    }

    #[test]
    fn test_words_with_prefix() {
        let dict = SpellingDictionary::from_words(["hatin", "hat", "heval", "xwarin"]);

        assert_eq!(dict.words_with_prefix("ha"), vec!["hat", "hatin"]);
        assert_eq!(dict.words_with_prefix("h").len(), 3);
        assert!(dict.words_with_prefix("q").is_empty());
    }

    #[test]
    fn test_from_str_skips_comments() {
        let dict = SpellingDictionary::from_str("# Sorani\nسڵاو\n\n  نان  \n#mal\n");

        assert_eq!(dict.len(), 2);
        assert!(dict.contains("سڵاو"));
        assert!(dict.contains("نان"));
        assert!(!dict.contains("#mal"));
    }

    #[test]
    fn test_file_operations() {
        let dict = SpellingDictionary::from_words(["silav", "سڵاو", "av"]);

        let temp_file = NamedTempFile::new().unwrap();
        dict.save_to_file(temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, "av\nsilav\nسڵاو\n");

        let loaded = SpellingDictionary::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(loaded.contains("سڵاو"));
    }

    #[test]
    fn test_extend_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "کوردستان").unwrap();
        writeln!(temp_file, "mal").unwrap();
        temp_file.flush().unwrap();

        let dict = SpellingDictionary::from_words(["mal"]);
        let added = dict.extend_from_file(temp_file.path()).unwrap();

        assert_eq!(added, 1);
        assert!(dict.contains("کوردستان"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(SpellingDictionary::load_from_file("/nonexistent/words.txt").is_err());
    }

    #[test]
    fn test_builtin_dictionaries() {
        let kurdish = BuiltinDictionary::kurdish();
        assert_eq!(kurdish.len(), 59);
        assert!(kurdish.contains("سڵاو"));
        assert!(kurdish.contains("pirtûk"));

        assert_eq!(BuiltinDictionary::sorani().len(), 30);
        assert_eq!(BuiltinDictionary::kurmanji().len(), 29);
        assert!(!BuiltinDictionary::sorani().contains("mal"));
    }
}
