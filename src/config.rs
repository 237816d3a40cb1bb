//! Application configuration loaded from JSON files.
//!
//! ```json
//! {
//!   "suggestion": { "max_suggestions": 5, "threshold": 2 },
//!   "dictionaries": ["words/sorani.txt"],
//!   "include_builtin": true
//! }
//! ```
//!
//! Every field is optional; missing fields take their default values.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{DidYouMeanError, Result};
use crate::spelling::dictionary::{BuiltinDictionary, SpellingDictionary};
use crate::spelling::suggest::SuggestionConfig;

/// Top level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Ranking parameters.
    pub suggestion: SuggestionConfig,
    /// Word list files added to the dictionary, one word per line.
    pub dictionaries: Vec<PathBuf>,
    /// Seed the dictionary with the builtin Sorani and Kurmanji words.
    pub include_builtin: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            suggestion: SuggestionConfig::default(),
            dictionaries: Vec::new(),
            include_builtin: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let config: AppConfig = serde_json::from_reader(reader)?;
        config.validate()?;

        info!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    /// Save configuration as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Reject weights that would make scores meaningless.
    pub fn validate(&self) -> Result<()> {
        let weights = &self.suggestion.weights;
        let all = [
            ("edit", weights.edit),
            ("length", weights.length),
            ("prefix", weights.prefix),
            ("suffix", weights.suffix),
        ];

        for (name, value) in all {
            if !value.is_finite() || value < 0.0 {
                return Err(DidYouMeanError::config(format!(
                    "weight '{name}' must be a finite non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Build the dictionary described by this configuration.
    pub fn build_dictionary(&self) -> Result<SpellingDictionary> {
        let dictionary = if self.include_builtin {
            BuiltinDictionary::kurdish()
        } else {
            SpellingDictionary::new()
        };

        for path in &self.dictionaries {
            dictionary.extend_from_file(path)?;
        }

        Ok(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.include_builtin);
        assert!(config.dictionaries.is_empty());
        assert_eq!(config.suggestion.max_suggestions, 3);
        assert_eq!(config.suggestion.threshold, 3);
    }

    #[test]
    fn test_partial_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"suggestion": {{"threshold": 1}}, "include_builtin": false}}"#).unwrap();
        file.flush().unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.suggestion.threshold, 1);
        assert_eq!(config.suggestion.max_suggestions, 3);
        assert!(!config.include_builtin);
    }

    #[test]
    fn test_config_round_trip_through_file() {
        let config = AppConfig {
            dictionaries: vec![PathBuf::from("words.txt")],
            ..Default::default()
        };

        let file = NamedTempFile::new().unwrap();
        config.save_to_file(file.path()).unwrap();

        assert_eq!(AppConfig::load_from_file(file.path()).unwrap(), config);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"suggestion": {{"weights": {{"edit": -1.0}}}}}}"#).unwrap();
        file.flush().unwrap();

        let error = AppConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(error, DidYouMeanError::Config(_)));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        file.flush().unwrap();

        let error = AppConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(error, DidYouMeanError::Json(_)));
    }

    #[test]
    fn test_build_dictionary() {
        let mut words = NamedTempFile::new().unwrap();
        writeln!(words, "کوردستان").unwrap();
        words.flush().unwrap();

        let config = AppConfig {
            dictionaries: vec![words.path().to_path_buf()],
            include_builtin: false,
            ..Default::default()
        };

        let dictionary = config.build_dictionary().unwrap();
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.contains("کوردستان"));

        let with_builtin = AppConfig {
            include_builtin: true,
            ..config
        };
        assert_eq!(with_builtin.build_dictionary().unwrap().len(), 60);
    }
}
