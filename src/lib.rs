//! # kurdish-didyoumean
//!
//! "Did you mean?" spelling suggestions for Kurdish words written in Sorani
//! (Arabic script) or Kurmanji (Latin script).
//!
//! ## Features
//!
//! - Code point based edit distance, so multi-byte letters count as one edit
//! - Multi-factor ranking: edit distance, length, shared prefix and suffix
//! - A shared dictionary that can grow while queries run
//! - Phrase level checking and a small CLI
//!
//! ```
//! use kurdish_didyoumean::spelling::{BuiltinDictionary, SuggestionEngine};
//!
//! let engine = SuggestionEngine::new(BuiltinDictionary::kurdish());
//! assert_eq!(engine.suggest("maal").first().map(String::as_str), Some("mal"));
//! assert!(engine.suggest("silav").is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::error::{DidYouMeanError, Result};
    pub use crate::spelling::{
        BuiltinDictionary, SpellingCorrector, SpellingDictionary, Suggestion, SuggestionConfig,
        SuggestionEngine,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
