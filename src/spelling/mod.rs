//! Spelling correction and suggestion system.
//!
//! This module provides edit distance calculation, similarity scoring, a
//! shared word dictionary, and the "Did you mean?" ranking built on them.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod similarity;
pub mod suggest;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use similarity::*;
pub use suggest::*;
