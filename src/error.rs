//! Error types for the did-you-mean library.
//!
//! The suggestion core never fails: degenerate input simply yields an empty
//! suggestion list. Errors only arise in the glue around it, such as loading
//! word lists, reading configuration files or handling CLI arguments.
//!
//! # Examples
//!
//! ```
//! use kurdish_didyoumean::error::{DidYouMeanError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DidYouMeanError::invalid_argument("threshold must be a number"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for did-you-mean operations.
#[derive(Error, Debug)]
pub enum DidYouMeanError {
    /// I/O errors (reading or writing word lists and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dictionary errors (malformed word lists and similar)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid argument supplied by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with DidYouMeanError.
pub type Result<T> = std::result::Result<T, DidYouMeanError>;

impl DidYouMeanError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DidYouMeanError::Config(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        DidYouMeanError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DidYouMeanError::InvalidArgument(msg.into())
    }
}
