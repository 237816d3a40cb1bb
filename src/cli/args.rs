//! Command line argument parsing for the did-you-mean CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// kurdish-didyoumean - "Did you mean?" suggestions for Sorani and Kurmanji words
#[derive(Parser, Debug, Clone)]
#[command(name = "kurdish-didyoumean")]
#[command(about = "Suggest corrections for misspelled Kurdish words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DidYouMeanArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "KURDISH_DIDYOUMEAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Additional word list, one word per line (repeatable)
    #[arg(short = 'd', long = "dictionary", value_name = "WORD_LIST")]
    pub dictionaries: Vec<PathBuf>,

    /// Do not seed the dictionary with the builtin Kurdish words
    #[arg(long)]
    pub no_builtin: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DidYouMeanArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for one or more words
    Suggest(SuggestArgs),

    /// Check every word of a phrase
    Check(CheckArgs),

    /// Test whether words are in the dictionary
    Contains(ContainsArgs),

    /// Run the demonstration word list
    Demo,

    /// Write the effective dictionary to a word list file
    Export(ExportArgs),
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Maximum number of suggestions per word (negative yields none)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub max_suggestions: Option<i64>,

    /// Maximum edit distance (negative yields none)
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Show how each suggestion was scored
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for checking a phrase
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text to check; multiple arguments are joined with spaces
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

impl CheckArgs {
    /// The text to check as a single string
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for dictionary membership tests
#[derive(Parser, Debug, Clone)]
pub struct ContainsArgs {
    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for exporting the dictionary
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Output word list path
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
