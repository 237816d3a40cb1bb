//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{DidYouMeanArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::corrector::CorrectionResult;
use crate::spelling::similarity::ScoreBreakdown;

/// One ranked suggestion as printed by the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub word: String,
    pub score: f64,
    pub distance: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

/// Suggestions for one input word.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub input: String,
    pub in_dictionary: bool,
    pub suggestions: Vec<SuggestionEntry>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResults {
    pub results: Vec<SuggestResult>,
    pub max_suggestions: i64,
    pub threshold: i64,
}

/// Result structure for the contains command.
#[derive(Debug, Serialize, Deserialize)]
pub struct MembershipResults {
    pub words: Vec<(String, bool)>,
}

/// Result structure for the demo command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoResults {
    pub results: Vec<SuggestResult>,
    pub added_words: Vec<String>,
    pub after_adding: SuggestResult,
}

/// Result structure for the export command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResult {
    pub path: String,
    pub words: usize,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn print_human(&self, args: &DidYouMeanArgs);
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &DidYouMeanArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &DidYouMeanArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Render the suggestion list the way a "Did you mean" prompt reads.
pub fn format_suggestion_line(result: &SuggestResult) -> String {
    if result.in_dictionary {
        "✓ Word found in dictionary".to_string()
    } else if result.suggestions.is_empty() {
        "✗ No suggestions found".to_string()
    } else {
        let words: Vec<&str> = result
            .suggestions
            .iter()
            .map(|entry| entry.word.as_str())
            .collect();
        format!("Did you mean: {}", words.join(", "))
    }
}

fn print_suggest_result(result: &SuggestResult, args: &DidYouMeanArgs) {
    println!("Input: \"{}\"", result.input);
    println!("{}", format_suggestion_line(result));

    for entry in &result.suggestions {
        if let Some(breakdown) = &entry.breakdown {
            println!(
                "  {} (score {:.3}, distance {}: edit {:.3}, length {:.3}, prefix {:.3}, suffix {:.3})",
                entry.word,
                entry.score,
                entry.distance,
                breakdown.edit_similarity,
                breakdown.length_similarity,
                breakdown.prefix_ratio,
                breakdown.suffix_ratio
            );
        } else if args.verbosity() > 1 {
            println!(
                "  {} (score {:.3}, distance {})",
                entry.word, entry.score, entry.distance
            );
        }
    }
}

impl HumanOutput for SuggestResults {
    fn print_human(&self, args: &DidYouMeanArgs) {
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_suggest_result(result, args);
        }
    }
}

impl HumanOutput for CorrectionResult {
    fn print_human(&self, args: &DidYouMeanArgs) {
        if !self.has_misspellings() {
            println!("✓ All {} words found in dictionary", self.checked_words);
            return;
        }

        for word in &self.words {
            let suggestions: Vec<&str> = word.suggestions.iter().map(|s| s.word.as_str()).collect();
            if suggestions.is_empty() {
                println!("✗ \"{}\": no suggestions found", word.word);
            } else {
                println!("✗ \"{}\": {}", word.word, suggestions.join(", "));
            }

            if args.verbosity() > 1 {
                println!("  at byte offset {}", word.offset);
            }
        }

        if let Some(corrected) = &self.corrected {
            println!();
            println!("Did you mean: {corrected}");
        }
    }
}

impl HumanOutput for MembershipResults {
    fn print_human(&self, _args: &DidYouMeanArgs) {
        for (word, found) in &self.words {
            let mark = if *found { "✓" } else { "✗" };
            println!("{mark} {word}");
        }
    }
}

impl HumanOutput for DemoResults {
    fn print_human(&self, args: &DidYouMeanArgs) {
        println!("Kurdish 'Did You Mean' Demo");
        println!("===========================");

        for result in &self.results {
            println!();
            print_suggest_result(result, args);
        }

        println!();
        println!();
        println!("Adding custom words to dictionary: {}", self.added_words.join(", "));
        println!("Testing with newly added word:");
        print_suggest_result(&self.after_adding, args);
    }
}

impl HumanOutput for ExportResult {
    fn print_human(&self, _args: &DidYouMeanArgs) {
        println!("Wrote {} words to {}", self.words, self.path);
    }
}
