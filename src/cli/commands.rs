//! Command implementations for the did-you-mean CLI.

use log::{debug, info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AppConfig;
use crate::error::{DidYouMeanError, Result};
use crate::spelling::*;

/// Misspelled and correct words exercised by the demo command.
pub const DEMO_WORDS: &[&str] = &[
    "سڵو",    // misspelled سڵاو
    "چنی",    // misspelled چۆنی
    "سپاس",   // misspelled سوپاس
    "maal",   // misspelled mal
    "silav",  // correct
    "pirtuk", // misspelled pirtûk
    "dayik",  // correct
    "کتب",    // misspelled کتێب
    "xyz",    // nothing close
];

/// Words the demo command adds before its final query.
pub const DEMO_ADDED_WORDS: &[&str] = &["کوردستان", "ئەمن", "ئاسمان"];

/// Query run after the demo words are added.
pub const DEMO_FINAL_QUERY: &str = "ئاسان";

/// Execute a CLI command.
pub fn execute_command(args: DidYouMeanArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let dictionary = config.build_dictionary()?;
    info!("Dictionary ready with {} words", dictionary.len());

    let engine = SuggestionEngine::with_config(dictionary, config.suggestion);

    match &args.command {
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &engine, &args),
        Command::Check(check_args) => check_text(check_args, engine, &args),
        Command::Contains(contains_args) => contains_words(contains_args, &engine, &args),
        Command::Demo => run_demo(&engine, &args),
        Command::Export(export_args) => export_dictionary(export_args, &engine, &args),
    }
}

/// Merge the configuration file with command line overrides.
pub fn resolve_config(args: &DidYouMeanArgs) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };

    config.dictionaries.extend(args.dictionaries.iter().cloned());
    if args.no_builtin {
        config.include_builtin = false;
    }

    debug!("Effective configuration: {config:?}");

    Ok(config)
}

/// Rank suggestions for one word into the CLI result shape.
pub fn build_suggest_result(
    engine: &SuggestionEngine,
    input: &str,
    max_suggestions: i64,
    threshold: i64,
    explain: bool,
) -> SuggestResult {
    let scorer = SimilarityScorer::new(engine.config().weights);
    let input_chars: Vec<char> = input.trim().chars().collect();

    let suggestions = engine
        .suggest_detailed_signed(input, max_suggestions, threshold)
        .into_iter()
        .map(|suggestion| {
            let breakdown = explain.then(|| {
                let candidate_chars: Vec<char> = suggestion.word.chars().collect();
                scorer.breakdown(&input_chars, &candidate_chars, suggestion.distance)
            });

            SuggestionEntry {
                word: suggestion.word,
                score: suggestion.score,
                distance: suggestion.distance,
                breakdown,
            }
        })
        .collect();

    SuggestResult {
        input: input.to_string(),
        in_dictionary: engine.contains(input.trim()),
        suggestions,
    }
}

/// Suggest corrections for the given words.
fn suggest_words(
    args: &SuggestArgs,
    engine: &SuggestionEngine,
    cli_args: &DidYouMeanArgs,
) -> Result<()> {
    let max_suggestions = args
        .max_suggestions
        .unwrap_or(engine.config().max_suggestions as i64);
    let threshold = args
        .threshold
        .unwrap_or(engine.config().threshold as i64);

    if max_suggestions < 0 || threshold < 0 {
        warn!(
            "Negative limits (max_suggestions={max_suggestions}, threshold={threshold}) produce no suggestions"
        );
    }

    let results = args
        .words
        .iter()
        .map(|word| build_suggest_result(engine, word, max_suggestions, threshold, args.explain))
        .collect();

    output_result(
        "Suggestions",
        &SuggestResults {
            results,
            max_suggestions,
            threshold,
        },
        cli_args,
    )
}

/// Check every word of a phrase.
fn check_text(args: &CheckArgs, engine: SuggestionEngine, cli_args: &DidYouMeanArgs) -> Result<()> {
    let text = args.joined();
    if text.trim().is_empty() {
        return Err(DidYouMeanError::invalid_argument("no text to check"));
    }

    let corrector = SpellingCorrector::new(engine);
    let result = corrector.correct(&text);

    output_result("Spell check", &result, cli_args)
}

/// Report dictionary membership for each word.
fn contains_words(
    args: &ContainsArgs,
    engine: &SuggestionEngine,
    cli_args: &DidYouMeanArgs,
) -> Result<()> {
    let words = args
        .words
        .iter()
        .map(|word| (word.clone(), engine.contains(word)))
        .collect();

    output_result("Dictionary lookup", &MembershipResults { words }, cli_args)
}

/// Run the demonstration word list, add words, and query again.
fn run_demo(engine: &SuggestionEngine, cli_args: &DidYouMeanArgs) -> Result<()> {
    let max_suggestions = engine.config().max_suggestions as i64;
    let threshold = engine.config().threshold as i64;

    let results = DEMO_WORDS
        .iter()
        .map(|word| build_suggest_result(engine, word, max_suggestions, threshold, false))
        .collect();

    let added = engine.add_words(DEMO_ADDED_WORDS.iter().copied());
    info!("Demo added {added} new words");

    let after_adding =
        build_suggest_result(engine, DEMO_FINAL_QUERY, max_suggestions, threshold, false);

    output_result(
        "Demo",
        &DemoResults {
            results,
            added_words: DEMO_ADDED_WORDS.iter().map(|w| w.to_string()).collect(),
            after_adding,
        },
        cli_args,
    )
}

/// Write the effective dictionary to a word list.
fn export_dictionary(
    args: &ExportArgs,
    engine: &SuggestionEngine,
    cli_args: &DidYouMeanArgs,
) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(DidYouMeanError::invalid_argument(format!(
            "{} already exists. Use --force to overwrite.",
            args.output.display()
        )));
    }

    engine.dictionary().save_to_file(&args.output)?;

    output_result(
        "Dictionary exported",
        &ExportResult {
            path: args.output.display().to_string(),
            words: engine.dictionary_size(),
        },
        cli_args,
    )
}
