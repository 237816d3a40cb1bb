//! Queries running while another thread grows the dictionary.

use std::sync::Arc;
use std::thread;

use kurdish_didyoumean::prelude::*;

fn generated_word(i: usize) -> String {
    // Distinct Latin words far from the probe queries
    format!("zzq{i:05}")
}

#[test]
fn test_queries_see_whole_words_during_adds() {
    let dictionary = Arc::new(BuiltinDictionary::kurdish());
    let engine = SuggestionEngine::new(Arc::clone(&dictionary));

    let writer = {
        let dictionary = Arc::clone(&dictionary);
        thread::spawn(move || {
            for chunk in (0..2000).collect::<Vec<_>>().chunks(50) {
                dictionary.add_words(chunk.iter().map(|&i| generated_word(i)));
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    // Every snapshot is a consistent set containing the seed words
                    let snapshot = engine.dictionary().snapshot();
                    assert!(snapshot.contains("mal"));
                    assert!(snapshot.iter().all(|w| !w.is_empty()));

                    let suggestions = engine.suggest_with("maal", 3, 1);
                    assert_eq!(suggestions.first().map(String::as_str), Some("mal"));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(dictionary.len(), 59 + 2000);
    assert!(engine.contains(&generated_word(1999)));
}

#[test]
fn test_snapshot_ignores_later_adds() {
    let dictionary = Arc::new(SpellingDictionary::from_words(["heval"]));
    let snapshot = dictionary.snapshot();

    let handle = {
        let dictionary = Arc::clone(&dictionary);
        thread::spawn(move || dictionary.add_words(["hevalê", "hevaltî"]))
    };
    assert_eq!(handle.join().unwrap(), 2);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(dictionary.len(), 3);
}

#[test]
fn test_parallel_scoring_over_large_dictionary() {
    let dictionary = BuiltinDictionary::kurdish();
    dictionary.add_words((0..5000).map(generated_word));

    let engine = SuggestionEngine::with_config(
        dictionary,
        SuggestionConfig {
            parallel_threshold: 1,
            ..Default::default()
        },
    );

    // Exact score ties fall back to code point order
    assert_eq!(
        engine.suggest_with("zzq0001", 5, 1),
        vec!["zzq00001", "zzq00011", "zzq00010", "zzq00012", "zzq00013"]
    );
    assert_eq!(engine.suggest("maal").first().map(String::as_str), Some("mal"));
}
