// Text preprocessing: segmentation and tokenization.
//
// A single document is split into sentence-group segments so the TF-IDF
// stage has a small corpus to compute document frequencies against. Words
// that show up in every segment get downweighted; words distinctive to a
// few segments get boosted.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// How many sentences are grouped into one corpus segment.
const SENTENCES_PER_SEGMENT: usize = 3;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[a-z]+").expect("literal pattern compiles"))
}

fn stop_word_set() -> &'static HashSet<String> {
    static STOPS: OnceLock<HashSet<String>> = OnceLock::new();
    STOPS.get_or_init(|| get(LANGUAGE::English).into_iter().collect())
}

/// Split a document into sentence-group segments.
///
/// Sentences are split on `.`, `!`, `?`, and newlines, then grouped
/// [`SENTENCES_PER_SEGMENT`] at a time. Whitespace-only sentences are
/// dropped, so blank or punctuation-only input yields no segments.
pub fn segment_document(text: &str) -> Vec<String> {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    sentences
        .chunks(SENTENCES_PER_SEGMENT)
        .map(|chunk| chunk.join(". "))
        .collect()
}

/// Lowercase a text and return its alphabetic, non-stop-word tokens.
///
/// Numbers, punctuation, and single letters are discarded along with
/// English stop words. Token order follows the source text.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let stops = stop_word_set();
    word_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|w| w.len() > 1 && !stops.contains(w))
        .collect()
}
