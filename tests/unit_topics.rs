// Unit tests for preprocessing and topic extraction.
//
// Tests isolated pure functions: segment_document and tokenize edge cases,
// and TfIdfExtractor::extract invariant properties.

use topictag::topics::extractor::TfIdfExtractor;
use topictag::topics::preprocess::{segment_document, tokenize};
use topictag::topics::traits::TopicExtractor;

// ============================================================
// segment_document / tokenize
// ============================================================

#[test]
fn segment_whitespace_only_yields_nothing() {
    assert!(segment_document("   \n\n  ").is_empty());
}

#[test]
fn segment_single_sentence_yields_one_segment() {
    let segments = segment_document("A lone sentence without a period");
    assert_eq!(segments, vec!["A lone sentence without a period"]);
}

#[test]
fn segment_count_scales_with_sentences() {
    // 3 sentences per segment
    let text = "s1. s2. s3. s4. s5. s6. s7.";
    assert_eq!(segment_document(text).len(), 3);
}

#[test]
fn tokenize_strips_punctuation_and_digits() {
    let tokens = tokenize("Chapter 12: The engine's write-ahead log!");
    assert!(tokens.contains(&"chapter".to_string()));
    assert!(tokens.contains(&"engine".to_string()));
    assert!(tokens.contains(&"write".to_string()));
    assert!(tokens.contains(&"log".to_string()));
    assert!(!tokens.iter().any(|t| t == "12"));
}

#[test]
fn tokenize_drops_stop_words_and_single_letters() {
    let tokens = tokenize("it is a well known fact that x marks the spot");
    assert!(!tokens.contains(&"the".to_string()));
    assert!(!tokens.contains(&"that".to_string()));
    assert!(!tokens.contains(&"x".to_string()));
    assert!(tokens.contains(&"marks".to_string()));
    assert!(tokens.contains(&"spot".to_string()));
}

// ============================================================
// TfIdfExtractor::extract — invariant properties
// ============================================================

fn sample_segments() -> Vec<String> {
    vec![
        "The storage engine compacts sorted runs into larger levels on disk".to_string(),
        "Compaction merges overlapping runs and reclaims space from deleted keys".to_string(),
        "The query planner chooses an index based on estimated selectivity".to_string(),
        "Index selection weighs scan cost against random read amplification".to_string(),
        "Replication ships the write-ahead log to follower nodes for durability".to_string(),
        "Followers replay the log and acknowledge once records are fsynced".to_string(),
        "Checkpoints bound recovery time by truncating the replayable log prefix".to_string(),
        "The planner caches prepared statements to skip repeated parsing work".to_string(),
    ]
}

#[test]
fn weights_sum_to_one() {
    let extractor = TfIdfExtractor::default();
    let set = extractor.extract(&sample_segments()).unwrap();
    let weight_sum: f64 = set.topics.iter().map(|t| t.weight).sum();
    assert!(
        (weight_sum - 1.0).abs() < 0.01,
        "Topic weights should sum to ~1.0, got {weight_sum}"
    );
}

#[test]
fn topics_sorted_by_weight_descending() {
    let extractor = TfIdfExtractor::default();
    let set = extractor.extract(&sample_segments()).unwrap();
    for window in set.topics.windows(2) {
        assert!(
            window[0].weight >= window[1].weight,
            "Topics should be sorted descending: {} >= {}",
            window[0].weight,
            window[1].weight
        );
    }
}

#[test]
fn respects_num_topics() {
    let extractor = TfIdfExtractor {
        num_topics: 2,
        words_per_topic: 3,
        top_n_keywords: 30,
    };
    let set = extractor.extract(&sample_segments()).unwrap();
    assert!(
        set.topics.len() <= 2,
        "Should not exceed num_topics=2, got {}",
        set.topics.len()
    );
    assert!(!set.topics.is_empty());
}

#[test]
fn labels_and_words_nonempty() {
    let extractor = TfIdfExtractor::default();
    let set = extractor.extract(&sample_segments()).unwrap();
    for topic in &set.topics {
        assert!(!topic.label.is_empty(), "Topic label should not be empty");
        assert!(!topic.words.is_empty(), "Topic should have words");
        assert_eq!(topic.label, topic.words.join(" + "));
    }
}

#[test]
fn metadata_labels_match_topics() {
    let extractor = TfIdfExtractor::default();
    let set = extractor.extract(&sample_segments()).unwrap();
    let labels = set.metadata_labels();
    assert_eq!(labels.len(), set.topics.len());
    for (label, topic) in labels.iter().zip(&set.topics) {
        assert_eq!(label, &topic.label);
    }
}

#[test]
fn segment_count_matches_input() {
    let extractor = TfIdfExtractor::default();
    let segments = sample_segments();
    let set = extractor.extract(&segments).unwrap();
    assert_eq!(set.segment_count, segments.len() as u32);
}

#[test]
fn duplicate_segments_do_not_panic() {
    let extractor = TfIdfExtractor::default();
    let segments = vec!["storage engine compaction merges sorted runs".to_string(); 10];
    // All-identical segments produce degenerate IDF. The extractor should
    // either succeed or return an error, but never panic.
    match extractor.extract(&segments) {
        Ok(set) => assert_eq!(set.segment_count, 10),
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains("no keywords") || msg.contains("No text"),
                "Unexpected error: {msg}"
            );
        }
    }
}

#[test]
fn stop_word_only_corpus_errors() {
    let extractor = TfIdfExtractor::default();
    // Every word is an English stop word, so the ranking comes back empty
    let segments = vec![
        "the and of to in it is was".to_string(),
        "a an or but not".to_string(),
    ];
    let result = extractor.extract(&segments);
    assert!(result.is_err());
    assert!(
        result.unwrap_err().to_string().contains("no keywords"),
        "Empty ranking should surface the no-keywords error"
    );
}

#[test]
fn empty_corpus_errors() {
    let extractor = TfIdfExtractor::default();
    let result = extractor.extract(&[]);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No text"));
}

#[test]
fn words_are_lowercase_alphabetic() {
    let extractor = TfIdfExtractor {
        num_topics: 5,
        words_per_topic: 4,
        top_n_keywords: 40,
    };
    let set = extractor.extract(&sample_segments()).unwrap();
    for topic in &set.topics {
        for word in &topic.words {
            assert!(
                word.chars().any(|c| c.is_alphabetic()),
                "Word '{word}' has no alphabetic chars"
            );
            assert_eq!(word, &word.to_lowercase(), "Word '{word}' not lowercased");
        }
    }
}
