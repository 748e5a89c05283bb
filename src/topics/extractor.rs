// TF-IDF topic extraction.
//
// Uses the `keyword_extraction` crate to rank keywords across the document's
// segments, then groups co-occurring keywords into a fixed number of topics.
// Each segment is treated as a separate document for IDF computation, so
// words that appear everywhere get downweighted while words distinctive to
// parts of the document get boosted.

use anyhow::Result;
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::info;

use super::model::{Topic, TopicSet};
use super::preprocess;
use super::traits::TopicExtractor;

/// TF-IDF based topic extractor, the default backend.
///
/// Runs locally with no API calls. Defaults mirror the usual tagging setup:
/// three topics of three words each.
pub struct TfIdfExtractor {
    /// How many topics to produce
    pub num_topics: usize,
    /// How many words go into each topic (and its label)
    pub words_per_topic: usize,
    /// How many top keywords to rank before grouping
    pub top_n_keywords: usize,
}

impl Default for TfIdfExtractor {
    fn default() -> Self {
        Self {
            num_topics: 3,
            words_per_topic: 3,
            top_n_keywords: 40,
        }
    }
}

impl TopicExtractor for TfIdfExtractor {
    fn extract(&self, segments: &[String]) -> Result<TopicSet> {
        if segments.is_empty() {
            anyhow::bail!("No text to analyze, cannot infer topics");
        }

        let stop_words: Vec<String> = get(LANGUAGE::English);

        // Run TF-IDF with each segment as a separate document. The library
        // handles tokenization, stop word removal, and scoring.
        let params = TfIdfParams::UnprocessedDocuments(segments, &stop_words, None);
        let tfidf = TfIdf::new(params);

        let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(self.top_n_keywords);

        if ranked.is_empty() {
            anyhow::bail!(
                "TF-IDF produced no keywords from {} segments, text may be too short or uniform",
                segments.len()
            );
        }

        info!(
            keywords = ranked.len(),
            top_keyword = &ranked[0].0,
            top_score = ranked[0].1,
            "Ranked TF-IDF keywords"
        );

        let topics = group_keywords(&ranked, segments, self.num_topics, self.words_per_topic);

        Ok(TopicSet {
            topics,
            segment_count: segments.len() as u32,
        })
    }
}

/// Group ranked keywords into topics based on co-occurrence in segments.
///
/// Strategy: greedy seeding. Take the highest-scored unassigned keyword as
/// the seed of a new topic and pull in the unassigned keywords that share
/// the most segments with it, until the topic has `words_per_topic` words
/// or the candidates run out.
fn group_keywords(
    ranked: &[(String, f32)],
    segments: &[String],
    num_topics: usize,
    words_per_topic: usize,
) -> Vec<Topic> {
    let keywords: Vec<&str> = ranked.iter().map(|(w, _)| w.as_str()).collect();

    // For each segment, record which keywords appear in it (token match,
    // not substring, so "art" does not hit "particle").
    let segment_keywords: Vec<Vec<usize>> = segments
        .iter()
        .map(|segment| {
            let tokens: std::collections::HashSet<String> =
                preprocess::tokenize(segment).into_iter().collect();
            keywords
                .iter()
                .enumerate()
                .filter(|(_, kw)| tokens.contains(**kw))
                .map(|(i, _)| i)
                .collect()
        })
        .collect();

    let n = keywords.len();
    let mut cooccurrence = vec![vec![0u32; n]; n];
    for sk in &segment_keywords {
        for &i in sk {
            for &j in sk {
                if i != j {
                    cooccurrence[i][j] += 1;
                }
            }
        }
    }

    let mut assigned = vec![false; n];
    let mut topics = Vec::new();

    let total_score: f32 = ranked.iter().map(|(_, s)| s).sum();

    for seed_idx in 0..n {
        if topics.len() >= num_topics {
            break;
        }
        if assigned[seed_idx] {
            continue;
        }

        assigned[seed_idx] = true;
        let mut topic_indices = vec![seed_idx];
        let mut topic_score = ranked[seed_idx].1;

        // Pull in the top co-occurring unassigned keywords
        let mut candidates: Vec<(usize, u32)> = (0..n)
            .filter(|&i| !assigned[i] && cooccurrence[seed_idx][i] > 0)
            .map(|i| (i, cooccurrence[seed_idx][i]))
            .collect();
        candidates.sort_by(|a, b| b.1.cmp(&a.1));

        for (idx, _count) in candidates
            .into_iter()
            .take(words_per_topic.saturating_sub(1))
        {
            assigned[idx] = true;
            topic_score += ranked[idx].1;
            topic_indices.push(idx);
        }

        let words: Vec<String> = topic_indices.iter().map(|&i| ranked[i].0.clone()).collect();

        let weight = if total_score > 0.0 {
            (topic_score / total_score) as f64
        } else {
            0.0
        };

        topics.push(Topic {
            label: words.join(" + "),
            words,
            weight,
        });
    }

    // Normalize weights so they sum to 1.0 across the produced topics
    let weight_sum: f64 = topics.iter().map(|t| t.weight).sum();
    if weight_sum > 0.0 {
        for topic in &mut topics {
            topic.weight /= weight_sum;
        }
    }

    topics.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    topics
}
