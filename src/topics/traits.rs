// Topic extractor trait: swap-ready abstraction.
//
// The default implementation ranks keywords with TF-IDF and groups them by
// co-occurrence. Wrapping it in a trait lets the pipeline swap in a heavier
// model (true LDA, embeddings clustering) without touching anything else.

use super::model::TopicSet;
use anyhow::Result;

/// Trait for inferring a set of topics from a corpus of text segments.
pub trait TopicExtractor {
    /// Analyze the segments and produce a ranked set of topics.
    fn extract(&self, segments: &[String]) -> Result<TopicSet>;
}
