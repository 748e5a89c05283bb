// TopicSet: the structured representation of what a document is about.
//
// A topic set is a ranked list of topics, each a grouping of related words
// with a display label and a weight indicating how much of the document
// that topic covers. The labels are what ends up in the index metadata.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// A complete set of topics inferred from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSet {
    /// Ranked list of topics (highest weight first)
    pub topics: Vec<Topic>,
    /// Number of corpus segments the model was fit on
    pub segment_count: u32,
}

/// A single topic: a ranked grouping of related words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Display label, the topic's words joined with " + "
    pub label: String,
    /// The words in this topic, in descending score order
    pub words: Vec<String>,
    /// Normalized weight (0.0 to 1.0) of this topic within the document
    pub weight: f64,
}

impl TopicSet {
    /// The label strings written to the index as the `topics` metadata field.
    pub fn metadata_labels(&self) -> Vec<String> {
        self.topics.iter().map(|t| t.label.clone()).collect()
    }

    /// Render the topic set as a bar chart, one row per topic.
    ///
    /// The label already carries the topic's words, so each topic is a
    /// single row: rank, label, weight bar. Bars are colored relative to
    /// an even split across the topics, so dominance reads the same
    /// whether three topics were requested or ten.
    pub fn render(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            format!(
                "=== Inferred Topics (from {} text segments) ===",
                self.segment_count
            )
            .bold()
        );

        let bar_width: usize = 20;
        let even_share = 1.0 / self.topics.len().max(1) as f64;

        for (i, topic) in self.topics.iter().enumerate() {
            let filled = (topic.weight * bar_width as f64).round() as usize;
            let bar = format!(
                "[{}{}]",
                "=".repeat(filled),
                " ".repeat(bar_width.saturating_sub(filled))
            );

            let colored_bar = if topic.weight >= even_share * 1.5 {
                bar.bright_green()
            } else if topic.weight >= even_share * 0.75 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            let _ = writeln!(
                out,
                "  {:>2}. {:<40} {} {:.2}",
                i + 1,
                topic.label.bold(),
                colored_bar,
                topic.weight
            );
        }

        out
    }

    /// Print the rendered topic set. This is what `topictag topics` shows.
    pub fn display(&self) {
        println!("\n{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_labels_follow_topic_order() {
        let set = TopicSet {
            topics: vec![
                Topic {
                    label: "storage + engine + index".to_string(),
                    words: vec!["storage".into(), "engine".into(), "index".into()],
                    weight: 0.7,
                },
                Topic {
                    label: "query + planner".to_string(),
                    words: vec!["query".into(), "planner".into()],
                    weight: 0.3,
                },
            ],
            segment_count: 4,
        };
        assert_eq!(
            set.metadata_labels(),
            vec!["storage + engine + index", "query + planner"]
        );
    }

    #[test]
    fn metadata_labels_empty_set() {
        let set = TopicSet {
            topics: vec![],
            segment_count: 0,
        };
        assert!(set.metadata_labels().is_empty());
    }

    #[test]
    fn render_one_row_per_topic() {
        let set = TopicSet {
            topics: vec![
                Topic {
                    label: "storage + engine + index".to_string(),
                    words: vec!["storage".into(), "engine".into(), "index".into()],
                    weight: 0.7,
                },
                Topic {
                    label: "query + planner".to_string(),
                    words: vec!["query".into(), "planner".into()],
                    weight: 0.3,
                },
            ],
            segment_count: 4,
        };

        let out = set.render();
        assert!(out.contains("storage + engine + index"));
        assert!(out.contains("query + planner"));
        assert!(out.contains("0.70"));
        assert!(out.contains("0.30"));
        // The label carries the words; no separate word listing
        assert!(!out.contains("Words:"));
        // Header plus one row per topic
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn render_empty_set_is_header_only() {
        let set = TopicSet {
            topics: vec![],
            segment_count: 0,
        };
        let out = set.render();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("0 text segments"));
    }
}
