use std::collections::HashSet;

use chrono::Utc;
use tracing::debug;

use super::result::{
    truncate_chars, ResearchResult, ResearchStatus, SourceRecord, SOURCE_SEPARATOR,
};

/// Accumulates fetched candidates into an ordered research record.
///
/// Applies the per-document character cap, skips exact duplicate titles
/// (case-sensitive), and stops accepting once the requested source count
/// is reached. The caller owns the deadline; the aggregator only reports
/// whether it fired via [`Aggregator::finish`].
pub struct Aggregator {
    topic: String,
    limit: usize,
    extract_cap: usize,
    seen_titles: HashSet<String>,
    sources: Vec<SourceRecord>,
}

impl Aggregator {
    pub fn new(topic: impl Into<String>, limit: usize, extract_cap: usize) -> Self {
        Self {
            topic: topic.into(),
            limit,
            extract_cap,
            seen_titles: HashSet::new(),
            sources: Vec::new(),
        }
    }

    /// Number of sources accepted so far.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// True once the requested source count has been reached.
    pub fn is_full(&self) -> bool {
        self.sources.len() >= self.limit
    }

    /// Accepts a candidate, returning false if it was rejected (full, or
    /// a duplicate title). The extract is cut to the configured cap.
    pub fn push(&mut self, title: &str, url: &str, raw_extract: &str) -> bool {
        if self.is_full() {
            return false;
        }

        if !self.seen_titles.insert(title.to_string()) {
            debug!(title, "skipping duplicate title");
            return false;
        }

        self.sources.push(SourceRecord {
            title: title.to_string(),
            url: url.to_string(),
            extract: truncate_chars(raw_extract, self.extract_cap).to_string(),
            fetched_at: Utc::now(),
        });
        true
    }

    /// Builds the final result: joins extracts with the document-boundary
    /// separator and derives the status. Zero accepted sources is always
    /// `NoResults`, even when the deadline also fired.
    pub fn finish(self, elapsed_seconds: f64, deadline_hit: bool) -> ResearchResult {
        let combined_text = self
            .sources
            .iter()
            .map(|source| source.extract.as_str())
            .collect::<Vec<_>>()
            .join(SOURCE_SEPARATOR);

        let status = if self.sources.is_empty() {
            ResearchStatus::NoResults
        } else if deadline_hit {
            ResearchStatus::PartialTimeout
        } else {
            ResearchStatus::Complete
        };

        ResearchResult {
            topic: self.topic,
            sources: self.sources,
            combined_text,
            elapsed_seconds,
            summary: None,
            summary_provider: None,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_finish() {
        let mut aggregator = Aggregator::new("topic", 3, 1200);
        assert!(aggregator.push("One", "https://example.org/One", "first"));
        assert!(aggregator.push("Two", "https://example.org/Two", "second"));

        let result = aggregator.finish(0.5, false);
        assert_eq!(result.sources.len(), 2);
        assert_eq!(result.combined_text, "first\n---\nsecond");
        assert_eq!(result.status, ResearchStatus::Complete);
        assert_eq!(result.elapsed_seconds, 0.5);
    }

    #[test]
    fn test_duplicate_titles_skipped() {
        let mut aggregator = Aggregator::new("topic", 5, 1200);
        assert!(aggregator.push("Same", "https://example.org/a", "one"));
        assert!(!aggregator.push("Same", "https://example.org/b", "two"));
        // Case-sensitive matching: a different casing is a different title
        assert!(aggregator.push("same", "https://example.org/c", "three"));
        assert_eq!(aggregator.len(), 2);
    }

    #[test]
    fn test_limit_enforced() {
        let mut aggregator = Aggregator::new("topic", 2, 1200);
        assert!(aggregator.push("A", "u", "x"));
        assert!(aggregator.push("B", "u", "y"));
        assert!(aggregator.is_full());
        assert!(!aggregator.push("C", "u", "z"));
        assert_eq!(aggregator.len(), 2);
    }

    #[test]
    fn test_extract_capped() {
        let mut aggregator = Aggregator::new("topic", 1, 100);
        aggregator.push("Long", "u", &"a".repeat(500));
        let result = aggregator.finish(0.0, false);
        assert_eq!(result.sources[0].extract.chars().count(), 100);
    }

    #[test]
    fn test_empty_is_no_results() {
        let aggregator = Aggregator::new("topic", 5, 1200);
        let result = aggregator.finish(0.1, false);
        assert_eq!(result.status, ResearchStatus::NoResults);
        assert!(result.combined_text.is_empty());
    }

    #[test]
    fn test_deadline_downgrades_status() {
        let mut aggregator = Aggregator::new("topic", 5, 1200);
        aggregator.push("One", "u", "text");
        let result = aggregator.finish(2.0, true);
        assert_eq!(result.status, ResearchStatus::PartialTimeout);
        assert_eq!(result.sources.len(), 1);
    }

    #[test]
    fn test_deadline_with_nothing_collected_is_no_results() {
        let aggregator = Aggregator::new("topic", 5, 1200);
        let result = aggregator.finish(2.0, true);
        assert_eq!(result.status, ResearchStatus::NoResults);
    }
}
