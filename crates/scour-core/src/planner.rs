//! Turns a free-text topic into a bounded search plan.

use crate::config::{MAX_CANDIDATES, MAX_DEPTH, MAX_SOURCES};
use crate::research::ResearchError;

/// A planned search: the query string, how many sources to accept, and
/// how many raw candidates to request up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    /// The trimmed topic, used verbatim as the search query.
    pub query: String,
    /// How many sources the pass may accept, clamped to [1, 20].
    pub limit: usize,
    /// How many raw candidates to request from search. Depth inflates
    /// this pool so the pass can survive skipped candidates; it never
    /// triggers recursive crawling.
    pub candidate_limit: usize,
}

/// Plans a research pass. Fails only on an empty (after trimming) topic.
pub fn plan(topic: &str, max_sources: usize, depth: usize) -> Result<QueryPlan, ResearchError> {
    let query = topic.trim();
    if query.is_empty() {
        return Err(ResearchError::InvalidTopic);
    }

    let limit = max_sources.clamp(1, MAX_SOURCES);
    let depth = depth.clamp(1, MAX_DEPTH);
    let candidate_limit = (limit * depth).min(MAX_CANDIDATES);

    Ok(QueryPlan {
        query: query.to_string(),
        limit,
        candidate_limit,
    })
}
