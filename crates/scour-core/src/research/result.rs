use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm::ProviderKind;

/// Document-boundary separator used when joining extracts into
/// `combined_text`. Downstream consumers can split sources back out on it
/// or treat the whole string as one corpus.
pub const SOURCE_SEPARATOR: &str = "\n---\n";

/// One retrieved article: title, canonical URL, capped extract, and the
/// moment it was fetched. Immutable once stored in a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    pub title: String,
    pub url: String,
    pub extract: String,
    pub fetched_at: DateTime<Utc>,
}

/// Terminal outcome of a research pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResearchStatus {
    /// Every candidate was processed within the budget.
    Complete,
    /// The wall-clock deadline fired mid-fetch; collected sources are kept.
    PartialTimeout,
    /// No source yielded a usable extract.
    NoResults,
}

impl ResearchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchStatus::Complete => "Complete",
            ResearchStatus::PartialTimeout => "Partial (timeout)",
            ResearchStatus::NoResults => "No results",
        }
    }
}

/// The fully populated output of a research run.
///
/// Always returned, regardless of partial failure in any stage; degraded
/// completeness shows up in `status` and the optional summary fields,
/// never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResult {
    pub topic: String,
    /// Insertion order = retrieval order.
    pub sources: Vec<SourceRecord>,
    /// All extracts joined with [`SOURCE_SEPARATOR`].
    pub combined_text: String,
    pub elapsed_seconds: f64,
    /// Set only if exactly one provider call succeeded.
    pub summary: Option<String>,
    pub summary_provider: Option<ProviderKind>,
    pub status: ResearchStatus,
}

/// Cuts `text` at `cap` characters. A hard slice, not sentence-aware;
/// idempotent, and a no-op for strings at or under the cap.
pub fn truncate_chars(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
