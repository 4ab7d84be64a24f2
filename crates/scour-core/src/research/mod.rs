mod aggregator;
pub mod prompts;
mod result;
mod runner;

pub use aggregator::Aggregator;
pub use result::{truncate_chars, ResearchResult, ResearchStatus, SourceRecord, SOURCE_SEPARATOR};
pub use runner::{ResearchError, ResearchRequest, ResearchRunner};
