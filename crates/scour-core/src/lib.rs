pub mod config;
pub mod llm;
pub mod planner;
pub mod research;
pub mod wiki;

pub use config::{Config, Credentials};
pub use llm::{ChatClient, LLMError, ProviderKind, SummaryEngine, LLM};
pub use planner::{plan, QueryPlan};
pub use research::{
    ResearchError, ResearchRequest, ResearchResult, ResearchRunner, ResearchStatus, SourceRecord,
};
pub use wiki::{WikiClient, WikiError};
