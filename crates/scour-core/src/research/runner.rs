use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, Credentials};
use crate::llm::{LLMError, ProviderKind, SummaryEngine};
use crate::planner::plan;
use crate::research::aggregator::Aggregator;
use crate::research::result::ResearchResult;
use crate::wiki::WikiClient;

/// Parameters for one research run.
#[derive(Debug, Clone)]
pub struct ResearchRequest {
    /// Free-text topic, used verbatim as the search query.
    pub topic: String,
    /// How many sources to collect (clamped to 1-20).
    pub max_sources: usize,
    /// Wall-clock budget for the fetch pass, in seconds.
    pub timeout_secs: u64,
    /// Search depth (clamped to 1-3); inflates the raw candidate pool.
    pub depth: usize,
}

impl ResearchRequest {
    /// Creates a request with the built-in defaults.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            max_sources: crate::config::DEFAULT_MAX_SOURCES,
            timeout_secs: crate::config::DEFAULT_TIMEOUT_SECS,
            depth: crate::config::DEFAULT_DEPTH,
        }
    }

    pub fn with_max_sources(mut self, max_sources: usize) -> Self {
        self.max_sources = max_sources;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

/// Runs the research pipeline for a topic.
///
/// Holds only configuration and resolved credentials; each run acquires
/// its own network clients, so concurrent runs share no mutable state.
pub struct ResearchRunner {
    config: Config,
    credentials: Credentials,
}

impl ResearchRunner {
    /// Creates a runner with explicit configuration and credentials.
    pub fn new(config: Config, credentials: Credentials) -> Self {
        Self {
            config,
            credentials,
        }
    }

    /// Creates a runner from the default config locations and the
    /// conventional credential environment variables.
    pub fn from_env() -> Result<Self, crate::config::ConfigError> {
        let config = Config::load()?;
        let credentials = Credentials::resolve(&config.providers);
        Ok(Self::new(config, credentials))
    }

    /// Runs one research pass for the given request.
    ///
    /// Sequence: plan, search, fetch (bounded by the request's wall-clock
    /// budget measured from the start of fetch), aggregate, then a
    /// best-effort summarization outside the fetch budget. Always returns
    /// a populated [`ResearchResult`]; the only error is an invalid topic.
    pub async fn run(&self, request: &ResearchRequest) -> Result<ResearchResult, ResearchError> {
        let plan = plan(&request.topic, request.max_sources, request.depth)?;

        info!(
            topic = %plan.query,
            limit = plan.limit,
            candidates = plan.candidate_limit,
            timeout_secs = request.timeout_secs,
            "starting research pass"
        );

        let start = Instant::now();
        let deadline = start + Duration::from_secs(request.timeout_secs);

        let mut aggregator = Aggregator::new(
            &plan.query,
            plan.limit,
            self.config.research.extract_cap,
        );
        let mut deadline_hit = false;

        match WikiClient::new(&self.config.wiki) {
            Ok(wiki) => {
                let hits = match wiki.search(&plan.query, plan.candidate_limit).await {
                    Ok(hits) => hits,
                    Err(err) => {
                        warn!(error = %err, "search request failed");
                        Vec::new()
                    }
                };

                for hit in &hits {
                    if aggregator.is_full() {
                        break;
                    }
                    if Instant::now() >= deadline {
                        deadline_hit = true;
                        warn!(
                            collected = aggregator.len(),
                            "deadline reached, stopping fetch"
                        );
                        break;
                    }

                    match wiki.fetch_extract(&hit.title).await {
                        Ok(page) => {
                            aggregator.push(&hit.title, &page.url, &page.extract);
                        }
                        Err(err) => {
                            warn!(title = %hit.title, error = %err, "skipping candidate");
                        }
                    }
                }
            }
            Err(err) => {
                warn!(error = %err, "could not build wiki client");
            }
        }

        let mut result = aggregator.finish(start.elapsed().as_secs_f64(), deadline_hit);

        info!(
            sources = result.sources.len(),
            status = result.status.as_str(),
            elapsed_seconds = result.elapsed_seconds,
            "fetch pass finished"
        );

        // Summarization is best-effort and runs outside the fetch budget.
        if !result.combined_text.is_empty() {
            let engine = SummaryEngine::from_credentials(&self.config.providers, &self.credentials);
            if let Some(summary) = engine.summarize(&result.topic, &result.combined_text).await {
                info!(provider = %summary.provider, "summary generated");
                result.summary = Some(summary.text);
                result.summary_provider = Some(summary.provider);
            }
            result.elapsed_seconds = start.elapsed().as_secs_f64();
        }

        Ok(result)
    }

    /// Pings each configured provider, reporting per-provider outcomes.
    /// Returns an empty list when no credentials are configured.
    pub async fn validate_providers(&self) -> Vec<(ProviderKind, Result<(), LLMError>)> {
        SummaryEngine::from_credentials(&self.config.providers, &self.credentials)
            .validate()
            .await
    }
}

/// Errors that can abort a research run.
///
/// Everything else (unreachable API, skipped candidates, deadline,
/// provider failures) degrades the result instead of erroring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResearchError {
    #[error("Research topic must not be empty")]
    InvalidTopic,
}
