use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{Credentials, ProvidersConfig};
use crate::research::prompts::{build_summary_prompt, SUMMARY_SYSTEM_PROMPT, VALIDATION_PING};

use super::{ChatClient, LLMError, ProviderKind, LLM};

/// A successful summarization, tagged with the provider that produced it.
#[derive(Debug, Clone)]
pub struct Summary {
    pub text: String,
    pub provider: ProviderKind,
}

struct Entry {
    kind: ProviderKind,
    client: Box<dyn LLM>,
}

/// Fallback-chained summarization over an ordered list of providers.
///
/// Entries exist only for providers whose credential is present, so a run
/// with no keys configured makes zero provider calls. The first provider
/// to return a non-empty summary wins; any failure moves on to the next
/// entry with no retries.
#[derive(Default)]
pub struct SummaryEngine {
    entries: Vec<Entry>,
}

impl SummaryEngine {
    /// Creates an empty engine with no providers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider to the end of the failover chain.
    pub fn with_provider(mut self, kind: ProviderKind, client: Box<dyn LLM>) -> Self {
        self.entries.push(Entry { kind, client });
        self
    }

    /// Builds the chain from resolved credentials: OpenRouter first, Groq
    /// second. A missing key is a configuration gap, not a failure; that
    /// provider simply does not appear in the chain.
    pub fn from_credentials(providers: &ProvidersConfig, credentials: &Credentials) -> Self {
        let timeout = Duration::from_secs(providers.request_timeout_secs);
        let mut engine = Self::new();

        if let Some(key) = credentials.openrouter.as_deref() {
            let client = ChatClient::new(&providers.openrouter.base_url, key, &providers.openrouter.model)
                .with_timeout(timeout)
                .with_temperature(providers.temperature)
                .with_max_tokens(providers.max_tokens);
            engine = engine.with_provider(ProviderKind::OpenRouter, Box::new(client));
        }

        if let Some(key) = credentials.groq.as_deref() {
            let client = ChatClient::new(&providers.groq.base_url, key, &providers.groq.model)
                .with_timeout(timeout)
                .with_temperature(providers.temperature)
                .with_max_tokens(providers.max_tokens);
            engine = engine.with_provider(ProviderKind::Groq, Box::new(client));
        }

        engine
    }

    /// Returns true if no provider is configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The providers in the chain, in failover order.
    pub fn providers(&self) -> Vec<ProviderKind> {
        self.entries.iter().map(|entry| entry.kind).collect()
    }

    /// Tries each provider in order and returns the first successful
    /// summary, or `None` if every provider is absent or failed.
    pub async fn summarize(&self, topic: &str, combined_text: &str) -> Option<Summary> {
        let prompt = build_summary_prompt(topic, combined_text);

        for entry in &self.entries {
            debug!(provider = %entry.kind, "requesting summary");
            match entry
                .client
                .complete_with_system(SUMMARY_SYSTEM_PROMPT, &prompt)
                .await
            {
                Ok(text) if !text.trim().is_empty() => {
                    return Some(Summary {
                        text,
                        provider: entry.kind,
                    });
                }
                Ok(_) => {
                    warn!(provider = %entry.kind, "provider returned an empty summary");
                }
                Err(err) => {
                    warn!(provider = %entry.kind, error = %err, "provider failed, trying next");
                }
            }
        }

        None
    }

    /// Sends a one-word ping through each configured provider, reporting
    /// per-provider success or failure.
    pub async fn validate(&self) -> Vec<(ProviderKind, Result<(), LLMError>)> {
        let mut statuses = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let outcome = entry.client.complete(VALIDATION_PING).await.map(|_| ());
            statuses.push((entry.kind, outcome));
        }
        statuses
    }
}
