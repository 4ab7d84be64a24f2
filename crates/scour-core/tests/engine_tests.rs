use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use scour_core::config::{Credentials, ProvidersConfig};
use scour_core::llm::{LLMError, ProviderKind, SummaryEngine, LLM};

/// In-memory provider: answers with a fixed response (or a fixed error)
/// and counts how many calls it received.
struct FakeProvider {
    response: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl FakeProvider {
    fn succeeding(text: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                response: Some(text.to_string()),
                calls: calls.clone(),
            },
            calls,
        )
    }

    fn failing() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                response: None,
                calls: calls.clone(),
            },
            calls,
        )
    }

    fn respond(&self) -> Result<String, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(LLMError::ApiError {
                status: 500,
                message: "upstream broke".to_string(),
            }),
        }
    }
}

#[async_trait]
impl LLM for FakeProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, LLMError> {
        self.respond()
    }

    async fn complete_with_system(&self, _system: &str, _prompt: &str) -> Result<String, LLMError> {
        self.respond()
    }
}

#[tokio::test]
async fn empty_engine_returns_none() {
    let engine = SummaryEngine::new();
    assert!(engine.is_empty());
    assert!(engine.summarize("topic", "text").await.is_none());
}

#[tokio::test]
async fn first_provider_wins() {
    let (first, first_calls) = FakeProvider::succeeding("from openrouter");
    let (second, second_calls) = FakeProvider::succeeding("from groq");

    let engine = SummaryEngine::new()
        .with_provider(ProviderKind::OpenRouter, Box::new(first))
        .with_provider(ProviderKind::Groq, Box::new(second));

    let summary = engine.summarize("topic", "text").await.unwrap();
    assert_eq!(summary.provider, ProviderKind::OpenRouter);
    assert_eq!(summary.text, "from openrouter");
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failover_to_second_provider() {
    let (first, _) = FakeProvider::failing();
    let (second, _) = FakeProvider::succeeding("groq summary");

    let engine = SummaryEngine::new()
        .with_provider(ProviderKind::OpenRouter, Box::new(first))
        .with_provider(ProviderKind::Groq, Box::new(second));

    let summary = engine.summarize("topic", "text").await.unwrap();
    assert_eq!(summary.provider, ProviderKind::Groq);
    assert_eq!(summary.text, "groq summary");
}

#[tokio::test]
async fn all_providers_failing_returns_none() {
    let (first, first_calls) = FakeProvider::failing();
    let (second, second_calls) = FakeProvider::failing();

    let engine = SummaryEngine::new()
        .with_provider(ProviderKind::OpenRouter, Box::new(first))
        .with_provider(ProviderKind::Groq, Box::new(second));

    assert!(engine.summarize("topic", "text").await.is_none());
    // Fail-fast-and-failover: exactly one attempt per provider
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blank_response_falls_over() {
    let (first, _) = FakeProvider::succeeding("   \n");
    let (second, _) = FakeProvider::succeeding("real summary");

    let engine = SummaryEngine::new()
        .with_provider(ProviderKind::OpenRouter, Box::new(first))
        .with_provider(ProviderKind::Groq, Box::new(second));

    let summary = engine.summarize("topic", "text").await.unwrap();
    assert_eq!(summary.provider, ProviderKind::Groq);
}

#[tokio::test]
async fn validate_reports_each_provider() {
    let (first, _) = FakeProvider::failing();
    let (second, _) = FakeProvider::succeeding("pong");

    let engine = SummaryEngine::new()
        .with_provider(ProviderKind::OpenRouter, Box::new(first))
        .with_provider(ProviderKind::Groq, Box::new(second));

    let statuses = engine.validate().await;
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].0, ProviderKind::OpenRouter);
    assert!(statuses[0].1.is_err());
    assert_eq!(statuses[1].0, ProviderKind::Groq);
    assert!(statuses[1].1.is_ok());
}

#[test]
fn from_credentials_skips_absent_keys() {
    let providers = ProvidersConfig::default();

    let none = Credentials::default();
    assert!(SummaryEngine::from_credentials(&providers, &none).is_empty());

    let groq_only = Credentials {
        openrouter: None,
        groq: Some("groq-key".to_string()),
    };
    let engine = SummaryEngine::from_credentials(&providers, &groq_only);
    assert_eq!(engine.providers(), vec![ProviderKind::Groq]);

    let both = Credentials {
        openrouter: Some("or-key".to_string()),
        groq: Some("groq-key".to_string()),
    };
    let engine = SummaryEngine::from_credentials(&providers, &both);
    assert_eq!(
        engine.providers(),
        vec![ProviderKind::OpenRouter, ProviderKind::Groq]
    );
}
