mod chat;
mod engine;
mod error;

pub use chat::ChatClient;
pub use engine::{Summary, SummaryEngine};
pub use error::LLMError;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The summarization gateways Scour knows how to talk to, in priority
/// order: OpenRouter first, Groq as the fast-inference fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    OpenRouter,
    Groq,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenRouter => "OpenRouter",
            ProviderKind::Groq => "Groq",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for chat-completion providers.
///
/// Both gateways speak the OpenAI chat completions dialect, so a single
/// [`ChatClient`] implementation covers them; the trait is the seam that
/// lets tests inject fakes.
#[async_trait]
pub trait LLM: Send + Sync {
    /// Complete a prompt and return the response.
    async fn complete(&self, prompt: &str) -> Result<String, LLMError>;

    /// Complete a prompt with a system message.
    async fn complete_with_system(&self, system: &str, prompt: &str)
        -> Result<String, LLMError>;
}

/// Blanket implementation for boxed trait objects.
#[async_trait]
impl LLM for Box<dyn LLM> {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        (**self).complete(prompt).await
    }

    async fn complete_with_system(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<String, LLMError> {
        (**self).complete_with_system(system, prompt).await
    }
}
