//! Default values for Scour configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Wikipedia Defaults
// ============================================================================

/// Default Wikipedia language edition.
pub const DEFAULT_WIKI_LANGUAGE: &str = "en";

/// Default per-request timeout for Wikipedia calls (seconds).
pub const DEFAULT_WIKI_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent sent with Wikipedia requests.
pub const DEFAULT_USER_AGENT: &str = "scour/0.1 (research agent)";

// ============================================================================
// Research Defaults
// ============================================================================

/// Default character cap applied to each article extract.
pub const DEFAULT_EXTRACT_CAP: usize = 1200;

/// Default number of sources to collect per pass.
pub const DEFAULT_MAX_SOURCES: usize = 5;

/// Maximum number of sources a pass may collect.
pub const MAX_SOURCES: usize = 20;

/// Default wall-clock budget for the fetch pass (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default search depth.
pub const DEFAULT_DEPTH: usize = 2;

/// Maximum search depth.
pub const MAX_DEPTH: usize = 3;

/// Hard cap on raw search candidates requested in one pass.
/// Matches the upstream `srlimit` ceiling for anonymous clients.
pub const MAX_CANDIDATES: usize = 50;

// ============================================================================
// Provider Defaults
// ============================================================================

/// Default per-call timeout for summarization requests (seconds).
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Default sampling temperature for summaries.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default max tokens for summary responses.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

// OpenRouter defaults
/// Default OpenRouter API URL.
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1";
/// Default OpenRouter model.
pub const DEFAULT_OPENROUTER_MODEL: &str = "tngtech/deepseek-r1t2-chimera:free";

// Groq defaults
/// Default Groq API URL (OpenAI-compatible endpoint).
pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai/v1";
/// Default Groq model.
pub const DEFAULT_GROQ_MODEL: &str = "mixtral-8x7b-32768";
