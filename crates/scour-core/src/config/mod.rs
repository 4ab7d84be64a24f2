//! Configuration management for Scour.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `scour.toml` file
//! 3. User config `~/.config/scour/config.toml`
//! 4. Built-in defaults (lowest priority)

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wikipedia API configuration.
    pub wiki: WikiConfig,

    /// Research pass configuration.
    pub research: ResearchConfig,

    /// Summarization provider configuration.
    pub providers: ProvidersConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wiki: WikiConfig::default(),
            research: ResearchConfig::default(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./scour.toml` (project local)
    /// 2. `~/.config/scour/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment variable overrides are applied on top of whichever
    /// source was used.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = if Path::new("scour.toml").exists() {
            Self::from_file("scour.toml")?
        } else if let Some(user_config) = dirs::config_dir()
            .map(|dir| dir.join("scour").join("config.toml"))
            .filter(|path| path.exists())
        {
            Self::from_file(user_config)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // Wikipedia overrides
        if let Ok(url) = std::env::var("SCOUR_WIKI_API_URL") {
            self.wiki.api_url = Some(url);
        }
        if let Ok(language) = std::env::var("SCOUR_WIKI_LANGUAGE") {
            self.wiki.language = language;
        }
        if let Ok(secs) = std::env::var("SCOUR_WIKI_TIMEOUT_SECS") {
            if let Ok(n) = secs.parse() {
                self.wiki.request_timeout_secs = n;
            }
        }

        // Research overrides
        if let Ok(cap) = std::env::var("SCOUR_EXTRACT_CAP") {
            if let Ok(n) = cap.parse() {
                self.research.extract_cap = n;
            }
        }
        if let Ok(count) = std::env::var("SCOUR_MAX_SOURCES") {
            if let Ok(n) = count.parse() {
                self.research.max_sources = n;
            }
        }
        if let Ok(secs) = std::env::var("SCOUR_TIMEOUT_SECS") {
            if let Ok(n) = secs.parse() {
                self.research.timeout_secs = n;
            }
        }
        if let Ok(depth) = std::env::var("SCOUR_DEPTH") {
            if let Ok(n) = depth.parse() {
                self.research.depth = n;
            }
        }

        // Provider overrides (keys are resolved separately, see Credentials)
        if let Ok(url) = std::env::var("SCOUR_OPENROUTER_URL") {
            self.providers.openrouter.base_url = url;
        }
        if let Ok(model) = std::env::var("SCOUR_OPENROUTER_MODEL") {
            self.providers.openrouter.model = model;
        }
        if let Ok(url) = std::env::var("SCOUR_GROQ_URL") {
            self.providers.groq.base_url = url;
        }
        if let Ok(model) = std::env::var("SCOUR_GROQ_MODEL") {
            self.providers.groq.model = model;
        }
        if let Ok(secs) = std::env::var("SCOUR_LLM_TIMEOUT_SECS") {
            if let Ok(n) = secs.parse() {
                self.providers.request_timeout_secs = n;
            }
        }
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Wikipedia API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Explicit API endpoint. When unset, derived from `language`.
    pub api_url: Option<String>,

    /// Wikipedia language edition (subdomain).
    pub language: String,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            language: DEFAULT_WIKI_LANGUAGE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_WIKI_TIMEOUT_SECS,
        }
    }
}

impl WikiConfig {
    /// Get the API endpoint, falling back to the language edition default.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.wikipedia.org/w/api.php", self.language))
    }
}

/// Research pass configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    /// Character cap applied to each article extract.
    pub extract_cap: usize,

    /// Default number of sources to collect per pass.
    pub max_sources: usize,

    /// Default wall-clock budget for the fetch pass, in seconds.
    pub timeout_secs: u64,

    /// Default search depth (1-3). Inflates the raw candidate pool.
    pub depth: usize,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            extract_cap: DEFAULT_EXTRACT_CAP,
            max_sources: DEFAULT_MAX_SOURCES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Summarization provider configuration.
///
/// Providers are tried in a fixed priority order: OpenRouter first,
/// Groq as the fast-inference fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Per-call timeout for summarization requests, in seconds.
    pub request_timeout_secs: u64,

    /// Sampling temperature for summaries.
    pub temperature: f32,

    /// Maximum tokens for summary responses.
    pub max_tokens: u32,

    /// OpenRouter gateway.
    pub openrouter: ProviderConfig,

    /// Groq gateway.
    pub groq: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            openrouter: ProviderConfig {
                base_url: DEFAULT_OPENROUTER_URL.to_string(),
                model: DEFAULT_OPENROUTER_MODEL.to_string(),
                api_key: None,
            },
            groq: ProviderConfig {
                base_url: DEFAULT_GROQ_URL.to_string(),
                model: DEFAULT_GROQ_MODEL.to_string(),
                api_key: None,
            },
        }
    }
}

/// Configuration for a single chat-completion gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API base URL.
    pub base_url: String,

    /// Model name.
    pub model: String,

    /// API key (usually set via environment variable instead).
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
}

/// Resolved provider credentials.
///
/// Resolved once at startup from config and environment. An absent key
/// disables that provider; it is never an error. Key material is redacted
/// from `Debug` output and must never be logged.
#[derive(Clone, Default)]
pub struct Credentials {
    pub openrouter: Option<String>,
    pub groq: Option<String>,
}

impl Credentials {
    /// Resolve credentials from config, falling back to the conventional
    /// environment variables (`OPENROUTER_API_KEY`, `GROQ_API_KEY`).
    pub fn resolve(providers: &ProvidersConfig) -> Self {
        Self {
            openrouter: resolve_key(providers.openrouter.api_key.as_deref(), "OPENROUTER_API_KEY"),
            groq: resolve_key(providers.groq.api_key.as_deref(), "GROQ_API_KEY"),
        }
    }

    /// Returns true if at least one provider has a key.
    pub fn any_configured(&self) -> bool {
        self.openrouter.is_some() || self.groq.is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("openrouter", &self.openrouter.as_ref().map(|_| "<redacted>"))
            .field("groq", &self.groq.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn resolve_key(configured: Option<&str>, var: &str) -> Option<String> {
    configured
        .map(str::to_string)
        .or_else(|| std::env::var(var).ok())
        .filter(|key| !key.trim().is_empty())
}
