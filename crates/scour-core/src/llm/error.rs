use thiserror::Error;

/// Errors that can occur during a provider call.
///
/// Every variant is recoverable from the pipeline's point of view: the
/// summary engine fails over to the next provider and ultimately returns
/// no summary rather than surfacing any of these.
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited. Try again later.")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        LLMError::Network(err.to_string())
    }
}
