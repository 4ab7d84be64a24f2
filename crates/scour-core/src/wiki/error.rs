use thiserror::Error;

/// Errors that can occur while talking to the Wikipedia API.
///
/// During a research pass these are all recoverable: a failing candidate
/// is skipped and the pass continues with whatever it has collected.
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("API returned status {status}")]
    Api { status: u16 },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No extract available for \"{0}\"")]
    MissingExtract(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for WikiError {
    fn from(err: reqwest::Error) -> Self {
        WikiError::Network(err.to_string())
    }
}
