//! Summarizer errors
//!
//! The `Display` text of each variant is what callers show in place of generated text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrativeError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Error calling API: {0}")]
    Transport(String),

    #[error("Error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Error calling API: unexpected response shape ({0})")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for NarrativeError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key
        NarrativeError::Transport(err.without_url().to_string())
    }
}
