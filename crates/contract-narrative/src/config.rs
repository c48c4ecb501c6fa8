//! Summarizer settings

use std::fmt;
use std::time::Duration;

use crate::error::NarrativeError;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Clone, PartialEq, Eq)]
pub struct NarrativeConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl NarrativeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Reads `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL` and `GEMINI_TIMEOUT_MS`
    pub fn from_env() -> Result<Self, NarrativeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NarrativeError> {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = set("GEMINI_API_KEY").ok_or(NarrativeError::MissingApiKey)?;
        let mut config = Self::new(api_key.trim());
        if let Some(model) = set("GEMINI_MODEL") {
            config.model = model;
        }
        if let Some(base_url) = set("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(ms) = set("GEMINI_TIMEOUT_MS").and_then(|v| v.trim().parse().ok()) {
            config.timeout = Duration::from_millis(ms);
        }
        Ok(config)
    }

    /// `generateContent` URL for the configured model, without the key
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl fmt::Debug for NarrativeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrativeConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
