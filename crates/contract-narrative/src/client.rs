//! Text generation backends

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::NarrativeConfig;
use crate::error::NarrativeError;

/// Turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        (**self).generate(prompt).await
    }
}

/// Gemini `generateContent` over HTTPS
pub struct GeminiClient {
    http: reqwest::Client,
    config: NarrativeConfig,
}

impl GeminiClient {
    pub fn new(config: NarrativeConfig) -> Result<Self, NarrativeError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        tracing::debug!(model = %self.config.model, prompt_chars = prompt.len(), "calling gemini");

        let response = self
            .http
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(NarrativeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().await?;
        candidate_text(&value)
    }
}

/// Single-turn request with one text part
pub fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }]
    })
}

/// Text of the first part of the first candidate
pub fn candidate_text(response: &Value) -> Result<String, NarrativeError> {
    response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            NarrativeError::MalformedResponse("no candidates[0].content.parts[0].text".to_string())
        })
}
