//! Plain-language narrative for analyzed contracts
//!
//! [`NarrativeAssistant`] wraps a [`TextGenerator`] (normally [`GeminiClient`]) and
//! never fails: when the remote call does, the error text is returned where the
//! generated text would have been.

pub mod client;
pub mod config;
pub mod error;
pub mod prompts;

pub use client::{GeminiClient, TextGenerator};
pub use config::NarrativeConfig;
pub use error::NarrativeError;

use contract_types::{ContractType, EntityBundle, RiskReport};
use serde::{Deserialize, Serialize};

/// Shown instead of a generated summary when no assistant is configured
pub const FALLBACK_SUMMARY: &str = "This contract has been analyzed using rule-based NLP. \
Risk scoring and entity extraction are complete. \
AI-powered summaries are unavailable because no GEMINI_API_KEY is configured.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseExplanation {
    pub explanation: String,
    pub original_clause: String,
}

pub struct NarrativeAssistant<G = GeminiClient> {
    generator: G,
}

impl NarrativeAssistant<GeminiClient> {
    pub fn from_config(config: NarrativeConfig) -> Result<Self, NarrativeError> {
        tracing::info!(model = %config.model, "narrative assistant enabled");
        Ok(Self::new(GeminiClient::new(config)?))
    }

    /// Fails with [`NarrativeError::MissingApiKey`] when no key is configured
    pub fn from_env() -> Result<Self, NarrativeError> {
        Self::from_config(NarrativeConfig::from_env()?)
    }
}

impl<G: TextGenerator> NarrativeAssistant<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    async fn complete(&self, task: &'static str, prompt: String) -> String {
        match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(task, error = %err, "narrative request failed");
                err.to_string()
            }
        }
    }

    /// Four to five sentence summary for a business reader
    pub async fn summarize(&self, text: &str, entities: &EntityBundle, risks: &RiskReport) -> String {
        self.complete("summarize", prompts::summary(text, entities, risks))
            .await
    }

    pub async fn explain_clause(&self, clause: &str, context: &str) -> ClauseExplanation {
        ClauseExplanation {
            explanation: self
                .complete("explain_clause", prompts::explain_clause(clause, context))
                .await,
            original_clause: clause.to_string(),
        }
    }

    /// Alternative wordings, one per blank-line separated block
    pub async fn suggest_alternatives(&self, clause: &str, concern: &str) -> Vec<String> {
        let response = self
            .complete(
                "suggest_alternatives",
                prompts::suggest_alternatives(clause, concern),
            )
            .await;
        response
            .trim()
            .split("\n\n")
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Labels outside the known list map to [`ContractType::Other`]
    pub async fn classify_contract_type(&self, text: &str) -> ContractType {
        let label = self
            .complete("classify_contract_type", prompts::classify_contract_type(text))
            .await;
        ContractType::from_label(&label)
    }
}

/// Generated summary, or [`FALLBACK_SUMMARY`] without an assistant
pub async fn summary_or_fallback<G: TextGenerator>(
    assistant: Option<&NarrativeAssistant<G>>,
    text: &str,
    entities: &EntityBundle,
    risks: &RiskReport,
) -> String {
    match assistant {
        Some(assistant) => assistant.summarize(text, entities, risks).await,
        None => FALLBACK_SUMMARY.to_string(),
    }
}
