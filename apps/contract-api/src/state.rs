//! Application state for the contract API

use contract_analyzer::ContractAnalyzer;
use contract_narrative::{GeminiClient, NarrativeAssistant, NarrativeConfig, NarrativeError, TextGenerator};

/// Assistant over any text generator
pub type DynAssistant = NarrativeAssistant<Box<dyn TextGenerator>>;

pub struct AppState {
    pub analyzer: ContractAnalyzer<'static>,
    pub assistant: Option<DynAssistant>,
}

impl AppState {
    pub fn new(assistant: Option<DynAssistant>) -> Self {
        Self {
            analyzer: ContractAnalyzer::new(),
            assistant,
        }
    }

    /// Enables summaries when `GEMINI_API_KEY` is set
    pub fn from_env() -> anyhow::Result<Self> {
        let assistant = match NarrativeConfig::from_env() {
            Ok(config) => {
                tracing::info!(model = %config.model, "narrative summaries enabled");
                let client: Box<dyn TextGenerator> = Box::new(GeminiClient::new(config)?);
                Some(NarrativeAssistant::new(client))
            }
            Err(NarrativeError::MissingApiKey) => {
                tracing::info!("GEMINI_API_KEY not set; narrative summaries disabled");
                None
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self::new(assistant))
    }
}
