//! Request and response bodies

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Analyze text that is already extracted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub contract_type: Option<String>, // Label, e.g. "Lease Agreement"
}

/// Analyze an uploaded document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequest {
    pub filename: String,
    pub data_base64: String,
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub summarize: bool,
}
