//! HTTP handlers for the contract API

use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use contract_narrative::{summary_or_fallback, FALLBACK_SUMMARY};
use contract_types::{AnalysisReport, AnalysisResult, ContractType};
use document_source::DocumentType;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn declared_type(label: Option<&str>) -> Option<ContractType> {
    label
        .filter(|l| !l.trim().is_empty())
        .map(ContractType::from_label)
}

/// Analyze plain text
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalysisResult> {
    let contract_type = declared_type(req.contract_type.as_deref()).unwrap_or_default();
    Json(state.analyzer.analyze_as(&req.text, contract_type))
}

/// Decode, analyze and optionally summarize an uploaded document
pub async fn analyze_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DocumentRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    if !DocumentType::is_supported(&req.filename) {
        return Err(ApiError::UnsupportedFile(req.filename));
    }
    let document_type = DocumentType::from_path(&req.filename);

    let data = BASE64
        .decode(req.data_base64.trim())
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid document base64: {}", e)))?;

    tracing::info!(
        filename = %req.filename,
        %document_type,
        bytes = data.len(),
        "analyzing upload"
    );

    let document =
        tokio::task::spawn_blocking(move || document_source::decode_bytes(&data, document_type))
            .await
            .context("decoder task failed")?;

    let assistant = if req.summarize {
        state.assistant.as_ref()
    } else {
        None
    };

    let contract_type = match (declared_type(req.contract_type.as_deref()), assistant) {
        (Some(declared), _) => declared,
        (None, Some(assistant)) => assistant.classify_contract_type(&document.raw_text).await,
        (None, None) => ContractType::General,
    };

    let analysis = state.analyzer.analyze_as(&document.raw_text, contract_type);

    let summary = if req.summarize {
        summary_or_fallback(
            assistant,
            &document.raw_text,
            &analysis.entities,
            &analysis.risks,
        )
        .await
    } else {
        FALLBACK_SUMMARY.to_string()
    };

    Ok(Json(AnalysisReport::new(
        req.filename,
        contract_type,
        summary,
        &document,
        analysis,
    )))
}
