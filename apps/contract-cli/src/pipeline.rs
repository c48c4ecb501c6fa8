//! File to report

use std::path::Path;

use contract_analyzer::ContractAnalyzer;
use contract_narrative::{summary_or_fallback, NarrativeAssistant, TextGenerator};
use contract_types::{AnalysisReport, ContractType};
use document_source::DocumentType;

/// Decode and analyze one contract file
///
/// A `declared` contract type wins; otherwise the assistant classifies the text, and
/// without an assistant the contract is treated as [`ContractType::General`].
pub async fn analyze_file<G: TextGenerator>(
    path: &Path,
    document_type: DocumentType,
    declared: Option<ContractType>,
    assistant: Option<&NarrativeAssistant<G>>,
) -> AnalysisReport {
    let document = document_source::decode(path, document_type);
    if document.is_degraded() {
        tracing::warn!(
            path = %path.display(),
            placeholder = %document.raw_text,
            "analyzing placeholder text"
        );
    }

    let contract_type = match (declared, assistant) {
        (Some(declared), _) => declared,
        (None, Some(assistant)) => assistant.classify_contract_type(&document.raw_text).await,
        (None, None) => ContractType::General,
    };

    let analysis = ContractAnalyzer::new().analyze_as(&document.raw_text, contract_type);
    tracing::info!(
        score = analysis.risks.composite_score,
        level = %analysis.risks.level,
        "analysis complete"
    );

    let summary = summary_or_fallback(
        assistant,
        &document.raw_text,
        &analysis.entities,
        &analysis.risks,
    )
    .await;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    AnalysisReport::new(filename, contract_type, summary, &document, analysis)
}
