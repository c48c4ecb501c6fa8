//! Rule-based contract analysis
//!
//! Every component is a pure function of the input text and a [`PatternCatalog`]:
//! entity extraction, clause classification, ambiguity detection, risk scoring and the
//! essential-element compliance check. [`ContractAnalyzer::analyze`] runs them all and
//! returns a single [`AnalysisResult`].

pub mod ambiguity;
pub mod clauses;
pub mod error;
pub mod extractors;
pub mod patterns;
pub mod rules;
pub mod text;

pub use ambiguity::detect_ambiguous_terms;
pub use clauses::{classify_clauses, classify_sentence};
pub use error::CatalogError;
pub use extractors::{extract_entities, extract_entities_with};
pub use patterns::{catalog, validate_catalog, PatternCatalog};
pub use rules::{check_compliance, check_compliance_with, score_risks, score_risks_with};

use contract_types::{AnalysisResult, ContractType};

/// ContractAnalyzer entry point
#[derive(Debug, Clone, Copy)]
pub struct ContractAnalyzer<'c> {
    catalog: &'c PatternCatalog,
}

impl ContractAnalyzer<'static> {
    /// Analyzer over the built-in catalog
    pub fn new() -> Self {
        Self { catalog: catalog() }
    }
}

impl<'c> ContractAnalyzer<'c> {
    pub fn with_catalog(catalog: &'c PatternCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c PatternCatalog {
        self.catalog
    }

    /// Analyze text as a generic contract
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_as(text, ContractType::General)
    }

    pub fn analyze_as(&self, text: &str, contract_type: ContractType) -> AnalysisResult {
        let span = tracing::debug_span!("analyze", chars = text.len(), %contract_type);
        let _guard = span.enter();

        let entities = extract_entities_with(self.catalog, text);
        let classified = classify_clauses(text);
        let ambiguous = detect_ambiguous_terms(text);
        let risks = score_risks_with(self.catalog, text, Some(&entities));
        let compliance = check_compliance_with(self.catalog, text, contract_type);

        AnalysisResult {
            entities,
            classified,
            ambiguous,
            risks,
            compliance,
        }
    }
}

impl Default for ContractAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze text with the built-in catalog
pub fn analyze(text: &str) -> AnalysisResult {
    ContractAnalyzer::new().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_types::{ComplianceStatus, RiskLevel};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_analyzer_combines_all_components() {
        let text = "Party A shall pay Rs. 50,000 within 30 days. \
                    Party A shall not disclose confidential information.";
        let result = analyze(text);

        assert!(result.entities.contains("amount", "Rs. 50,000"));
        assert!(result.entities.contains("duration", "30 days"));
        assert_eq!(result.classified.obligations[0], "Party A shall pay Rs");
        assert_eq!(
            result.classified.prohibitions,
            vec!["Party A shall not disclose confidential information"]
        );
        assert_eq!(result.risks.low.len(), 1);
        assert_eq!(result.risks.level, RiskLevel::Low);
        assert_eq!(result.compliance.len(), 4);
    }

    #[test]
    fn test_analyzer_accepts_empty_text() {
        let result = analyze("");
        assert!(result.entities.is_empty());
        assert!(result.entities.get("party").is_some());
        assert!(result.classified.is_empty());
        assert!(result.ambiguous.is_empty());
        assert_eq!(result.risks.composite_score, 0);
        assert_eq!(result.risks.level, RiskLevel::Low);
        assert!(result
            .compliance
            .iter()
            .all(|r| r.status == ComplianceStatus::Missing));
    }

    #[test]
    fn test_analyzer_analyzes_decode_placeholders_as_text() {
        let result = analyze("Could not extract text from PDF");
        assert_eq!(result.risks.total_findings(), 0);
        assert_eq!(result.compliance.len(), 4);
    }

    #[test]
    fn test_custom_catalog_adds_risk_category() {
        let catalog = PatternCatalog::from_tables(
            patterns::ORGANIZATION_PATTERN,
            patterns::ENTITY_PATTERNS,
            &[(
                contract_types::RiskSeverity::High,
                &[("arbitration_waiver", &[r"(?i)waives?\s+arbitration"])],
            )],
            patterns::COMPLIANCE_PATTERNS,
        )
        .unwrap();
        let analyzer = ContractAnalyzer::with_catalog(&catalog);
        let result = analyzer.analyze("The Customer waives arbitration.");
        assert_eq!(result.risks.high[0].category, "arbitration_waiver");
        assert_eq!(result.risks.composite_score, 10);
    }
}
