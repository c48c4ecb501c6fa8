//! Risk scoring: every match of every risk pattern becomes a finding

use contract_types::{EntityBundle, RiskFinding, RiskReport, RiskSeverity};

use crate::patterns::{catalog, PatternCatalog};
use crate::text::{char_offset, extract_context};

/// Characters of context kept on each side of a match
pub const CONTEXT_RADIUS: usize = 50;

/// Score with the built-in catalog
pub fn score_risks(text: &str, entities: Option<&EntityBundle>) -> RiskReport {
    score_risks_with(catalog(), text, entities)
}

/// Scan the text with every (tier, category, pattern) of the catalog.
///
/// Findings within a tier follow catalog declaration order, not text position. Matches
/// are not deduplicated across patterns. `entities` does not affect the score.
pub fn score_risks_with(
    catalog: &PatternCatalog,
    text: &str,
    entities: Option<&EntityBundle>,
) -> RiskReport {
    let mut high = Vec::new();
    let mut medium = Vec::new();
    let mut low = Vec::new();

    for category in &catalog.risks {
        let findings = match category.severity {
            RiskSeverity::High => &mut high,
            RiskSeverity::Medium => &mut medium,
            RiskSeverity::Low => &mut low,
        };

        for pattern in &category.patterns {
            for m in pattern.find_iter(text) {
                findings.push(RiskFinding {
                    category: category.name.clone(),
                    matched_text: m.as_str().to_string(),
                    context: extract_context(text, m.start(), m.end(), CONTEXT_RADIUS)
                        .to_string(),
                    position: char_offset(text, m.start()),
                });
            }
        }
    }

    let report = RiskReport::from_findings(high, medium, low);
    tracing::debug!(
        high = report.high.len(),
        medium = report.medium.len(),
        low = report.low.len(),
        score = report.composite_score,
        entities = entities.map_or(0, EntityBundle::total),
        "scored risks"
    );
    report
}
