//! Plain-text results view

use std::fmt::Write;

use contract_types::{AnalysisReport, EntityBundle, RiskFinding};

const MAX_ORGANIZATIONS: usize = 5;
const MAX_ENTITY_VALUES: usize = 3;
const MAX_LISTED: usize = 10;

/// "unilateral_termination" -> "Unilateral Termination"
pub fn title_case(category: &str) -> String {
    category
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn entity_line(out: &mut String, label: &str, entities: &EntityBundle, category: &str, max: usize) {
    let values: Vec<&str> = entities.values(category).take(max).collect();
    if !values.is_empty() {
        let _ = writeln!(out, "{}: {}", label, values.join(", "));
    }
}

fn findings(out: &mut String, heading: &str, findings: &[RiskFinding], with_context: bool) {
    if findings.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{} ({})", heading, findings.len());
    for (i, finding) in findings.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, title_case(&finding.category));
        let _ = writeln!(out, "     Found: {}", finding.matched_text);
        if with_context {
            let _ = writeln!(out, "     Context: ...{}...", finding.context);
        }
    }
}

pub fn render_report(report: &AnalysisReport) -> String {
    let analysis = &report.analysis;
    let risks = &analysis.risks;
    let mut out = String::new();

    let _ = writeln!(out, "Analysis Results: {}", report.filename);
    let _ = writeln!(out, "Contract Type: {}", report.contract_type);
    let _ = writeln!(out);
    let _ = writeln!(out, "Overall Risk Score: {}/100", risks.composite_score);
    let _ = writeln!(
        out,
        "High: {}  Medium: {}  Low: {}",
        risks.high.len(),
        risks.medium.len(),
        risks.low.len()
    );
    let _ = writeln!(out, "{}", risks.level);
    let _ = writeln!(out, "Recommendation: {}", risks.recommendation);

    let _ = writeln!(out, "\nSummary");
    let _ = writeln!(out, "{}", report.summary);

    let _ = writeln!(out, "\nKey Information");
    let entities = &analysis.entities;
    entity_line(&mut out, "Organizations", entities, EntityBundle::ORGANIZATIONS, MAX_ORGANIZATIONS);
    entity_line(&mut out, "Parties", entities, "party", MAX_ENTITY_VALUES);
    entity_line(&mut out, "Financial Terms", entities, "amount", MAX_ENTITY_VALUES);
    entity_line(&mut out, "Dates", entities, "date", MAX_ENTITY_VALUES);

    findings(&mut out, "High Risk Issues", &risks.high, true);
    findings(&mut out, "Medium Risk Issues", &risks.medium, false);

    let classified = &analysis.classified;
    let _ = writeln!(out, "\nClause Analysis");
    let _ = writeln!(
        out,
        "Obligations: {}  Rights: {}  Prohibitions: {}",
        classified.obligations.len(),
        classified.rights.len(),
        classified.prohibitions.len()
    );
    for (i, clause) in classified.obligations.iter().take(MAX_LISTED).enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, clause);
    }

    if !analysis.ambiguous.is_empty() {
        let _ = writeln!(out, "\nAmbiguous Terms Found ({})", analysis.ambiguous.len());
        for flag in analysis.ambiguous.iter().take(MAX_LISTED) {
            let _ = writeln!(out, "  Terms: {}", flag.terms.join(", "));
            let _ = writeln!(out, "  {}", flag.sentence);
        }
    }

    out
}
