//! Prompt templates

use contract_types::{ContractType, EntityBundle, RiskReport};

/// Characters of contract text included in the summary prompt
pub const SUMMARY_EXCERPT_CHARS: usize = 3000;
/// Characters of contract text included in the classification prompt
pub const CLASSIFY_EXCERPT_CHARS: usize = 1500;

/// Leading `max_chars` characters of `text`
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn list(entities: &EntityBundle, category: &str) -> String {
    let values: Vec<&str> = entities.values(category).collect();
    if values.is_empty() {
        "none found".to_string()
    } else {
        values.join(", ")
    }
}

pub fn summary(text: &str, entities: &EntityBundle, risks: &RiskReport) -> String {
    format!(
        "You are a legal assistant helping small business owners understand contracts.

Contract Text (excerpts):
{excerpt}

Extracted Information:
- Parties: {parties}
- Key Dates: {dates}
- Financial Terms: {amounts}

Risk Analysis Results:
- Composite Risk Score: {score}/100
- High Risk Issues: {high}
- Medium Risk Issues: {medium}

Task: Create a 4-5 sentence plain-language summary for a busy business owner. Focus on:
1. What type of contract this is
2. Who the parties are
3. Main obligations
4. Key risks they should know about
5. Overall recommendation

Use simple business language, avoid legal jargon. Be direct and actionable.",
        excerpt = excerpt(text, SUMMARY_EXCERPT_CHARS),
        parties = list(entities, EntityBundle::ORGANIZATIONS),
        dates = list(entities, "date"),
        amounts = list(entities, "amount"),
        score = risks.composite_score,
        high = risks.high.len(),
        medium = risks.medium.len(),
    )
}

pub fn explain_clause(clause: &str, context: &str) -> String {
    format!(
        "Explain this contract clause to a non-lawyer:

Clause: \"{clause}\"

Context: {context}

Provide:
1. Plain English explanation (2-3 sentences)
2. What this means for the business
3. Any potential concerns
4. Whether this is standard or unusual

Be concise and practical."
    )
}

pub fn suggest_alternatives(clause: &str, concern: &str) -> String {
    format!(
        "This contract clause is concerning:

Original Clause: \"{clause}\"
Concern: {concern}

Suggest 2 alternative wordings that would be more balanced and fair for an SME. Make them:
- Legally sound
- Protecting both parties
- Clear and unambiguous
- Suitable for Indian business context

Format: Return only the alternative clauses, numbered 1 and 2."
    )
}

pub fn classify_contract_type(text: &str) -> String {
    let categories: String = ContractType::CLASSIFIABLE
        .iter()
        .map(|t| format!("- {}\n", t.label()))
        .collect();
    format!(
        "Classify this contract into ONE of these categories:
{categories}
Contract excerpt:
{excerpt}

Return ONLY the category name, nothing else.",
        excerpt = excerpt(text, CLASSIFY_EXCERPT_CHARS),
    )
}
