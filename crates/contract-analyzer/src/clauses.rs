//! Clause classification by keyword markers
//!
//! Markers are matched as substrings of the lower-cased sentence, without word
//! boundaries, so "may" also fires inside "dismay". Existing outputs depend on this.

use contract_types::{ClassifiedClauses, ClauseKind};

use crate::patterns::{OBLIGATION_MARKERS, PROHIBITION_MARKERS, RIGHT_MARKERS};
use crate::text::{contains_any, split_sentences};

/// Classify every sentence; sentences without a marker are dropped
pub fn classify_clauses(text: &str) -> ClassifiedClauses {
    let mut classified = ClassifiedClauses::default();

    for sentence in split_sentences(text) {
        if let Some(kind) = classify_sentence(sentence) {
            classified.push(kind, sentence);
        }
    }

    tracing::debug!(
        obligations = classified.obligations.len(),
        rights = classified.rights.len(),
        prohibitions = classified.prohibitions.len(),
        "classified clauses"
    );
    classified
}

/// First matching kind wins: prohibition, then obligation, then right
pub fn classify_sentence(sentence: &str) -> Option<ClauseKind> {
    let lower = sentence.to_lowercase();

    if contains_any(&lower, PROHIBITION_MARKERS) {
        Some(ClauseKind::Prohibition)
    } else if contains_any(&lower, OBLIGATION_MARKERS) {
        Some(ClauseKind::Obligation)
    } else if contains_any(&lower, RIGHT_MARKERS) {
        Some(ClauseKind::Right)
    } else {
        None
    }
}
