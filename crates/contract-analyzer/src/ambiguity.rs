//! Vague-term detection

use contract_types::AmbiguityFlag;

use crate::patterns::{AMBIGUITY_CONCERN, VAGUE_TERMS};
use crate::text::split_sentences;

/// One flag per sentence holding at least one vague term, in source order
pub fn detect_ambiguous_terms(text: &str) -> Vec<AmbiguityFlag> {
    let flags: Vec<_> = split_sentences(text)
        .into_iter()
        .filter_map(flag_sentence)
        .collect();

    tracing::debug!(flags = flags.len(), "detected ambiguous sentences");
    flags
}

fn flag_sentence(sentence: &str) -> Option<AmbiguityFlag> {
    let lower = sentence.to_lowercase();
    let terms: Vec<String> = VAGUE_TERMS
        .iter()
        .filter(|term| lower.contains(*term))
        .map(|term| term.to_string())
        .collect();

    if terms.is_empty() {
        return None;
    }

    Some(AmbiguityFlag {
        sentence: sentence.to_string(),
        terms,
        concern: AMBIGUITY_CONCERN.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_flag_lists_all_terms() {
        let flags = detect_ambiguous_terms(
            "The Supplier shall use best efforts to deliver promptly and in good faith.",
        );
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].terms, vec!["promptly", "best efforts", "good faith"]);
        assert_eq!(flags[0].concern, "Vague language may lead to disputes");
        assert_eq!(
            flags[0].sentence,
            "The Supplier shall use best efforts to deliver promptly and in good faith"
        );
    }

    #[test]
    fn test_clear_sentences_are_not_flagged() {
        assert!(detect_ambiguous_terms("Payment is due on 1 March 2025.").is_empty());
        assert!(detect_ambiguous_terms("").is_empty());
    }

    #[test]
    fn test_repeated_sentences_each_get_a_flag() {
        let flags = detect_ambiguous_terms("Costs may vary. Costs may vary.");
        assert_eq!(flags.len(), 2);
        assert_eq!(flags[0], flags[1]);
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let flags = detect_ambiguous_terms("MATERIALS are supplied APPROXIMATELY weekly");
        assert_eq!(flags[0].terms, vec!["material", "approximately"]);
    }
}
