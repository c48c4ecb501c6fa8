//! Property tests for the analysis pipeline
//!
//! Runs arbitrary and contract-like text through every component and checks the
//! invariants that must hold for any input.

use contract_analyzer::text::split_sentences;
use contract_analyzer::{
    analyze, check_compliance, classify_clauses, detect_ambiguous_terms, extract_entities,
    score_risks,
};
use contract_types::{composite_score, ClauseKind, ContractType, RiskLevel};
use proptest::prelude::*;

/// Sentences built from contract vocabulary so the patterns actually fire
fn contract_sentence() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Party A shall pay Rs. 10,000 within 30 days".to_string()),
        Just("The Company may terminate at will".to_string()),
        Just("The Vendor shall not disclose confidential information".to_string()),
        Just("This agreement is automatically renewed unless 30 days notice is given".to_string()),
        Just("The Supplier shall indemnify and hold harmless the Buyer".to_string()),
        Just("Liquidated damages of ₹ 5,000 apply".to_string()),
        Just("Unlimited liability rests with the Contractor".to_string()),
        Just("The parties agree to act in good faith".to_string()),
        Just("Employee is entitled to reasonable leave".to_string()),
        "[A-Za-z ]{1,40}",
    ]
}

fn contract_text() -> impl Strategy<Value = String> {
    prop::collection::vec((contract_sentence(), "[.!?]{1,3} ?"), 0..25).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(sentence, boundary)| format!("{}{}", sentence, boundary))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: composite score follows the weighted count and stays in range
    #[test]
    fn composite_score_matches_weighted_counts(text in contract_text()) {
        let report = score_risks(&text, None);
        let expected = (10 * report.high.len() + 5 * report.medium.len() + report.low.len())
            .min(100) as u32;
        prop_assert_eq!(report.composite_score, expected);
        prop_assert_eq!(
            report.composite_score,
            composite_score(report.high.len(), report.medium.len(), report.low.len())
        );
        prop_assert!(report.composite_score <= 100);
        prop_assert_eq!(report.level, RiskLevel::from_score(report.composite_score));
        prop_assert_eq!(report.recommendation.as_str(), report.level.recommendation());
    }

    /// Property: scoring never panics on arbitrary unicode
    #[test]
    fn scoring_arbitrary_text_no_panic(text in "\\PC*") {
        let report = score_risks(&text, None);
        prop_assert!(report.composite_score <= 100);
        for finding in report.high.iter().chain(&report.medium).chain(&report.low) {
            prop_assert!(finding.context.contains(&finding.matched_text));
            prop_assert!(finding.position <= text.chars().count());
        }
    }

    /// Property: fragments are trimmed, non-empty, disjoint and in source order
    #[test]
    fn sentence_fragments_are_ordered_and_trimmed(text in "\\PC{0,300}") {
        let fragments = split_sentences(&text);
        let mut cursor = 0usize;
        for fragment in fragments {
            prop_assert!(!fragment.is_empty());
            prop_assert_eq!(fragment, fragment.trim());
            let offset = fragment.as_ptr() as usize - text.as_ptr() as usize;
            prop_assert!(offset >= cursor);
            cursor = offset + fragment.len();
        }
    }

    /// Property: a sentence lands in at most one class
    #[test]
    fn classified_sentences_are_exclusive(text in contract_text()) {
        let classified = classify_clauses(&text);
        let total = split_sentences(&text).len();
        prop_assert!(classified.len() <= total);
        for sentence in &classified.prohibitions {
            let lower = sentence.to_lowercase();
            prop_assert!(
                ["shall not", "must not", "prohibited from", "restricted from"]
                    .iter()
                    .any(|m| lower.contains(m))
            );
        }
        prop_assert!(classified.of_kind(ClauseKind::Obligation).len() <= total);
    }

    /// Property: both markers present → prohibition only
    #[test]
    fn prohibition_beats_obligation(subject in "[A-Z][a-z]{2,10}", verb in "[a-z]{3,10}") {
        let text = format!("{} shall not {} and must {} again.", subject, verb, verb);
        let classified = classify_clauses(&text);
        prop_assert_eq!(classified.prohibitions.len(), 1);
        prop_assert!(classified.obligations.is_empty());
        prop_assert!(classified.rights.is_empty());
    }

    /// Property: every component is deterministic
    #[test]
    fn analysis_is_idempotent(text in contract_text()) {
        prop_assert_eq!(analyze(&text), analyze(&text));
        prop_assert_eq!(extract_entities(&text), extract_entities(&text));
        prop_assert_eq!(detect_ambiguous_terms(&text), detect_ambiguous_terms(&text));
    }

    /// Property: compliance order never depends on content
    #[test]
    fn compliance_order_is_fixed(text in "\\PC{0,200}") {
        let elements: Vec<_> = check_compliance(&text, ContractType::General)
            .into_iter()
            .map(|r| r.element)
            .collect();
        prop_assert_eq!(
            elements,
            vec!["consideration", "free_consent", "competent_parties", "lawful_object"]
        );
    }

    /// Property: entity categories are always present
    #[test]
    fn entity_categories_always_present(text in "\\PC{0,200}") {
        let bundle = extract_entities(&text);
        for category in ["organizations", "party", "amount", "date", "duration"] {
            prop_assert!(bundle.get(category).is_some());
        }
    }

    /// Property: one ambiguity flag per sentence with a vague term, never more
    #[test]
    fn ambiguity_flags_at_most_one_per_sentence(text in contract_text()) {
        let flags = detect_ambiguous_terms(&text);
        prop_assert!(flags.len() <= split_sentences(&text).len());
        for flag in flags {
            prop_assert!(!flag.terms.is_empty());
            let mut terms = flag.terms.clone();
            terms.dedup();
            prop_assert_eq!(terms.len(), flag.terms.len());
        }
    }
}

#[test]
fn scenario_payment_and_disclosure() {
    let text = "Party A shall pay Rs. 50,000 within 30 days. \
                Party A shall not disclose confidential information.";
    let result = analyze(text);

    assert!(result
        .classified
        .obligations
        .iter()
        .any(|s| s.starts_with("Party A shall pay")));
    assert_eq!(
        result.classified.prohibitions,
        vec!["Party A shall not disclose confidential information"]
    );
    assert!(result
        .entities
        .values("amount")
        .any(|v| v.starts_with("Rs.") && v.contains("50,000")));
    assert!(result.entities.values("duration").any(|v| v == "30 days"));
}

#[test]
fn scenario_compliance_all_missing() {
    let results = check_compliance("Nothing relevant here.", ContractType::General);
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| !r.is_present()));
    assert!(results
        .iter()
        .all(|r| r.note.as_deref().is_some_and(|n| !n.is_empty())));
}

#[test]
fn scenario_exported_record_has_stable_field_names() {
    let json = serde_json::to_value(analyze("The Company may terminate at will.")).unwrap();
    assert_eq!(json["risks"]["high"][0]["category"], "unilateral_termination");
    assert!(json["classified"]["rights"].is_array());
    assert!(json["entities"]["organizations"].is_array());
    assert!(json["ambiguous"].is_array());
    assert_eq!(json["compliance"][0]["element"], "consideration");
}
