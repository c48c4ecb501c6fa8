//! Entity extraction: runs every entity pattern of the catalog over the full text

use contract_types::EntityBundle;
use regex::Regex;

use crate::patterns::{catalog, PatternCatalog};

/// Extract entities with the built-in catalog
pub fn extract_entities(text: &str) -> EntityBundle {
    extract_entities_with(catalog(), text)
}

/// Extract organizations and every catalog entity category.
///
/// Every category of the catalog is present in the result, empty when nothing matched.
pub fn extract_entities_with(catalog: &PatternCatalog, text: &str) -> EntityBundle {
    let mut bundle = EntityBundle::with_categories(catalog.entity_categories());

    for m in catalog.organization.find_iter(text) {
        bundle.insert(EntityBundle::ORGANIZATIONS, m.as_str());
    }

    for category in &catalog.entities {
        for pattern in &category.patterns {
            for value in pattern_matches(pattern, text) {
                bundle.insert(&category.name, value);
            }
        }
    }

    tracing::debug!(total = bundle.total(), "extracted entities");
    bundle
}

/// Matches of one pattern: the whole match, or the non-empty capture groups when the
/// pattern declares two or more groups
fn pattern_matches<'t>(pattern: &Regex, text: &'t str) -> Vec<&'t str> {
    // captures_len counts the implicit whole-match group
    if pattern.captures_len() <= 2 {
        return pattern.find_iter(text).map(|m| m.as_str()).collect();
    }

    pattern
        .captures_iter(text)
        .flat_map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(bundle: &EntityBundle, category: &str) -> Vec<String> {
        bundle.values(category).map(str::to_string).collect()
    }

    #[test]
    fn test_empty_text_yields_every_category() {
        let bundle = extract_entities("");
        let categories: Vec<_> = bundle.categories().collect();
        assert_eq!(
            categories,
            vec!["amount", "date", "duration", "organizations", "party"]
        );
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_extracts_amount_and_duration() {
        let text = "Party A shall pay Rs. 50,000 within 30 days.";
        let bundle = extract_entities(text);
        assert!(bundle.contains("amount", "Rs. 50,000"));
        assert!(bundle.contains("duration", "30 days"));
    }

    #[test]
    fn test_extracts_organizations_with_suffix() {
        let text = "This agreement between Acme Widgets Pvt and Globex Corp is binding.";
        let bundle = extract_entities(text);
        assert_eq!(
            values(&bundle, "organizations"),
            vec!["Acme Widgets Pvt", "Globex Corp"]
        );
    }

    #[test]
    fn test_multi_group_pattern_contributes_groups() {
        let text = r#"Sunrise Traders, hereinafter referred to as "the Supplier", agrees."#;
        let bundle = extract_entities(text);
        assert!(bundle.contains("party", "the Supplier"));
        assert!(bundle.contains("party", "hereinafter referred to as"));
        assert!(!bundle.contains("party", r#"hereinafter referred to as "the Supplier""#));
    }

    #[test]
    fn test_duplicates_collapse_within_category() {
        let text = "Pay Rs. 500 today and Rs. 500 tomorrow, then 500 Rs. later.";
        let bundle = extract_entities(text);
        assert_eq!(values(&bundle, "amount"), vec!["Rs. 500"]);
    }

    #[test]
    fn test_dates_in_both_formats() {
        let text = "Signed on 12/04/2024 and effective from March 5, 2024";
        let bundle = extract_entities(text);
        assert_eq!(
            values(&bundle, "date"),
            vec!["12/04/2024", "March 5, 2024"]
        );
    }

    #[test]
    fn test_rupee_symbol_and_indian_units() {
        let text = "A fee of ₹ 1,200.50 and a bonus of 2 lakh";
        let bundle = extract_entities(text);
        assert!(bundle.contains("amount", "₹ 1,200.50"));
        assert!(bundle.contains("amount", "2 lakh"));
    }

    #[test]
    fn test_custom_catalog_category_appears() {
        let catalog = PatternCatalog::from_tables(
            crate::patterns::ORGANIZATION_PATTERN,
            &[("email", &[r"[a-z]+@[a-z]+\.com"])],
            &[],
            &[],
        )
        .unwrap();
        let bundle = extract_entities_with(&catalog, "write to legal@acme.com");
        assert_eq!(values(&bundle, "email"), vec!["legal@acme.com"]);
        assert!(bundle.get("amount").is_none());
    }
}
