//! Essential-element checks under Section 10 of the Indian Contract Act, 1872

use contract_types::{ComplianceResult, ContractType};

use crate::patterns::{catalog, PatternCatalog};

/// Check with the built-in catalog
pub fn check_compliance(text: &str, contract_type: ContractType) -> Vec<ComplianceResult> {
    check_compliance_with(catalog(), text, contract_type)
}

/// One result per catalog element, in declaration order.
///
/// The same generic rule set applies to every contract type.
pub fn check_compliance_with(
    catalog: &PatternCatalog,
    text: &str,
    contract_type: ContractType,
) -> Vec<ComplianceResult> {
    let results: Vec<_> = catalog
        .compliance
        .iter()
        .map(|element| {
            if element.pattern.is_match(text) {
                ComplianceResult::present(&element.name)
            } else {
                ComplianceResult::missing(&element.name, missing_note(&element.name))
            }
        })
        .collect();

    tracing::debug!(
        contract_type = %contract_type,
        missing = results.iter().filter(|r| !r.is_present()).count(),
        "checked compliance"
    );
    results
}

fn missing_note(element: &str) -> String {
    format!(
        "Contract should explicitly mention {} as per Section 10, Indian Contract Act",
        element
    )
}
