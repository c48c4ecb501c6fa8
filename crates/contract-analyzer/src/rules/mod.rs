pub mod compliance;
pub mod risk;

pub use compliance::{check_compliance, check_compliance_with};
pub use risk::{score_risks, score_risks_with, CONTEXT_RADIUS};
