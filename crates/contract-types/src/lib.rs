pub mod document;
pub mod types;

pub use document::{DocumentMetadata, DocumentSummary, RawDocument, Section};
pub use types::{
    composite_score, AmbiguityFlag, AnalysisReport, AnalysisResult, ClassifiedClauses, ClauseKind,
    ComplianceResult, ComplianceSeverity, ComplianceStatus, ContractType, EntityBundle,
    RiskFinding, RiskLevel, RiskReport, RiskSeverity,
};
