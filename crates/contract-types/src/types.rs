use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};

use crate::document::{DocumentSummary, RawDocument};

/// Extracted entities keyed by category name (`organizations`, `party`, `amount`, ...).
///
/// Values are unique per category. Categories are never removed once created, so an
/// extractor that seeds every category up front yields empty sets rather than missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EntityBundle(BTreeMap<String, BTreeSet<String>>);

impl EntityBundle {
    pub const ORGANIZATIONS: &'static str = "organizations";

    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle with every given category present and empty
    pub fn with_categories<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        let mut bundle = Self::new();
        for category in categories {
            bundle.ensure_category(category);
        }
        bundle
    }

    pub fn ensure_category(&mut self, category: &str) {
        self.0.entry(category.to_string()).or_default();
    }

    /// Returns true if the value was not already present in the category
    pub fn insert(&mut self, category: &str, value: impl Into<String>) -> bool {
        self.0
            .entry(category.to_string())
            .or_default()
            .insert(value.into())
    }

    pub fn get(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.0.get(category)
    }

    /// Values of a category, empty if the category is absent
    pub fn values<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .get(category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn organizations(&self) -> impl Iterator<Item = &str> {
        self.values(Self::ORGANIZATIONS)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn contains(&self, category: &str, value: &str) -> bool {
        self.0.get(category).is_some_and(|set| set.contains(value))
    }

    /// Total number of values across all categories
    pub fn total(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    /// True when no category holds a value (categories may still be present)
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClauseKind {
    Obligation,
    Right,
    Prohibition,
}

/// Sentences tagged by clause kind, each list in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassifiedClauses {
    pub obligations: Vec<String>,
    pub rights: Vec<String>,
    pub prohibitions: Vec<String>,
}

impl ClassifiedClauses {
    pub fn push(&mut self, kind: ClauseKind, sentence: impl Into<String>) {
        let sentence = sentence.into();
        match kind {
            ClauseKind::Obligation => self.obligations.push(sentence),
            ClauseKind::Right => self.rights.push(sentence),
            ClauseKind::Prohibition => self.prohibitions.push(sentence),
        }
    }

    pub fn of_kind(&self, kind: ClauseKind) -> &[String] {
        match kind {
            ClauseKind::Obligation => &self.obligations,
            ClauseKind::Right => &self.rights,
            ClauseKind::Prohibition => &self.prohibitions,
        }
    }

    pub fn len(&self) -> usize {
        self.obligations.len() + self.rights.len() + self.prohibitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AmbiguityFlag {
    pub sentence: String,
    pub terms: Vec<String>, // In vague-term declaration order, no duplicates
    pub concern: String,
}

/// Risk tier of a catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    High,
    Medium,
    Low,
}

impl RiskSeverity {
    pub const ALL: [RiskSeverity; 3] = [RiskSeverity::High, RiskSeverity::Medium, RiskSeverity::Low];

    /// Contribution of a single finding to the composite score
    pub fn weight(self) -> u32 {
        match self {
            RiskSeverity::High => 10,
            RiskSeverity::Medium => 5,
            RiskSeverity::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskSeverity::High => "high",
            RiskSeverity::Medium => "medium",
            RiskSeverity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RiskFinding {
    pub category: String,
    pub matched_text: String,
    pub context: String,  // Up to 50 characters either side of the match
    pub position: usize,  // Character offset of the match start
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "LOW RISK")]
    Low,
    #[serde(rename = "MEDIUM RISK")]
    Medium,
    #[serde(rename = "HIGH RISK")]
    High,
}

impl RiskLevel {
    pub const MAX_SCORE: u32 = 100;

    /// Verdict for a composite score; both thresholds are strict
    pub fn from_score(score: u32) -> Self {
        if score > 60 {
            RiskLevel::High
        } else if score > 30 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            RiskLevel::High => "Immediate legal review recommended",
            RiskLevel::Medium => "Review and negotiate key clauses",
            RiskLevel::Low => "Standard contract with minor concerns",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RiskReport {
    pub high: Vec<RiskFinding>,
    pub medium: Vec<RiskFinding>,
    pub low: Vec<RiskFinding>,
    pub composite_score: u32,
    pub level: RiskLevel,
    pub recommendation: String,
}

impl RiskReport {
    /// Builds a report whose score, level and recommendation follow from the findings
    pub fn from_findings(
        high: Vec<RiskFinding>,
        medium: Vec<RiskFinding>,
        low: Vec<RiskFinding>,
    ) -> Self {
        let composite_score = composite_score(high.len(), medium.len(), low.len());
        let level = RiskLevel::from_score(composite_score);
        Self {
            high,
            medium,
            low,
            composite_score,
            level,
            recommendation: level.recommendation().to_string(),
        }
    }

    pub fn findings(&self, severity: RiskSeverity) -> &[RiskFinding] {
        match severity {
            RiskSeverity::High => &self.high,
            RiskSeverity::Medium => &self.medium,
            RiskSeverity::Low => &self.low,
        }
    }

    pub fn total_findings(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }
}

impl Default for RiskReport {
    fn default() -> Self {
        Self::from_findings(Vec::new(), Vec::new(), Vec::new())
    }
}

/// `min(100, 10·high + 5·medium + 1·low)`
pub fn composite_score(high: usize, medium: usize, low: usize) -> u32 {
    let weighted = [
        (RiskSeverity::High, high),
        (RiskSeverity::Medium, medium),
        (RiskSeverity::Low, low),
    ]
    .iter()
    .fold(0u64, |acc, (severity, count)| {
        acc.saturating_add(u64::from(severity.weight()).saturating_mul(*count as u64))
    });
    weighted.min(u64::from(RiskLevel::MAX_SCORE)) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceStatus {
    Present,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceSeverity {
    High,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComplianceResult {
    pub element: String,
    pub status: ComplianceStatus,
    pub severity: ComplianceSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>, // Only set when the element is missing
}

impl ComplianceResult {
    pub fn present(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            status: ComplianceStatus::Present,
            severity: ComplianceSeverity::None,
            note: None,
        }
    }

    pub fn missing(element: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            status: ComplianceStatus::Missing,
            severity: ComplianceSeverity::High,
            note: Some(note.into()),
        }
    }

    pub fn is_present(&self) -> bool {
        self.status == ComplianceStatus::Present
    }
}

/// Contract families the narrative classifier can assign
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ContractType {
    #[default]
    #[serde(rename = "General")]
    General,
    #[serde(rename = "Employment Agreement")]
    Employment,
    #[serde(rename = "Vendor/Supplier Contract")]
    VendorSupplier,
    #[serde(rename = "Service Agreement")]
    Service,
    #[serde(rename = "Lease Agreement")]
    Lease,
    #[serde(rename = "Partnership Deed")]
    Partnership,
    #[serde(rename = "NDA/Confidentiality Agreement")]
    Confidentiality,
    #[serde(rename = "Sales Agreement")]
    Sales,
    #[serde(rename = "Consulting Agreement")]
    Consulting,
    #[serde(rename = "Other")]
    Other,
}

impl ContractType {
    /// Categories offered to the classifier, in prompt order
    pub const CLASSIFIABLE: [ContractType; 9] = [
        ContractType::Employment,
        ContractType::VendorSupplier,
        ContractType::Service,
        ContractType::Lease,
        ContractType::Partnership,
        ContractType::Confidentiality,
        ContractType::Sales,
        ContractType::Consulting,
        ContractType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContractType::General => "General",
            ContractType::Employment => "Employment Agreement",
            ContractType::VendorSupplier => "Vendor/Supplier Contract",
            ContractType::Service => "Service Agreement",
            ContractType::Lease => "Lease Agreement",
            ContractType::Partnership => "Partnership Deed",
            ContractType::Confidentiality => "NDA/Confidentiality Agreement",
            ContractType::Sales => "Sales Agreement",
            ContractType::Consulting => "Consulting Agreement",
            ContractType::Other => "Other",
        }
    }

    /// Maps free text (a CLI flag or a model reply) onto a contract type.
    /// Matches the full label first, then its leading word; anything else is `Other`.
    pub fn from_label(label: &str) -> Self {
        let wanted = label.trim().trim_matches(|c| c == '"' || c == '*').to_lowercase();
        if wanted.is_empty() || wanted == "general" {
            return ContractType::General;
        }
        let by_label = Self::CLASSIFIABLE
            .iter()
            .find(|t| wanted.contains(&t.label().to_lowercase()));
        if let Some(found) = by_label {
            return *found;
        }
        Self::CLASSIFIABLE
            .iter()
            .find(|t| {
                t.label()
                    .split(|c: char| c == ' ' || c == '/')
                    .next()
                    .is_some_and(|head| wanted.starts_with(&head.to_lowercase()))
            })
            .copied()
            .unwrap_or(ContractType::Other)
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Combined output of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub entities: EntityBundle,
    pub classified: ClassifiedClauses,
    pub ambiguous: Vec<AmbiguityFlag>,
    pub risks: RiskReport,
    pub compliance: Vec<ComplianceResult>,
}

/// Export record: the analysis plus the context it was produced in
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    pub filename: String,
    pub timestamp: DateTime<Utc>,
    pub contract_type: ContractType,
    pub summary: String,
    pub document: DocumentSummary,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

impl AnalysisReport {
    /// Report stamped with the current time
    pub fn new(
        filename: impl Into<String>,
        contract_type: ContractType,
        summary: impl Into<String>,
        document: &RawDocument,
        analysis: AnalysisResult,
    ) -> Self {
        Self {
            filename: filename.into(),
            timestamp: Utc::now(),
            contract_type,
            summary: summary.into(),
            document: document.summary(),
            analysis,
        }
    }

    /// Download name, e.g. `contract_analysis_20240131_154500.json`
    pub fn export_file_name(&self) -> String {
        format!(
            "contract_analysis_{}.json",
            self.timestamp.format("%Y%m%d_%H%M%S")
        )
    }
}
