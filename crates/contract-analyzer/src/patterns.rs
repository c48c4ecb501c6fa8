//! Pattern catalog: the regex and keyword tables every analysis component reads
//!
//! The tables are plain data. Adding a risk category or an entity pattern means adding an
//! entry here; extraction and scoring iterate the tables and need no change.

use contract_types::RiskSeverity;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CatalogError;

/// Organization names ending in a corporate suffix
pub const ORGANIZATION_PATTERN: &str =
    r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:Ltd|Limited|Inc|Corp|Company|Pvt)\b";

/// Entity categories and their alternative patterns.
/// Patterns with two or more capture groups contribute their non-empty groups
/// instead of the whole match.
pub const ENTITY_PATTERNS: &[(&str, &[&str])] = &[
    (
        "party",
        &[
            r"(?i)(party|company|firm|organization)\s+[A-Z][a-zA-Z\s&,\.]+",
            r#"(?i)(hereinafter referred to as|referred to as)\s+"([^"]+)""#,
        ],
    ),
    (
        "amount",
        &[
            r"(?i)(rs\.?|inr|rupees)\s*[\d,]+(?:\.\d{2})?",
            r"₹\s*[\d,]+(?:\.\d{2})?",
            r"(?i)\d+\s*(lakh|crore|thousand)",
        ],
    ),
    (
        "date",
        &[
            r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}",
            r"(?i)(january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},?\s+\d{4}",
        ],
    ),
    (
        "duration",
        &[
            r"(?i)\d+\s*(days?|weeks?|months?|years?)",
            r"(?i)(term of|period of)\s+\d+\s*(days?|months?|years?)",
        ],
    ),
];

pub type RiskCategoryTable = &'static [(&'static str, &'static [&'static str])];

/// Risk categories by tier, scanned high → medium → low
pub const RISK_PATTERNS: &[(RiskSeverity, RiskCategoryTable)] = &[
    (
        RiskSeverity::High,
        &[
            (
                "unlimited_liability",
                &[
                    r"(?i)unlimited\s+liability",
                    r"(?i)without\s+any\s+limit",
                    r"(?i)entire\s+liability",
                ],
            ),
            (
                "unilateral_termination",
                &[
                    r"(?i)(party\s+[AB]|company|first\s+party)\s+may\s+terminate.*without\s+(notice|cause)",
                    r"(?i)terminate\s+at\s+will",
                    r"(?i)sole\s+discretion.*terminate",
                ],
            ),
            (
                "ip_transfer",
                &[
                    r"(?i)all\s+intellectual\s+property.*transferred",
                    r"(?i)ownership.*vests.*exclusively",
                    r"(?i)irrevocable.*assignment.*ip",
                ],
            ),
            (
                "non_compete_broad",
                &[
                    r"(?i)non-compete.*\d+\s+(years|year)",
                    r"(?i)not\s+engage.*competing.*business",
                    r"(?i)restricted.*similar.*activity",
                ],
            ),
        ],
    ),
    (
        RiskSeverity::Medium,
        &[
            (
                "auto_renewal",
                &[
                    r"(?i)automatically\s+renewed?",
                    r"(?i)auto-renewal",
                    r"(?i)unless.*notice.*\d+\s+days.*renew",
                ],
            ),
            (
                "penalty_clause",
                &[
                    r"(?i)penalty.*₹?\d+",
                    r"(?i)liquidated\s+damages",
                    r"(?i)shall\s+pay.*breach",
                ],
            ),
            (
                "jurisdiction_limited",
                &[
                    r"(?i)exclusive\s+jurisdiction",
                    r"(?i)courts?\s+at\s+\w+\s+only",
                    r"(?i)subject\s+to.*jurisdiction.*\w+",
                ],
            ),
            (
                "indemnity_broad",
                &[
                    r"(?i)indemnify.*hold\s+harmless",
                    r"(?i)defend.*against\s+any\s+claims?",
                    r"(?i)indemnification.*losses",
                ],
            ),
        ],
    ),
    (
        RiskSeverity::Low,
        &[
            (
                "notice_period",
                &[r"(?i)\d+\s+days?\s+notice", r"(?i)notice\s+period.*\d+"],
            ),
            (
                "confidentiality",
                &[r"(?i)confidential\s+information", r"(?i)non-disclosure"],
            ),
        ],
    ),
];

/// Essential elements of a valid contract (Section 10, Indian Contract Act, 1872)
pub const COMPLIANCE_PATTERNS: &[(&str, &str)] = &[
    (
        "consideration",
        r"(?i)(consideration|valuable\s+consideration|monetary|payment)",
    ),
    (
        "free_consent",
        r"(?i)(consent|agree|acceptance|mutual\s+understanding)",
    ),
    (
        "competent_parties",
        r"(?i)(major|age\s+of\s+majority|sound\s+mind|competent)",
    ),
    (
        "lawful_object",
        r"(?i)(lawful\s+purpose|legal\s+object|legitimate)",
    ),
];

/// Clause markers, checked prohibition → obligation → right
pub const PROHIBITION_MARKERS: &[&str] =
    &["shall not", "must not", "prohibited from", "restricted from"];

pub const OBLIGATION_MARKERS: &[&str] =
    &["shall", "must", "required to", "obligated to", "agrees to"];

pub const RIGHT_MARKERS: &[&str] = &["may", "entitled to", "has the right to", "permitted to"];

/// Vague or hedging terms
pub const VAGUE_TERMS: &[&str] = &[
    "reasonable",
    "appropriate",
    "as soon as possible",
    "promptly",
    "substantial",
    "material",
    "best efforts",
    "good faith",
    "approximately",
    "around",
    "may",
    "might",
    "could",
];

pub const AMBIGUITY_CONCERN: &str = "Vague language may lead to disputes";

/// Sentence boundary: one or more of `.`, `!`, `?`
pub const SENTENCE_BOUNDARY_PATTERN: &str = r"[.!?]+";

/// A named entity category with its compiled alternatives
#[derive(Debug, Clone)]
pub struct EntityCategory {
    pub name: String,
    pub patterns: Vec<Regex>,
}

/// A named risk category within one severity tier
#[derive(Debug, Clone)]
pub struct RiskCategory {
    pub severity: RiskSeverity,
    pub name: String,
    pub patterns: Vec<Regex>,
}

#[derive(Debug, Clone)]
pub struct ComplianceElement {
    pub name: String,
    pub pattern: Regex,
}

/// Compiled form of the tables above
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    pub organization: Regex,
    pub entities: Vec<EntityCategory>,
    pub risks: Vec<RiskCategory>, // Tier order, then declaration order
    pub compliance: Vec<ComplianceElement>,
}

impl PatternCatalog {
    /// Compile the built-in tables
    pub fn compile() -> Result<Self, CatalogError> {
        Self::from_tables(
            ORGANIZATION_PATTERN,
            ENTITY_PATTERNS,
            RISK_PATTERNS,
            COMPLIANCE_PATTERNS,
        )
    }

    /// Compile custom tables with the same shape as the built-in ones
    pub fn from_tables(
        organization: &str,
        entities: &[(&str, &[&str])],
        risks: &[(RiskSeverity, &[(&str, &[&str])])],
        compliance: &[(&str, &str)],
    ) -> Result<Self, CatalogError> {
        let organization = compile_pattern("organizations", organization)?;

        let entities = entities
            .iter()
            .map(|(name, patterns)| {
                Ok(EntityCategory {
                    name: name.to_string(),
                    patterns: compile_all(name, patterns)?,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let mut risk_categories = Vec::new();
        for severity in RiskSeverity::ALL {
            for (tier, categories) in risks.iter().filter(|(tier, _)| *tier == severity) {
                for (name, patterns) in categories.iter() {
                    risk_categories.push(RiskCategory {
                        severity: *tier,
                        name: name.to_string(),
                        patterns: compile_all(name, patterns)?,
                    });
                }
            }
        }

        let compliance = compliance
            .iter()
            .map(|(name, pattern)| {
                Ok(ComplianceElement {
                    name: name.to_string(),
                    pattern: compile_pattern(name, pattern)?,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self {
            organization,
            entities,
            risks: risk_categories,
            compliance,
        })
    }

    /// Entity category names, organizations first
    pub fn entity_categories(&self) -> impl Iterator<Item = &str> {
        std::iter::once(contract_types::EntityBundle::ORGANIZATIONS)
            .chain(self.entities.iter().map(|c| c.name.as_str()))
    }

    pub fn risk_categories(&self, severity: RiskSeverity) -> impl Iterator<Item = &RiskCategory> {
        self.risks.iter().filter(move |c| c.severity == severity)
    }
}

fn compile_pattern(category: &str, pattern: &str) -> Result<Regex, CatalogError> {
    Regex::new(pattern).map_err(|source| CatalogError::InvalidPattern {
        category: category.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

fn compile_all(category: &str, patterns: &[&str]) -> Result<Vec<Regex>, CatalogError> {
    patterns
        .iter()
        .map(|pattern| compile_pattern(category, pattern))
        .collect()
}

lazy_static! {
    static ref BUILTIN_CATALOG: Result<PatternCatalog, CatalogError> = PatternCatalog::compile();

    static ref EMPTY_CATALOG: PatternCatalog = PatternCatalog {
        organization: Regex::new(r"\b\B").unwrap(),
        entities: Vec::new(),
        risks: Vec::new(),
        compliance: Vec::new(),
    };

    pub static ref SENTENCE_BOUNDARY: Regex = Regex::new(SENTENCE_BOUNDARY_PATTERN).unwrap();
}

/// Compile the built-in catalog once and report any malformed pattern.
///
/// Binaries call this at startup; a failure here is fatal.
pub fn validate_catalog() -> Result<&'static PatternCatalog, CatalogError> {
    BUILTIN_CATALOG.as_ref().map_err(Clone::clone)
}

/// The built-in catalog.
///
/// Falls back to a catalog that matches nothing if the built-in tables failed to
/// compile, which `validate_catalog` surfaces at startup.
pub fn catalog() -> &'static PatternCatalog {
    match BUILTIN_CATALOG.as_ref() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!("Pattern catalog failed to compile: {}", err);
            &EMPTY_CATALOG
        }
    }
}
