//! Section heading detection

use contract_types::Section;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Numbered headings ("Article 4", "Clause 12"), then well-known section names
    static ref SECTION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(article|section|clause)\s+(\d+)").unwrap(),
        Regex::new(r"(?i)(parties|definitions|scope|term|payment|liability)").unwrap(),
    ];
}

/// Minimum text length (in characters) worth scanning
const MIN_TEXT_CHARS: usize = 10;

/// Every heading match, grouped by pattern and ordered by position within each group
pub fn detect_sections(text: &str) -> Vec<Section> {
    if text.chars().count() < MIN_TEXT_CHARS {
        return Vec::new();
    }

    SECTION_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(text))
        .map(|m| Section {
            header: m.as_str().to_string(),
            position: text[..m.start()].chars().count(),
        })
        .collect()
}
