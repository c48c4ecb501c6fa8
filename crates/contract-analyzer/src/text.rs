//! Sentence splitting and offset helpers shared by the analysis components

use crate::patterns::SENTENCE_BOUNDARY;

/// Split text on runs of `.`, `!` or `?`, trimming each fragment and dropping empty ones.
///
/// No abbreviation handling: "Rs. 500" splits after "Rs".
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Character offset of a byte index that lies on a char boundary
pub fn char_offset(text: &str, byte_index: usize) -> usize {
    text[..byte_index].chars().count()
}

/// Text from `radius` characters before `start` to `radius` characters after `end`,
/// clamped to the text bounds. `start` and `end` are byte indices on char boundaries.
pub fn extract_context(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}

/// True if any marker occurs in the (already lower-cased) text
pub fn contains_any(text_lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text_lower.contains(marker))
}
