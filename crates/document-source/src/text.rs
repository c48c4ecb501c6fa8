//! Plain-text backends: strict UTF-8, then Latin-1

use crate::backend::{DecodedText, DocumentBackend};
use crate::types::DecodeError;

pub struct Utf8Backend;

impl DocumentBackend for Utf8Backend {
    fn name(&self) -> &'static str {
        "utf-8"
    }

    fn decode(&self, data: &[u8]) -> Result<DecodedText, DecodeError> {
        let text = std::str::from_utf8(data).map_err(|e| DecodeError::Encoding(e.to_string()))?;
        Ok(DecodedText::new(text.strip_prefix('\u{feff}').unwrap_or(text)))
    }
}

/// Maps every byte to the code point of the same value, so it cannot fail
pub struct Latin1Backend;

impl DocumentBackend for Latin1Backend {
    fn name(&self) -> &'static str {
        "latin-1"
    }

    fn decode(&self, data: &[u8]) -> Result<DecodedText, DecodeError> {
        Ok(DecodedText::new(
            data.iter().map(|&b| char::from(b)).collect::<String>(),
        ))
    }
}
