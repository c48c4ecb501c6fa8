//! Common types for document decoding

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Declared format of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pdf,
    Docx,
    #[serde(rename = "txt")]
    Text,
}

impl DocumentType {
    pub const SUPPORTED_EXTENSIONS: [&'static str; 3] = ["pdf", "docx", "txt"];

    /// Unknown extensions decode as plain text
    pub fn from_extension(extension: &str) -> Self {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => DocumentType::Pdf,
            "docx" => DocumentType::Docx,
            _ => DocumentType::Text,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DocumentType::Text)
    }

    /// True for `.pdf`, `.docx` and `.txt` file names
    pub fn is_supported(file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                Self::SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
            })
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentType::Pdf => "pdf",
            DocumentType::Docx => "docx",
            DocumentType::Text => "txt",
        }
    }

    /// Text used when every backend failed
    pub fn failure_placeholder(self) -> &'static str {
        match self {
            DocumentType::Pdf => "Could not extract text from PDF",
            DocumentType::Docx => "Error reading Word document",
            DocumentType::Text => "Error reading text file",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DocumentType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentType::Pdf),
            "docx" => Ok(DocumentType::Docx),
            "txt" | "text" => Ok(DocumentType::Text),
            other => Err(DecodeError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Errors raised by individual decoding backends
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Word archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Text encoding error: {0}")]
    Encoding(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("No decoding backend configured")]
    NoBackend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_defaults_to_text() {
        assert_eq!(DocumentType::from_extension("PDF"), DocumentType::Pdf);
        assert_eq!(DocumentType::from_extension(".docx"), DocumentType::Docx);
        assert_eq!(DocumentType::from_extension("md"), DocumentType::Text);
        assert_eq!(DocumentType::from_path("notes"), DocumentType::Text);
        assert_eq!(DocumentType::from_path("dir/lease.Pdf"), DocumentType::Pdf);
    }

    #[test]
    fn test_is_supported() {
        assert!(DocumentType::is_supported("contract.pdf"));
        assert!(DocumentType::is_supported("CONTRACT.DOCX"));
        assert!(DocumentType::is_supported("notes.txt"));
        assert!(!DocumentType::is_supported("contract.doc"));
        assert!(!DocumentType::is_supported("contract"));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!("txt".parse::<DocumentType>().unwrap(), DocumentType::Text);
        assert!(matches!(
            "rtf".parse::<DocumentType>(),
            Err(DecodeError::UnsupportedFormat(f)) if f == "rtf"
        ));
    }
}
