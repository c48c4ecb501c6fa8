/// Text decoded from an uploaded contract, immutable once produced
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawDocument {
    pub raw_text: String,
    pub sections: Vec<Section>,
    pub metadata: DocumentMetadata,
}

impl RawDocument {
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            metadata: self.metadata.clone(),
            sections: self.sections.clone(),
        }
    }

    /// True when decoding failed and `raw_text` holds a placeholder
    pub fn is_degraded(&self) -> bool {
        self.metadata.error.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>, // Decoder that produced the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A detected heading such as "Article 4" or "Payment"
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub header: String,
    pub position: usize, // Character offset in raw_text
}

/// Document context carried into the export record without the raw text
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DocumentSummary {
    pub metadata: DocumentMetadata,
    pub sections: Vec<Section>,
}
