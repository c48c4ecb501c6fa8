//! Decoding entry points: read, pick the backend chain, degrade to placeholder text

use std::path::Path;

use contract_types::{DocumentMetadata, RawDocument};

use crate::backend::BackendChain;
use crate::docx::DocxBackend;
use crate::pdf::{LopdfBackend, PdfExtractBackend};
use crate::sections::detect_sections;
use crate::text::{Latin1Backend, Utf8Backend};
use crate::types::{DecodeError, DocumentType};

/// Replaces blank text from a PDF that otherwise decoded fine
pub const BLANK_PDF_PLACEHOLDER: &str = "No text extracted from PDF";

/// Backends for a format, in the order they are tried
pub fn backend_chain(document_type: DocumentType) -> BackendChain {
    match document_type {
        DocumentType::Pdf => BackendChain::new(vec![
            Box::new(PdfExtractBackend),
            Box::new(LopdfBackend),
        ]),
        DocumentType::Docx => BackendChain::new(vec![Box::new(DocxBackend)]),
        DocumentType::Text => {
            BackendChain::new(vec![Box::new(Utf8Backend), Box::new(Latin1Backend)])
        }
    }
}

/// Decode a file. Never fails: unreadable files yield placeholder text.
pub fn decode(path: impl AsRef<Path>, document_type: DocumentType) -> RawDocument {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(data) => decode_bytes(&data, document_type),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not read document");
            placeholder(document_type, DecodeError::Io(err))
        }
    }
}

/// Decode an in-memory upload. Never fails: undecodable data yields placeholder text.
pub fn decode_bytes(data: &[u8], document_type: DocumentType) -> RawDocument {
    let chain = backend_chain(document_type);

    match chain.decode(data) {
        Ok((decoded, backend)) => {
            let mut raw_text = decoded.text;
            if document_type == DocumentType::Pdf && raw_text.trim().is_empty() {
                raw_text = BLANK_PDF_PLACEHOLDER.to_string();
            }
            tracing::info!(
                backend,
                %document_type,
                chars = raw_text.len(),
                "decoded document"
            );

            RawDocument {
                sections: detect_sections(&raw_text),
                raw_text,
                metadata: DocumentMetadata {
                    pages: decoded.pages,
                    paragraphs: decoded.paragraphs,
                    backend: Some(backend.to_string()),
                    error: None,
                },
            }
        }
        Err(err) => {
            tracing::warn!(%document_type, error = %err, "all decoder backends failed");
            placeholder(document_type, err)
        }
    }
}

fn placeholder(document_type: DocumentType, err: DecodeError) -> RawDocument {
    RawDocument {
        raw_text: document_type.failure_placeholder().to_string(),
        sections: Vec::new(),
        metadata: DocumentMetadata {
            error: Some(err.to_string()),
            ..Default::default()
        },
    }
}
