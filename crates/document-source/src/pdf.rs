//! PDF backends: pdf-extract first, raw lopdf page extraction as the fallback

use crate::backend::{DecodedText, DocumentBackend};
use crate::types::DecodeError;

/// Separator placed between page texts
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Backend using pdf-extract's layout-aware text extraction
pub struct PdfExtractBackend;

impl DocumentBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn decode(&self, data: &[u8]) -> Result<DecodedText, DecodeError> {
        // pdf-extract panics on some malformed fonts and streams
        let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data))
            .map_err(|_| DecodeError::Pdf("pdf-extract panicked".to_string()))?
            .map_err(|e| DecodeError::Pdf(e.to_string()))?;

        // pdf-extract separates pages with form feeds
        let pages: Vec<&str> = text.split('\x0C').collect();
        let page_count = match pdf_extract::Document::load_mem(data) {
            Ok(doc) => doc.get_pages().len(),
            Err(_) => pages.len(),
        };

        Ok(DecodedText::new(join_pages(pages)).with_pages(page_count))
    }
}

/// Backend reading each page's content stream through lopdf
pub struct LopdfBackend;

impl DocumentBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn decode(&self, data: &[u8]) -> Result<DecodedText, DecodeError> {
        let doc = lopdf::Document::load_mem(data).map_err(|e| DecodeError::Pdf(e.to_string()))?;
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page in &page_numbers {
            let text = doc
                .extract_text(&[*page])
                .map_err(|e| DecodeError::Pdf(format!("page {}: {}", page, e)))?;
            pages.push(text);
        }

        Ok(DecodedText::new(join_pages(pages.iter().map(String::as_str)))
            .with_pages(page_numbers.len()))
    }
}

/// Non-empty page texts, each followed by a blank line
fn join_pages<'a>(pages: impl IntoIterator<Item = &'a str>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .fold(String::new(), |mut text, page| {
            text.push_str(page);
            text.push_str(PAGE_SEPARATOR);
            text
        })
}
