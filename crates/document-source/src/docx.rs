//! Word (.docx) backend: paragraphs of `word/document.xml`

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::backend::{DecodedText, DocumentBackend};
use crate::types::DecodeError;

const DOCUMENT_PART: &str = "word/document.xml";

pub struct DocxBackend;

impl DocumentBackend for DocxBackend {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn decode(&self, data: &[u8]) -> Result<DecodedText, DecodeError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
        let mut xml = String::new();
        archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

        let paragraphs = read_paragraphs(&xml)?;
        let text = paragraphs
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(DecodedText::new(text).with_paragraphs(paragraphs.len()))
    }
}

/// Text of every `w:p` element in document order, blank ones included
pub fn read_paragraphs(xml: &str) -> Result<Vec<String>, DecodeError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    // Paragraphs nest inside text boxes
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader
            .read_event()
            .map_err(|e| DecodeError::Xml(e.to_string()))?
        {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" => push_char(&mut open, '\t'),
                b"w:br" | b"w:cr" => push_char(&mut open, '\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(|e| DecodeError::Xml(e.to_string()))?;
                if let Some(current) = open.last_mut() {
                    current.push_str(&text);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if let Some(done) = open.pop() {
                        paragraphs.push(done);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_char(open: &mut [String], c: char) {
    if let Some(current) = open.last_mut() {
        current.push(c);
    }
}
