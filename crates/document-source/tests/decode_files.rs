//! Decoding real files from disk

use std::io::Write;

use document_source::{decode, DocumentType};
use pretty_assertions::assert_eq;

fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut buffer = std::io::Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();
    }
    buffer.into_inner()
}

#[test]
fn decodes_text_file_with_sections() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(
        file,
        "Article 1 Definitions\nThe Vendor shall deliver within 30 days."
    )
    .unwrap();

    let doc = decode(file.path(), DocumentType::from_path(file.path()));
    assert_eq!(
        doc.raw_text,
        "Article 1 Definitions\nThe Vendor shall deliver within 30 days."
    );
    assert_eq!(doc.metadata.backend.as_deref(), Some("utf-8"));
    assert_eq!(doc.sections[0].header, "Article 1");
    assert_eq!(doc.sections[1].header, "Definitions");
}

#[test]
fn decodes_word_document() {
    let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
    file.write_all(&docx_bytes(&["SERVICE AGREEMENT", "", "Payment is due monthly."]))
        .unwrap();

    let doc = decode(file.path(), DocumentType::Docx);
    assert_eq!(doc.raw_text, "SERVICE AGREEMENT\n\nPayment is due monthly.");
    assert_eq!(doc.metadata.paragraphs, Some(3));
    assert_eq!(doc.metadata.backend.as_deref(), Some("docx"));
    assert_eq!(doc.sections[0].header, "Payment");
}

#[test]
fn word_archive_without_document_part_degrades() {
    let mut buffer = std::io::Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        zip.start_file("readme.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"hello").unwrap();
        zip.finish().unwrap();
    }

    let doc = document_source::decode_bytes(&buffer.into_inner(), DocumentType::Docx);
    assert_eq!(doc.raw_text, "Error reading Word document");
    assert!(doc.metadata.error.is_some());
}

#[test]
fn unreadable_pdf_degrades() {
    let doc = decode("/does/not/exist.pdf", DocumentType::Pdf);
    assert_eq!(doc.raw_text, "Could not extract text from PDF");
    assert!(doc.sections.is_empty());
}
