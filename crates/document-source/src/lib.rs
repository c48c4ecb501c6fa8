//! Document decoding for contract analysis
//!
//! Turns an uploaded PDF, Word or plain-text file into a [`RawDocument`]. Decoding never
//! fails from the caller's point of view: each format tries an ordered list of backends,
//! and when all of them fail the text is replaced by a placeholder and the error is
//! recorded in the document metadata.

pub mod backend;
pub mod decode;
pub mod docx;
pub mod pdf;
pub mod sections;
pub mod text;
pub mod types;

pub use backend::{BackendChain, DecodedText, DocumentBackend};
pub use contract_types::{DocumentMetadata, RawDocument, Section};
pub use decode::{decode, decode_bytes};
pub use sections::detect_sections;
pub use types::{DecodeError, DocumentType};
