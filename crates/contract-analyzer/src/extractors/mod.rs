pub mod entities;

pub use entities::{extract_entities, extract_entities_with};
