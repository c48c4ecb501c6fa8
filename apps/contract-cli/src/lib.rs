//! Contract analysis from the command line
//!
//! Decodes a file, runs the rule-based analyzer, optionally asks the narrative assistant
//! for a summary, then prints the results view or the JSON export record.

pub mod export;
pub mod pipeline;
pub mod render;

pub use export::{export_path, write_report};
pub use pipeline::analyze_file;
pub use render::render_report;
