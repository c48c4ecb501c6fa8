//! JSON export

use std::path::{Path, PathBuf};

use anyhow::Context;
use contract_types::AnalysisReport;

/// A directory target receives the report's default file name
pub fn export_path(target: &Path, report: &AnalysisReport) -> PathBuf {
    if target.is_dir() {
        target.join(report.export_file_name())
    } else {
        target.to_path_buf()
    }
}

/// Write the pretty-printed record and return where it went
pub fn write_report(target: &Path, report: &AnalysisReport) -> anyhow::Result<PathBuf> {
    let path = export_path(target, report);
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported analysis");
    Ok(path)
}
