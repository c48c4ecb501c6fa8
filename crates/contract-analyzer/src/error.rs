use thiserror::Error;

/// Errors raised while compiling a pattern catalog
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Invalid pattern in category '{category}': {pattern}: {source}")]
    InvalidPattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
