//! Catalog Error Types

use thiserror::Error;

/// Errors surfaced while loading the catalog
///
/// Only the load path can fail. Query-time conditions (unknown category
/// slug, inverted price range) degrade to fallbacks instead of erroring,
/// so browsing never hard-fails once the catalog is up.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed catalog data: {0}")]
    Malformed(String),

    #[error("Missing or empty `{field}` on product record {index}")]
    MissingField { field: &'static str, index: usize },

    #[error("Duplicate {kind} `{value}` in catalog")]
    Duplicate { kind: &'static str, value: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Malformed(err.to_string())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
