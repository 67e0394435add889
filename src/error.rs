//! Error types for the search surface.
//!
//! The core transformations (filter building, highlight reconciliation, span
//! composition) are total functions and never report errors; this type covers
//! the configuration and backend surfaces around them.

use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur on the search request path
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The managed search backend failed or was unreachable
    #[error("Search backend error: {0}")]
    Backend(String),

    /// The backend rejected the request as malformed
    #[error("Query rejected: {0}")]
    QueryRejected(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
