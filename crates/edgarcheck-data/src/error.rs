//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while talking to EDGAR or ingesting its responses.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status from EDGAR
    #[error("HTTP {status} from {url}")]
    Http {
        /// Status code returned by the server
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Parallel filing sequences disagree in length
    #[error("Filing index is ragged: {field} has {actual} entries, expected {expected}")]
    RaggedIndex {
        /// Name of the offending sequence
        field: &'static str,
        /// Length of `accessionNumber`
        expected: usize,
        /// Length of the offending sequence
        actual: usize,
    },

    /// Invalid CIK
    #[error("Invalid CIK: {0}")]
    InvalidCik(String),
}
