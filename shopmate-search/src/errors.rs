//! Error types for product search functionality.

use thiserror::Error;

/// Errors that can occur during product search operations.
#[derive(Debug, Error)]
pub enum ProductSearchError {
    /// The query was empty or whitespace only.
    #[error("Search query must not be empty")]
    EmptyQuery,

    /// Network communication error occurred during search.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Search provider answered with a non-success status.
    #[error("Provider error (HTTP {status}): {reason}")]
    ProviderError {
        /// HTTP status returned by the provider
        status: u16,
        /// Body or status text returned by the provider
        reason: String,
    },

    /// Failed to parse the provider response.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },
}
