//! Error types for the chat consultant.

use thiserror::Error;

/// Errors raised while talking to the language model provider.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Network communication error or timeout.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Provider answered with a non-success status.
    #[error("Provider error (HTTP {status}): {reason}")]
    ProviderError {
        /// HTTP status returned by the provider
        status: u16,
        /// Body or status text returned by the provider
        reason: String,
    },

    /// Provider response envelope could not be decoded.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// Provider returned no candidate text.
    #[error("Model returned an empty response")]
    EmptyResponse,
}

/// The model's text could not be decoded as a recommendation object.
#[derive(Debug, Error)]
#[error("Model reply is not a valid recommendation: {reason}")]
pub struct ExtractionError {
    /// Decoder message
    pub reason: String,
}
