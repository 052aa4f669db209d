//! Language model providers.

use async_trait::async_trait;

use crate::errors::ChatError;

pub mod gemini;
pub mod mock;

pub use gemini::GeminiProvider;
#[cfg(test)]
pub use mock::MockModel;

/// Trait for text-generation providers.
#[async_trait]
pub trait ChatModelProvider: Send + Sync + std::fmt::Debug {
    /// Sends a single prompt and returns the model's raw text.
    ///
    /// # Errors
    /// - `ChatError::NetworkError` - Network connectivity issues or timeout
    /// - `ChatError::ProviderError` - Provider answered with an error status
    /// - `ChatError::ParseError` - Response envelope could not be decoded
    /// - `ChatError::EmptyResponse` - No candidate text was returned
    async fn generate(&self, prompt: &str) -> Result<String, ChatError>;
}
