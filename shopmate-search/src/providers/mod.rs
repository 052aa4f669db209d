//! Provider implementations for product search.

use async_trait::async_trait;

use crate::errors::ProductSearchError;
use crate::types::ProductRecord;

pub mod mock;
pub mod serpapi;

#[cfg(test)]
pub use mock::MockProvider;
pub use serpapi::SerpApiProvider;

/// Trait for shopping search providers.
///
/// Implementations perform exactly one outbound request per call and return
/// results already normalized, in provider order.
#[async_trait]
pub trait ProductSearchProvider: Send + Sync + std::fmt::Debug {
    /// Search for products matching a free-text query.
    ///
    /// # Errors
    /// - `ProductSearchError::NetworkError` - Network connectivity issues or timeout
    /// - `ProductSearchError::ProviderError` - Provider answered with an error status
    /// - `ProductSearchError::ParseError` - Provider response could not be decoded
    async fn search_products(&self, query: &str) -> Result<Vec<ProductRecord>, ProductSearchError>;
}
