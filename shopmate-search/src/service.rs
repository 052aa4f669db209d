//! Product search service used by the API and the CLI.

use std::sync::Arc;

use shopmate_core::ShopmateConfig;

use crate::errors::ProductSearchError;
use crate::providers::{ProductSearchProvider, SerpApiProvider};
use crate::types::ProductRecord;

/// Product search service wrapping an optional provider.
///
/// Without a provider (no credential configured) every search returns an
/// empty list instead of failing.
#[derive(Debug, Clone)]
pub struct ProductSearchService {
    provider: Option<Arc<dyn ProductSearchProvider>>,
}

impl ProductSearchService {
    /// Creates the service from configuration, using SerpAPI when a key is set.
    ///
    /// # Errors
    /// - `ProductSearchError::NetworkError` - HTTP client could not be built
    pub fn from_config(config: &ShopmateConfig) -> Result<Self, ProductSearchError> {
        let provider = match config.search.api_key.clone() {
            Some(api_key) => Some(Arc::new(SerpApiProvider::new(
                api_key,
                &config.search,
                &config.network,
            )?) as Arc<dyn ProductSearchProvider>),
            None => None,
        };

        Ok(Self { provider })
    }

    /// Creates the service around an explicit provider.
    pub fn with_provider(provider: Arc<dyn ProductSearchProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Creates a service with no provider configured.
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Whether a provider credential is available.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Search for products using a free-text query.
    ///
    /// # Errors
    /// - `ProductSearchError::EmptyQuery` - Query is empty after trimming
    /// - `ProductSearchError::NetworkError` - Network connectivity issues
    /// - `ProductSearchError::ProviderError` - Provider rejected the request
    /// - `ProductSearchError::ParseError` - Provider response was not understood
    pub async fn search(&self, query: &str) -> Result<Vec<ProductRecord>, ProductSearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ProductSearchError::EmptyQuery);
        }

        let Some(provider) = self.provider.as_ref() else {
            tracing::error!("SERPAPI_KEY not configured, returning no products");
            return Ok(Vec::new());
        };

        tracing::info!(query, "Searching products");
        provider.search_products(query).await
    }
}
