//! SerpAPI Google Shopping provider.

use async_trait::async_trait;
use shopmate_core::{NetworkConfig, SearchConfig};

use super::ProductSearchProvider;
use crate::errors::ProductSearchError;
use crate::normalize::{ShoppingResponse, normalize_results};
use crate::types::ProductRecord;

/// Google Shopping search through SerpAPI.
///
/// Sends the fixed engine, region and language from [`SearchConfig`] with
/// every query and caps the result count.
#[derive(Debug)]
pub struct SerpApiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    engine: &'static str,
    country: &'static str,
    language: &'static str,
    result_limit: u32,
}

impl SerpApiProvider {
    /// Creates a provider from configuration and an explicit credential.
    ///
    /// # Errors
    /// - `ProductSearchError::NetworkError` - HTTP client could not be built
    pub fn new(
        api_key: String,
        search: &SearchConfig,
        network: &NetworkConfig,
    ) -> Result<Self, ProductSearchError> {
        let client = reqwest::Client::builder()
            .timeout(network.request_timeout)
            .user_agent(network.user_agent)
            .build()
            .map_err(|e| ProductSearchError::NetworkError {
                reason: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: search.base_url.trim_end_matches('/').to_string(),
            api_key,
            engine: search.engine,
            country: search.country,
            language: search.language,
            result_limit: search.result_limit,
        })
    }
}

#[async_trait]
impl ProductSearchProvider for SerpApiProvider {
    async fn search_products(&self, query: &str) -> Result<Vec<ProductRecord>, ProductSearchError> {
        let url = format!("{}/search", self.base_url);
        let limit = self.result_limit.to_string();

        let params = [
            ("engine", self.engine),
            ("q", query),
            ("gl", self.country),
            ("hl", self.language),
            ("api_key", self.api_key.as_str()),
            ("num", limit.as_str()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ProductSearchError::NetworkError {
                reason: format!("SerpAPI request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProductSearchError::ProviderError {
                status: status.as_u16(),
                reason: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            });
        }

        let shopping: ShoppingResponse =
            response
                .json()
                .await
                .map_err(|e| ProductSearchError::ParseError {
                    reason: format!("SerpAPI JSON parsing failed: {e}"),
                })?;

        if let Some(message) = shopping.error.as_deref() {
            tracing::warn!(query, "SerpAPI returned no shopping results: {message}");
        }

        let raw_count = shopping.shopping_results.len();
        let products = normalize_results(shopping.shopping_results);
        tracing::debug!(
            query,
            raw_count,
            kept = products.len(),
            "Normalized shopping results"
        );

        Ok(products)
    }
}
