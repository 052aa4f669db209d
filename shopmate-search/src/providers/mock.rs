//! Mock provider implementation for testing.

#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::ProductSearchProvider;
#[cfg(test)]
use crate::errors::ProductSearchError;
#[cfg(test)]
use crate::types::ProductRecord;

/// Mock provider for testing.
///
/// Returns a canned result list, or a network error when built with
/// [`MockProvider::failing`]. Records every query it receives.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockProvider {
    products: Vec<ProductRecord>,
    fail: bool,
    queries: Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockProvider {
    /// Creates a mock provider returning the given products.
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    /// Creates a mock provider whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Queries received so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl ProductSearchProvider for MockProvider {
    async fn search_products(&self, query: &str) -> Result<Vec<ProductRecord>, ProductSearchError> {
        self.queries.lock().unwrap().push(query.to_string());

        if self.fail {
            return Err(ProductSearchError::NetworkError {
                reason: "mock provider unreachable".to_string(),
            });
        }

        Ok(self.products.clone())
    }
}
