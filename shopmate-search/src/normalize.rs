//! Mapping of raw Google Shopping results into [`ProductRecord`]s.

use serde::Deserialize;

use crate::types::{DEFAULT_SOURCE, ProductRecord};

/// Top-level SerpAPI response body.
///
/// SerpAPI reports "no results" as a successful response carrying `error`
/// and no `shopping_results`.
#[derive(Debug, Default, Deserialize)]
pub struct ShoppingResponse {
    /// Raw result entries
    #[serde(default)]
    pub shopping_results: Vec<RawShoppingResult>,
    /// Provider notice, e.g. when the query matched nothing
    #[serde(default)]
    pub error: Option<String>,
}

/// A single entry of `shopping_results` as the provider sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(missing_docs)]
pub struct RawShoppingResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<RawPrice>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub product_link: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Price as either the formatted label or a bare amount.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// Formatted label such as `R$ 89,90`
    Label(String),
    /// Bare numeric amount
    Amount(f64),
}

impl RawPrice {
    fn into_label(self) -> String {
        match self {
            RawPrice::Label(label) => label,
            RawPrice::Amount(amount) => amount.to_string(),
        }
    }
}

impl RawShoppingResult {
    /// Link to use for this result: `link` first, then `product_link`.
    /// Empty strings count as missing.
    pub fn preferred_link(&self) -> Option<&str> {
        [self.link.as_deref(), self.product_link.as_deref()]
            .into_iter()
            .flatten()
            .find(|link| !link.is_empty())
    }

    /// Normalizes this result, or returns `None` when it has no usable link.
    pub fn into_product(self) -> Option<ProductRecord> {
        let link = self.preferred_link()?.to_string();

        Some(ProductRecord {
            title: self.title.unwrap_or_default(),
            price: self.price.map(RawPrice::into_label),
            source: self.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            link,
            thumbnail: self.thumbnail,
            rating: self.rating.unwrap_or(0.0),
        })
    }
}

/// Normalizes a provider result list, dropping linkless entries and keeping order.
pub fn normalize_results(results: Vec<RawShoppingResult>) -> Vec<ProductRecord> {
    results
        .into_iter()
        .filter_map(RawShoppingResult::into_product)
        .collect()
}
