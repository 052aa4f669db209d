//! Normalized product record shared by search and chat.

use serde::{Deserialize, Deserializer, Serialize};

/// Store name used when the provider does not report one.
pub const DEFAULT_SOURCE: &str = "Oferta";

/// One normalized shopping result.
///
/// Records produced by a provider always carry a non-empty `link`. Records
/// echoed back by clients are decoded leniently with the same defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Formatted price label, e.g. `R$ 1.299,00`
    #[serde(default)]
    pub price: Option<String>,
    /// Store offering the product
    #[serde(default = "default_source", deserialize_with = "null_as_default_source")]
    pub source: String,
    /// Offer URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    /// Image URL
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Average review score, zero when unrated
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
}

impl ProductRecord {
    /// Price as shown to users and the model, with a placeholder when unknown.
    pub fn display_price(&self) -> &str {
        self.price.as_deref().unwrap_or("indisponível")
    }
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_source<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_source))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_partial_record_gets_defaults() {
        let record: ProductRecord = serde_json::from_value(json!({
            "title": "Smart TV 50\"",
            "price": "R$ 2.199,00",
            "link": "https://loja.example/tv"
        }))
        .unwrap();

        assert_eq!(record.source, DEFAULT_SOURCE);
        assert_eq!(record.rating, 0.0);
        assert_eq!(record.thumbnail, None);
    }

    #[test]
    fn test_null_fields_get_defaults() {
        let record: ProductRecord = serde_json::from_value(json!({
            "title": null,
            "price": null,
            "source": null,
            "link": "https://loja.example/tv",
            "rating": null
        }))
        .unwrap();

        assert_eq!(record.title, "");
        assert_eq!(record.source, DEFAULT_SOURCE);
        assert_eq!(record.rating, 0.0);
        assert_eq!(record.display_price(), "indisponível");
    }

    #[test]
    fn test_serializes_all_fields() {
        let record = ProductRecord {
            title: "Fone".to_string(),
            price: None,
            source: "Loja".to_string(),
            link: "https://loja.example/fone".to_string(),
            thumbnail: None,
            rating: 4.5,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Fone",
                "price": null,
                "source": "Loja",
                "link": "https://loja.example/fone",
                "thumbnail": null,
                "rating": 4.5
            })
        );
    }
}
