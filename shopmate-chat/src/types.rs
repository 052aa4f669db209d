//! Request and reply shapes for the chat endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use shopmate_search::ProductRecord;

/// Reply sent when the client has not searched yet.
pub const NO_PRODUCTS_REPLY: &str = "Não encontrei produtos para analisar. Faça uma busca primeiro!";

/// Reply sent when no model credential is configured.
pub const MISSING_KEY_REPLY: &str = "Erro de configuração no servidor (Falta API Key).";

/// Reply sent when the model's text cannot be decoded.
pub const PARSE_FALLBACK_REPLY: &str =
    "Entendi, mas tive dificuldade técnica para processar. O melhor preço parece ser o primeiro da lista.";

/// Prefix of the reply sent when the provider call itself fails.
pub const INTERNAL_ERROR_PREFIX: &str = "Ocorreu um erro interno";

/// User question plus the products it refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Free-text question
    pub message: String,
    /// Products from a previous search; positions are the recommendation ids
    #[serde(default)]
    pub products_context: Vec<ProductRecord>,
}

/// Recommendation returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Short explanation for the user
    pub reply: String,
    /// Position into `products_context`, `None` when nothing stands out
    pub recommended_index: Option<usize>,
}

impl ChatReply {
    /// A reply with no recommendation.
    pub fn canned(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            recommended_index: None,
        }
    }
}

/// Recommendation exactly as the model wrote it.
///
/// The index is signed because nothing stops the model from emitting a
/// negative number; [`ModelReply::into_reply`] validates it. Integral floats
/// and numeric strings are accepted, any other index value decodes as `None`
/// so the reply text survives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelReply {
    /// Explanation text
    pub reply: String,
    /// Suggested product position
    #[serde(default, deserialize_with = "lenient_index")]
    pub recommended_index: Option<i64>,
}

fn lenient_index<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| {
        let index = index_from_value(&value);
        if index.is_none() && !value.is_null() {
            tracing::warn!(%value, "Ignoring unusable recommended_index");
        }
        index
    }))
}

fn index_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>().ok().or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

impl ModelReply {
    /// Converts into a [`ChatReply`], dropping an index that does not point
    /// into a list of `product_count` products.
    pub fn into_reply(self, product_count: usize) -> ChatReply {
        let recommended_index = match self.recommended_index {
            None => None,
            Some(index) => match usize::try_from(index) {
                Ok(position) if position < product_count => Some(position),
                _ => {
                    tracing::warn!(
                        index,
                        product_count,
                        "Model recommended a product outside the list, dropping index"
                    );
                    None
                }
            },
        };

        ChatReply {
            reply: self.reply,
            recommended_index,
        }
    }
}
