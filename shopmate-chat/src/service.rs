//! Shopping consultant: prompt, call, extract, fall back.

use std::sync::Arc;

use shopmate_core::ShopmateConfig;

use crate::errors::ChatError;
use crate::extract::{parse_model_reply, strip_code_fences};
use crate::prompt::build_prompt;
use crate::providers::{ChatModelProvider, GeminiProvider};
use crate::types::{
    ChatReply, ChatRequest, INTERNAL_ERROR_PREFIX, MISSING_KEY_REPLY, NO_PRODUCTS_REPLY,
    PARSE_FALLBACK_REPLY,
};

/// Chat service wrapping an optional model provider.
///
/// Never fails: every problem is reported to the user as a [`ChatReply`]
/// with no recommendation.
#[derive(Debug, Clone)]
pub struct ChatService {
    provider: Option<Arc<dyn ChatModelProvider>>,
}

impl ChatService {
    /// Creates the service from configuration, using Gemini when a key is set.
    ///
    /// # Errors
    /// - `ChatError::NetworkError` - HTTP client could not be built
    pub fn from_config(config: &ShopmateConfig) -> Result<Self, ChatError> {
        let provider = match config.chat.api_key.clone() {
            Some(api_key) => Some(Arc::new(GeminiProvider::new(
                api_key,
                &config.chat,
                &config.network,
            )?) as Arc<dyn ChatModelProvider>),
            None => None,
        };

        Ok(Self { provider })
    }

    /// Creates the service around an explicit provider.
    pub fn with_provider(provider: Arc<dyn ChatModelProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Creates a service with no provider configured.
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Whether a model credential is available.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Answers a question about previously found products.
    pub async fn consult(&self, request: &ChatRequest) -> ChatReply {
        let products = &request.products_context;
        if products.is_empty() {
            return ChatReply::canned(NO_PRODUCTS_REPLY);
        }

        let Some(provider) = self.provider.as_ref() else {
            tracing::error!("GEMINI_API_KEY not configured, answering with configuration notice");
            return ChatReply::canned(MISSING_KEY_REPLY);
        };

        let prompt = build_prompt(&request.message, products);
        tracing::info!(products = products.len(), "Consulting model");

        let raw = match provider.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) => return Self::provider_failure(&e),
        };

        let cleaned = strip_code_fences(&raw);
        tracing::debug!(reply = cleaned, "Model reply");

        match parse_model_reply(cleaned) {
            Ok(model_reply) => model_reply.into_reply(products.len()),
            Err(e) => {
                tracing::warn!("Falling back to canned reply: {e}");
                ChatReply::canned(PARSE_FALLBACK_REPLY)
            }
        }
    }

    fn provider_failure(error: &ChatError) -> ChatReply {
        tracing::error!("Model call failed: {error}");
        ChatReply::canned(format!("{INTERNAL_ERROR_PREFIX}: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use shopmate_search::ProductRecord;

    use super::*;
    use crate::providers::MockModel;

    fn products(count: usize) -> Vec<ProductRecord> {
        (0..count)
            .map(|i| ProductRecord {
                title: format!("Produto {i}"),
                price: Some(format!("R$ {},00", 100 + i)),
                source: "Loja".to_string(),
                link: format!("https://loja.example/{i}"),
                thumbnail: None,
                rating: 0.0,
            })
            .collect()
    }

    fn request(message: &str, count: usize) -> ChatRequest {
        ChatRequest {
            message: message.to_string(),
            products_context: products(count),
        }
    }

    #[tokio::test]
    async fn test_empty_context_short_circuits() {
        let model = Arc::new(MockModel::answering("{}"));
        let service = ChatService::with_provider(model.clone());

        let reply = service.consult(&request("oi", 0)).await;

        assert_eq!(reply, ChatReply::canned(NO_PRODUCTS_REPLY));
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_empty_context_wins_over_missing_key() {
        let reply = ChatService::unconfigured().consult(&request("oi", 0)).await;
        assert_eq!(reply, ChatReply::canned(NO_PRODUCTS_REPLY));
    }

    #[tokio::test]
    async fn test_missing_key_reply() {
        let service = ChatService::unconfigured();
        assert!(!service.is_configured());

        let reply = service.consult(&request("oi", 2)).await;
        assert_eq!(reply, ChatReply::canned(MISSING_KEY_REPLY));
    }

    #[tokio::test]
    async fn test_well_formed_reply_passes_through() {
        let model = Arc::new(MockModel::answering(
            r#"{"reply":"O item 1 é mais barato","recommended_index":1}"#,
        ));
        let service = ChatService::with_provider(model.clone());

        let reply = service.consult(&request("qual o mais barato", 3)).await;

        assert_eq!(
            reply,
            ChatReply {
                reply: "O item 1 é mais barato".to_string(),
                recommended_index: Some(1),
            }
        );
        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("ID 2: Produto 2"));
    }

    #[tokio::test]
    async fn test_fenced_reply_decoded() {
        let model = Arc::new(MockModel::answering(
            "```json\n{\"reply\":\"Fique com o 0\",\"recommended_index\":0}\n```",
        ));
        let reply = ChatService::with_provider(model)
            .consult(&request("qual?", 2))
            .await;

        assert_eq!(reply.recommended_index, Some(0));
    }

    #[tokio::test]
    async fn test_malformed_reply_falls_back() {
        let model = Arc::new(MockModel::answering("Recomendo o segundo produto!"));
        let reply = ChatService::with_provider(model)
            .consult(&request("qual?", 2))
            .await;

        assert_eq!(reply, ChatReply::canned(PARSE_FALLBACK_REPLY));
    }

    #[tokio::test]
    async fn test_out_of_range_index_dropped() {
        let model = Arc::new(MockModel::answering(
            r#"{"reply":"O item 7","recommended_index":7}"#,
        ));
        let reply = ChatService::with_provider(model)
            .consult(&request("qual?", 3))
            .await;

        assert_eq!(reply.reply, "O item 7");
        assert_eq!(reply.recommended_index, None);
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_reply() {
        let reply = ChatService::with_provider(Arc::new(MockModel::failing()))
            .consult(&request("qual?", 1))
            .await;

        assert!(reply.reply.starts_with(INTERNAL_ERROR_PREFIX));
        assert!(reply.reply.contains("mock model unreachable"));
        assert_eq!(reply.recommended_index, None);
    }
}
