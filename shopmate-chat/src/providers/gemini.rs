//! Google Gemini `generateContent` provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shopmate_core::{ChatConfig, NetworkConfig};

use super::ChatModelProvider;
use crate::errors::ChatError;

const JSON_MIME_TYPE: &str = "application/json";

/// Gemini REST client for single-turn prompts.
#[derive(Debug)]
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    json_mode: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<OutgoingPart<'a>>,
}

#[derive(Debug, Serialize)]
struct OutgoingPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<IncomingPart>,
}

#[derive(Debug, Deserialize)]
struct IncomingPart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        (!text.trim().is_empty()).then_some(text)
    }
}

impl GeminiProvider {
    /// Creates a provider from configuration and an explicit credential.
    ///
    /// # Errors
    /// - `ChatError::NetworkError` - HTTP client could not be built
    pub fn new(api_key: String, chat: &ChatConfig, network: &NetworkConfig) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(network.request_timeout)
            .user_agent(network.user_agent)
            .build()
            .map_err(|e| ChatError::NetworkError {
                reason: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: chat.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: chat.model.clone(),
            temperature: chat.temperature,
            json_mode: chat.json_mode,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ChatModelProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ChatError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![OutgoingPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                response_mime_type: self.json_mode.then_some(JSON_MIME_TYPE),
            },
        };

        tracing::debug!(model = %self.model, "Calling Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::NetworkError {
                reason: format!("Gemini request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::ProviderError {
                status: status.as_u16(),
                reason: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            });
        }

        let generated: GenerateContentResponse =
            response.json().await.map_err(|e| ChatError::ParseError {
                reason: format!("Gemini JSON parsing failed: {e}"),
            })?;

        generated.into_text().ok_or(ChatError::EmptyResponse)
    }
}
