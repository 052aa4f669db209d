//! API handlers for product search and the shopping consultant

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use shopmate_chat::{ChatReply, ChatRequest};
use shopmate_search::ProductRecord;

use crate::errors::ApiError;
use crate::server::AppState;

/// Body of `POST /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text search
    pub query: String,
}

/// Body returned by `POST /api/search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Normalized products in provider order
    pub products: Vec<ProductRecord>,
}

/// Liveness plus which provider credentials are present.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"ok"` when the server answers
    pub status: String,
    /// `SERPAPI_KEY` is set
    pub search_configured: bool,
    /// `GEMINI_API_KEY` is set
    pub chat_configured: bool,
}

/// Searches products; provider failures become HTTP 500.
pub async fn api_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload?;
    match state.search_service.search(&request.query).await {
        Ok(products) => {
            tracing::info!(count = products.len(), "Search served");
            Ok(Json(SearchResponse { products }))
        }
        Err(e) => {
            tracing::error!(query = %request.query, "Search error: {e}");
            Err(e.into())
        }
    }
}

/// Answers a question about products; HTTP 200 for any well-formed body.
pub async fn api_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.chat_service.consult(&request).await))
}

/// Reports liveness and provider configuration.
pub async fn api_health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        search_configured: state.search_service.is_configured(),
        chat_configured: state.chat_service.is_configured(),
    })
}
