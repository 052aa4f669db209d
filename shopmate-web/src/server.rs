//! JSON API server for Shopmate
//!
//! Two independent endpoints backed by stateless services plus a health
//! probe. CORS is fully permissive so any frontend origin can call it.

use axum::Router;
use axum::routing::{get, post};
use shopmate_chat::ChatService;
use shopmate_core::ShopmateConfig;
use shopmate_search::ProductSearchService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::errors::ServerError;
use crate::handlers::{api_chat, api_health, api_search};

/// Shared, immutable app state cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Product search backend
    pub search_service: ProductSearchService,
    /// Shopping consultant backend
    pub chat_service: ChatService,
}

impl AppState {
    /// Builds both services from configuration.
    ///
    /// # Errors
    /// - `ServerError::Search` / `ServerError::Chat` - An HTTP client could not be built
    pub fn from_config(config: &ShopmateConfig) -> Result<Self, ServerError> {
        Ok(Self {
            search_service: ProductSearchService::from_config(config)?,
            chat_service: ChatService::from_config(config)?,
        })
    }
}

/// Router with every API route, CORS and request tracing applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", post(api_search))
        .route("/api/chat", post(api_chat))
        .route("/api/health", get(api_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
/// - `ServerError::Io` - Address could not be bound or the server failed
/// - `ServerError::Search` / `ServerError::Chat` - Service setup failed
pub async fn run_server(config: ShopmateConfig) -> Result<(), ServerError> {
    let state = AppState::from_config(&config)?;

    if !state.search_service.is_configured() {
        tracing::warn!("SERPAPI_KEY missing: /api/search will return no products");
    }
    if !state.chat_service.is_configured() {
        tracing::warn!("GEMINI_API_KEY missing: /api/chat will answer with a configuration notice");
    }

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;

    tracing::info!("Shopmate API running on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shopmate API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
