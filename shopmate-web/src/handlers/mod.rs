//! HTTP request handlers

pub mod api;

// Re-export handler functions
pub use api::{HealthStatus, SearchRequest, SearchResponse, api_chat, api_health, api_search};
