//! Shopmate Web - JSON API Server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Exposes `/api/search` and `/api/chat` over axum, delegating to the search
//! and chat services.

pub mod errors;
pub mod handlers;
pub mod server;

// Re-export main types
pub use errors::{ApiError, ServerError};
pub use server::{AppState, build_router, run_server};
