//! Shopmate Core - Configuration, tracing and shared errors
//!
//! Everything the search, chat and web crates need to agree on at startup:
//! the configuration struct built once from the environment, the tracing
//! subscriber, and the top-level error type.

pub mod config;
pub mod tracing_setup;

pub use config::{ChatConfig, NetworkConfig, SearchConfig, ServerConfig, ShopmateConfig};

/// Core errors raised while bootstrapping Shopmate.
#[derive(Debug, thiserror::Error)]
pub enum ShopmateError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShopmateError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            ShopmateError::Configuration { reason } => format!("Configuration problem: {reason}"),
            ShopmateError::Io(_) => "File system error occurred".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopmateError>;
