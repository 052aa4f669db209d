//! Shopmate Chat - LLM shopping consultant

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Builds an indexed product prompt, asks a language model for a JSON
//! recommendation and turns its free-text answer into a [`ChatReply`],
//! falling back to canned replies whenever the model or its output fails.

pub mod errors;
pub mod extract;
pub mod prompt;
pub mod providers;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::{ChatError, ExtractionError};
pub use extract::{extract_reply, parse_model_reply, strip_code_fences};
pub use providers::{ChatModelProvider, GeminiProvider};
pub use service::ChatService;
pub use types::{ChatReply, ChatRequest, ModelReply};
