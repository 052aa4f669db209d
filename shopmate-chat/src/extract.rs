//! Turning the model's free text into a [`ModelReply`].
//!
//! Two explicit stages: strip markdown fences, then decode. A decode failure
//! is returned as-is; the caller decides on the fallback.

use crate::errors::ExtractionError;
use crate::types::ModelReply;

const FENCE: &str = "```";
const FENCE_LANGUAGES: &[&str] = &["json", "JSON"];

/// Removes a surrounding markdown code fence, if any, and trims whitespace.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = FENCE_LANGUAGES
            .iter()
            .find_map(|lang| rest.strip_prefix(lang))
            .unwrap_or(rest);
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

/// Decodes cleaned model text into a [`ModelReply`].
///
/// # Errors
/// - `ExtractionError` - Text is not a JSON object with a string `reply`
pub fn parse_model_reply(cleaned: &str) -> Result<ModelReply, ExtractionError> {
    serde_json::from_str(cleaned).map_err(|e| ExtractionError {
        reason: e.to_string(),
    })
}

/// Both stages in one call.
///
/// # Errors
/// - `ExtractionError` - See [`parse_model_reply`]
pub fn extract_reply(raw: &str) -> Result<ModelReply, ExtractionError> {
    parse_model_reply(strip_code_fences(raw))
}
