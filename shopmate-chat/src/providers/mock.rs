//! Mock model implementation for testing.

#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::ChatModelProvider;
#[cfg(test)]
use crate::errors::ChatError;

/// Mock model that answers every prompt with the same text.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockModel {
    answer: Option<String>,
    prompts: Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockModel {
    /// Creates a mock answering with `answer`.
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            ..Default::default()
        }
    }

    /// Creates a mock whose every call fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl ChatModelProvider for MockModel {
    async fn generate(&self, prompt: &str) -> Result<String, ChatError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        self.answer.clone().ok_or_else(|| ChatError::NetworkError {
            reason: "mock model unreachable".to_string(),
        })
    }
}
