//! LLM abstraction layer

mod mock;
mod ollama;

pub use mock::{EchoProvider, MockProvider};
pub use ollama::OllamaProvider;

use async_trait::async_trait;

use crate::error::ProviderError;

/// Message in a conversation
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Trait for LLM backends
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a reply to the given conversation
    async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError>;

    /// Get the model name
    fn model(&self) -> &str;
}

/// Content of the last user message in a conversation
pub(crate) fn last_user_content(messages: &[Message]) -> &str {
    messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .unwrap_or("")
}
