//! Ollama LLM implementation

use async_trait::async_trait;
use ollama_rs::{
    generation::chat::{request::ChatMessageRequest, ChatMessage},
    Ollama,
};

use super::{LlmProvider, Message, Role};
use crate::error::ProviderError;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 11434;

/// Ollama-backed provider
pub struct OllamaProvider {
    client: Ollama,
    model: String,
}

impl OllamaProvider {
    /// Create a provider for the server at `url`.
    ///
    /// An unparseable URL falls back to `http://localhost:11434`.
    pub fn new(url: &str, model: &str) -> Self {
        let (host, port) = match url::Url::parse(url) {
            Ok(parsed) => (
                parsed.host_str().unwrap_or(DEFAULT_HOST).to_string(),
                parsed.port().unwrap_or(DEFAULT_PORT),
            ),
            Err(e) => {
                tracing::warn!("Invalid Ollama URL '{}': {}, using default", url, e);
                (DEFAULT_HOST.to_string(), DEFAULT_PORT)
            }
        };

        Self {
            client: Ollama::new(format!("http://{}", host), port),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError> {
        let messages: Vec<ChatMessage> = messages
            .iter()
            .map(|m| match m.role {
                Role::System => ChatMessage::system(m.content.clone()),
                Role::User => ChatMessage::user(m.content.clone()),
                Role::Assistant => ChatMessage::assistant(m.content.clone()),
            })
            .collect();

        let request = ChatMessageRequest::new(self.model.clone(), messages);

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if response.message.content.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(response.message.content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
