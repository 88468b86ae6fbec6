//! Offline providers: a fixed-response mock and the default echo

use std::sync::Mutex;

use async_trait::async_trait;

use super::{last_user_content, LlmProvider, Message};
use crate::error::ProviderError;

/// Provider that always returns the same text and remembers the last prompt
#[derive(Debug)]
pub struct MockProvider {
    response: String,
    last_prompt: Mutex<Option<String>>,
}

impl MockProvider {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            last_prompt: Mutex::new(None),
        }
    }

    /// The user prompt from the most recent call, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Mock response")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError> {
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(last_user_content(messages).to_string());
        }
        Ok(self.response.clone())
    }

    fn model(&self) -> &str {
        "mock"
    }
}

/// Provider used when a participant has no backend configured
#[derive(Debug, Clone)]
pub struct EchoProvider {
    agent_id: String,
    role: String,
}

impl EchoProvider {
    pub fn new(agent_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            role: role.into(),
        }
    }
}

#[async_trait]
impl LlmProvider for EchoProvider {
    async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError> {
        Ok(format!(
            "Agent {} ({}) received: {}",
            self.agent_id,
            self.role,
            last_user_content(messages)
        ))
    }

    fn model(&self) -> &str {
        "echo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_last_prompt() {
        let provider = MockProvider::new("Mock response from LLM");
        assert_eq!(provider.last_prompt(), None);

        let reply = provider
            .generate(&[Message::system("be brief"), Message::user("Test prompt")])
            .await
            .unwrap();

        assert_eq!(reply, "Mock response from LLM");
        assert_eq!(provider.last_prompt().as_deref(), Some("Test prompt"));
    }

    #[tokio::test]
    async fn test_echo_includes_identity_and_prompt() {
        let provider = EchoProvider::new("test-agent", "analyst");
        let reply = provider.generate(&[Message::user("What is 2 + 2?")]).await.unwrap();
        assert_eq!(reply, "Agent test-agent (analyst) received: What is 2 + 2?");
    }
}
