//! Debate participants
//!
//! [`AgentPort`] is the capability the engine consumes. [`Agent`] is the
//! LLM-backed implementation used by the CLI and the MCP server.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::llm::{EchoProvider, LlmProvider, Message};
use crate::prompts;
use crate::types::{Response, Vote};

/// Capability every debate participant implements
///
/// The engine treats participants as stateless remote collaborators: it
/// only ever calls these methods, one at a time, and never mutates them.
#[async_trait]
pub trait AgentPort: Send + Sync {
    /// Identifier recorded on every response this participant produces
    fn agent_id(&self) -> &str;

    /// Descriptive role label
    fn role(&self) -> &str;

    /// Produce a contribution for the given prompt
    async fn process(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Vote on the debate so far, given every current response's content
    async fn vote(&self, topic: &str, current_responses: &[String]) -> Result<Vote, ProviderError>;
}

/// LLM-backed participant
#[derive(Clone)]
pub struct Agent {
    agent_id: String,
    role: String,
    system_prompt: Option<String>,
    provider: Arc<dyn LlmProvider>,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("agent_id", &self.agent_id)
            .field("role", &self.role)
            .field("model", &self.provider.model())
            .finish()
    }
}

impl Agent {
    /// Create an agent that echoes its prompts back
    pub fn new(agent_id: impl Into<String>, role: impl Into<String>) -> Self {
        let agent_id = agent_id.into();
        let role = role.into();
        let provider = Arc::new(EchoProvider::new(&agent_id, &role));
        Self {
            agent_id,
            role,
            system_prompt: None,
            provider,
        }
    }

    /// Use the given provider for text generation
    pub fn with_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Set the system prompt sent before every request
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Process a prompt and wrap the reply with this agent's metadata
    pub async fn process_with_metadata(&self, prompt: &str) -> Result<Response, ProviderError> {
        let content = self.process(prompt).await?;
        Ok(Response::new(&self.agent_id, &self.role, content))
    }

    fn messages(&self, prompt: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system_prompt {
            messages.push(Message::system(system.clone()));
        }
        messages.push(Message::user(prompt));
        messages
    }
}

#[async_trait]
impl AgentPort for Agent {
    fn agent_id(&self) -> &str {
        &self.agent_id
    }

    fn role(&self) -> &str {
        &self.role
    }

    async fn process(&self, prompt: &str) -> Result<String, ProviderError> {
        tracing::debug!(agent = %self.agent_id, model = self.provider.model(), "Sending prompt");
        self.provider.generate(&self.messages(prompt)).await
    }

    async fn vote(&self, topic: &str, current_responses: &[String]) -> Result<Vote, ProviderError> {
        let prompt = prompts::vote_prompt(topic, current_responses);
        let text = self.provider.generate(&self.messages(&prompt)).await?;
        Ok(Vote::from_text(&self.agent_id, text))
    }
}
