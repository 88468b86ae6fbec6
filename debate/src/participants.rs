//! Participant configuration and roster
//!
//! Defines debate participants with per-participant model selection and
//! system prompts, and turns them into the ordered roster the engine runs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentPort};
use crate::error::DebateError;
use crate::llm::{LlmProvider, MockProvider, OllamaProvider};
use crate::prompts;

/// Configuration for a single participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantConfig {
    /// Unique identifier, recorded on every response
    pub id: String,

    /// Descriptive role label (e.g., analyst, critic, supporter)
    pub role: String,

    /// LLM model override; the `[llm]` model is used when absent
    #[serde(default)]
    pub model: Option<String>,

    /// System prompt defining participant behavior
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl ParticipantConfig {
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            model: None,
            system_prompt: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

/// Built-in roster used when no participants are configured
pub fn default_participants() -> Vec<ParticipantConfig> {
    vec![
        ParticipantConfig::new("analyst", "analyst").with_system_prompt(prompts::ANALYST_PROMPT),
        ParticipantConfig::new("critic", "critic").with_system_prompt(prompts::CRITIC_PROMPT),
        ParticipantConfig::new("supporter", "supporter")
            .with_system_prompt(prompts::SUPPORTER_PROMPT),
    ]
}

/// Which backend participants talk to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    /// Ollama server at the given URL
    Ollama { url: String },
    /// Fixed-response mock, for offline runs
    Mock { response: String },
}

/// Reply used by the mock backend when none is given
pub const DEFAULT_MOCK_RESPONSE: &str = "I agree with the points raised so far.";

impl ProviderKind {
    /// Resolve a backend by name ("ollama" or "mock")
    pub fn from_name(name: &str, ollama_url: &str) -> Result<Self, DebateError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(ProviderKind::Ollama {
                url: ollama_url.to_string(),
            }),
            "mock" => Ok(ProviderKind::Mock {
                response: DEFAULT_MOCK_RESPONSE.to_string(),
            }),
            _ => Err(DebateError::UnknownProvider(name.to_string())),
        }
    }
}

/// Build the ordered roster of agents from participant configs
pub fn build_roster(
    participants: &[ParticipantConfig],
    provider: &ProviderKind,
    default_model: &str,
) -> Vec<Arc<dyn AgentPort>> {
    participants
        .iter()
        .map(|p| {
            let model = p.model.as_deref().unwrap_or(default_model);
            let llm: Arc<dyn LlmProvider> = match provider {
                ProviderKind::Ollama { url } => Arc::new(OllamaProvider::new(url, model)),
                ProviderKind::Mock { response } => Arc::new(MockProvider::new(response.clone())),
            };

            let mut agent = Agent::new(&p.id, &p.role).with_provider(llm);
            if let Some(prompt) = &p.system_prompt {
                agent = agent.with_system_prompt(prompt.clone());
            }
            Arc::new(agent) as Arc<dyn AgentPort>
        })
        .collect()
}
