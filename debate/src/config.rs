//! Configuration loading (.debate.toml)
//!
//! ```toml
//! [llm]
//! url = "http://localhost:11434"
//! model = "qwen3:14b"
//!
//! [debate]
//! max_rounds = 2
//! check_consensus = true
//!
//! [[participants]]
//! id = "optimist"
//! role = "supporter"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::RunConfig;
use crate::error::DebateError;
use crate::participants::{default_participants, ParticipantConfig};

pub const CONFIG_FILE_NAME: &str = ".debate.toml";

/// Find a config file by walking up from `start`, then checking global config.
///
/// Search order:
/// 1. `start` and its parent directories (walking up to root)
/// 2. Global config at `<config_dir>/debate/`
fn find_config_file_from(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let candidate = dir.join(filename);
        if candidate.exists() {
            return Some(candidate);
        }
        current = dir.parent();
    }

    let global_path = dirs::config_dir()?.join("debate").join(filename);
    global_path.exists().then_some(global_path)
}

/// Top-level debate configuration
#[derive(Debug, Default, Deserialize)]
pub struct DebateFileConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub debate: DebateSectionConfig,
    #[serde(default)]
    pub participants: Vec<ParticipantConfig>,
}

/// LLM configuration section
#[derive(Debug, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_ollama_url")]
    pub url: String,
    #[serde(default = "default_model")]
    pub model: String,
}

/// Default run settings; they only seed the per-call [`RunConfig`]
#[derive(Debug, Deserialize)]
pub struct DebateSectionConfig {
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
    #[serde(default)]
    pub check_consensus: bool,
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "qwen3:14b".to_string()
}

fn default_max_rounds() -> u32 {
    1
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            url: default_ollama_url(),
            model: default_model(),
        }
    }
}

impl Default for DebateSectionConfig {
    fn default() -> Self {
        Self {
            max_rounds: default_max_rounds(),
            check_consensus: false,
        }
    }
}

impl DebateFileConfig {
    /// Load config from .debate.toml
    ///
    /// Search order:
    /// 1. Walk up directory tree from cwd looking for .debate.toml
    /// 2. Check `<config_dir>/debate/.debate.toml` (global fallback)
    /// 3. Fall back to defaults
    pub fn load() -> Result<Self, DebateError> {
        let cwd = std::env::current_dir().map_err(|e| DebateError::ConfigIo(e.to_string()))?;

        if let Some(config_path) = find_config_file_from(&cwd, CONFIG_FILE_NAME) {
            tracing::debug!("Loading config from: {}", config_path.display());
            return Self::load_from_path(&config_path);
        }

        tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, DebateError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DebateError::ConfigIo(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, DebateError> {
        toml::from_str(toml_str).map_err(|e| DebateError::ConfigParse(e.to_string()))
    }

    /// Configured participants, or the built-in roster if none are listed
    pub fn participants(&self) -> Vec<ParticipantConfig> {
        if self.participants.is_empty() {
            default_participants()
        } else {
            self.participants.clone()
        }
    }

    /// Run settings from the `[debate]` section
    pub fn run_config(&self) -> RunConfig {
        RunConfig::new()
            .with_max_rounds(self.debate.max_rounds)
            .with_consensus_check(self.debate.check_consensus)
    }

    pub fn default_model() -> String {
        default_model()
    }

    pub fn default_ollama_url() -> String {
        default_ollama_url()
    }
}
