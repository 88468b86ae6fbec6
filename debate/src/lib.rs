//! Round-based multi-agent debate orchestration
//!
//! This crate provides:
//! - The [`AgentPort`] capability participants implement, and an LLM-backed [`Agent`]
//! - An [`Orchestrator`] that runs participants in fixed order, round after round
//! - Unanimous consensus detection via [`VoteAggregator`]
//! - `.debate.toml` configuration with a built-in participant roster
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use debate::{Agent, AgentPort, Orchestrator, RunConfig};
//!
//! let participants: Vec<Arc<dyn AgentPort>> = vec![
//!     Arc::new(Agent::new("p1", "analyst")),
//!     Arc::new(Agent::new("p2", "critic")),
//! ];
//! let orchestrator = Orchestrator::new(participants)?;
//!
//! let result = orchestrator
//!     .run("Should we adopt Rust?", RunConfig::new().with_max_rounds(3).with_consensus_check(true))
//!     .await;
//! ```

pub mod agent;
pub mod config;
pub mod consensus;
pub mod engine;
pub mod error;
pub mod llm;
pub mod participants;
pub mod prompts;
pub mod types;

pub use agent::{Agent, AgentPort};
pub use config::DebateFileConfig;
pub use consensus::VoteAggregator;
pub use engine::{Orchestrator, Phase, RunConfig};
pub use error::{DebateError, ProviderError};
pub use participants::{build_roster, default_participants, ParticipantConfig, ProviderKind};
pub use types::{DebateResult, DebateState, Response, Vote, VoteDecision};
