//! Debate execution engine
//!
//! Drives a debate as an explicit state machine:
//!
//! ```text
//! Init -> Turn(0) -> ... -> Turn(N-1) -> RoundEnd -> { Turn(0) | Terminated }
//! ```
//!
//! - Each turn sees the whole transcript accumulated so far
//! - A failed provider call becomes an `[Error: ...]` response
//! - Round end bumps the round counter and, if requested, checks consensus
//! - `max_rounds` is checked after a round, so `max_rounds = 0` still runs one

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use crate::agent::AgentPort;
use crate::consensus::VoteAggregator;
use crate::error::DebateError;
use crate::prompts;
use crate::types::{DebateResult, DebateState, Response};

/// Per-call run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Round ceiling, checked after each completed round
    pub max_rounds: u32,

    /// Poll for unanimous agreement at the end of every round
    pub check_consensus: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_rounds: 1,
            check_consensus: false,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_consensus_check(mut self, check_consensus: bool) -> Self {
        self.check_consensus = check_consensus;
        self
    }
}

/// Position of a run in the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Turn(usize),
    RoundEnd,
    Terminated,
}

/// Round-based debate orchestrator
///
/// Holds only the participant roster. Every call to [`Orchestrator::run`]
/// starts from a fresh [`DebateState`] and its own [`RunConfig`].
pub struct Orchestrator {
    participants: Vec<Arc<dyn AgentPort>>,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<&str> = self.participants.iter().map(|p| p.agent_id()).collect();
        f.debug_struct("Orchestrator").field("participants", &ids).finish()
    }
}

impl Orchestrator {
    /// Create an orchestrator for a fixed, ordered roster.
    ///
    /// Fails if any participant id is blank or appears twice. An empty
    /// roster is valid and yields empty debates.
    pub fn new(participants: Vec<Arc<dyn AgentPort>>) -> Result<Self, DebateError> {
        let mut seen = HashSet::new();
        for participant in &participants {
            let id = participant.agent_id();
            if id.trim().is_empty() {
                return Err(DebateError::EmptyParticipantId);
            }
            if !seen.insert(id.to_string()) {
                return Err(DebateError::DuplicateParticipant(id.to_string()));
            }
        }

        Ok(Self { participants })
    }

    /// Participants in turn order
    pub fn participants(&self) -> &[Arc<dyn AgentPort>] {
        &self.participants
    }

    /// Run a debate on `topic`.
    ///
    /// Provider failures never abort the run. Dropping the returned future
    /// abandons the run and discards its partial state.
    pub async fn run(&self, topic: &str, config: RunConfig) -> DebateResult {
        let started = Instant::now();
        tracing::info!(
            topic,
            participants = self.participants.len(),
            max_rounds = config.max_rounds,
            check_consensus = config.check_consensus,
            "Starting debate"
        );

        let mut state = DebateState::new(topic);
        let mut phase = Phase::Init;

        while phase != Phase::Terminated {
            phase = self.step(phase, &mut state, config).await;
        }

        let result = state.into_result();
        tracing::info!(
            rounds = result.round_number,
            responses = result.total_responses(),
            errors = result.errors().count(),
            consensus = result.consensus_reached,
            duration_ms = started.elapsed().as_millis() as u64,
            "Debate finished"
        );
        result
    }

    /// Execute one state and return the next
    async fn step(&self, phase: Phase, state: &mut DebateState, config: RunConfig) -> Phase {
        match phase {
            Phase::Init => {
                if self.participants.is_empty() {
                    Phase::RoundEnd
                } else {
                    Phase::Turn(0)
                }
            }

            Phase::Turn(index) => {
                self.take_turn(index, state).await;
                if index + 1 < self.participants.len() {
                    Phase::Turn(index + 1)
                } else {
                    Phase::RoundEnd
                }
            }

            Phase::RoundEnd => {
                // No participants means no round was played.
                if self.participants.is_empty() {
                    return Phase::Terminated;
                }
                self.end_round(state, config).await;
                Self::next_after_round(state, config)
            }

            Phase::Terminated => Phase::Terminated,
        }
    }

    /// Ask participant `index` for its contribution and record it
    async fn take_turn(&self, index: usize, state: &mut DebateState) {
        let participant = &self.participants[index];
        let prompt = prompts::turn_prompt(state.topic(), state.responses());

        let response = match participant.process(&prompt).await {
            Ok(content) => Response::new(participant.agent_id(), participant.role(), content),
            Err(e) => {
                tracing::warn!(
                    agent = participant.agent_id(),
                    round = state.round_number() + 1,
                    error = %e,
                    "Turn failed, recording error response"
                );
                Response::error_marker(participant.agent_id(), participant.role(), &e)
            }
        };

        tracing::debug!(
            agent = participant.agent_id(),
            round = state.round_number() + 1,
            chars = response.content.len(),
            "Turn complete"
        );
        state.append(response);
    }

    /// Round-end bookkeeping: bump the counter, optionally check consensus
    async fn end_round(&self, state: &mut DebateState, config: RunConfig) {
        let round = state.complete_round();

        if config.check_consensus && round >= 1 && !state.responses().is_empty() {
            let contents = state.contents();
            let verdict = VoteAggregator::check(&self.participants, state.topic(), &contents).await;
            state.record_consensus(verdict);
        }

        tracing::info!(round, consensus = state.consensus_reached(), "Round complete");
    }

    /// Continuation predicate evaluated right after round end
    fn next_after_round(state: &DebateState, config: RunConfig) -> Phase {
        if state.consensus_reached() {
            Phase::Terminated
        } else if state.round_number() < config.max_rounds {
            Phase::Turn(0)
        } else {
            Phase::Terminated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;

    fn roster(ids: &[&str]) -> Vec<Arc<dyn AgentPort>> {
        ids.iter()
            .map(|id| Arc::new(Agent::new(*id, "analyst")) as Arc<dyn AgentPort>)
            .collect()
    }

    #[test]
    fn test_run_config_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.max_rounds, 1);
        assert!(!config.check_consensus);

        let config = RunConfig::new().with_max_rounds(3).with_consensus_check(true);
        assert_eq!(config.max_rounds, 3);
        assert!(config.check_consensus);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Orchestrator::new(roster(&["a", "b", "a"])).unwrap_err();
        assert!(matches!(err, DebateError::DuplicateParticipant(id) if id == "a"));
    }

    #[test]
    fn test_rejects_blank_id() {
        let err = Orchestrator::new(roster(&["a", "  "])).unwrap_err();
        assert!(matches!(err, DebateError::EmptyParticipantId));
    }

    #[test]
    fn test_continuation_predicate() {
        let config = RunConfig::new().with_max_rounds(2);
        let mut state = DebateState::new("t");

        state.complete_round();
        assert_eq!(Orchestrator::next_after_round(&state, config), Phase::Turn(0));

        state.complete_round();
        assert_eq!(Orchestrator::next_after_round(&state, config), Phase::Terminated);

        let mut agreed = DebateState::new("t");
        agreed.complete_round();
        agreed.record_consensus(true);
        assert_eq!(Orchestrator::next_after_round(&agreed, config), Phase::Terminated);
    }

    #[tokio::test]
    async fn test_step_transitions() {
        let orchestrator = Orchestrator::new(roster(&["a", "b"])).unwrap();
        let config = RunConfig::default();
        let mut state = DebateState::new("t");

        let phase = orchestrator.step(Phase::Init, &mut state, config).await;
        assert_eq!(phase, Phase::Turn(0));
        let phase = orchestrator.step(phase, &mut state, config).await;
        assert_eq!(phase, Phase::Turn(1));
        let phase = orchestrator.step(phase, &mut state, config).await;
        assert_eq!(phase, Phase::RoundEnd);
        let phase = orchestrator.step(phase, &mut state, config).await;
        assert_eq!(phase, Phase::Terminated);

        assert_eq!(state.responses().len(), 2);
        assert_eq!(state.round_number(), 1);
    }

    #[tokio::test]
    async fn test_empty_roster_yields_empty_result() {
        let orchestrator = Orchestrator::new(Vec::new()).unwrap();
        let result = orchestrator
            .run("t", RunConfig::new().with_max_rounds(3).with_consensus_check(true))
            .await;

        assert_eq!(result.round_number, 0);
        assert!(result.responses.is_empty());
        assert!(!result.consensus_reached);
    }

    #[tokio::test]
    async fn test_second_turn_sees_first_response() {
        let orchestrator = Orchestrator::new(roster(&["a", "b"])).unwrap();
        let result = orchestrator.run("Topic X", RunConfig::default()).await;

        assert_eq!(
            result.responses[0].content,
            "Agent a (analyst) received: Topic: Topic X\n\nProvide your initial response:"
        );
        assert!(result.responses[1].content.contains("Previous responses:\na (analyst): "));
    }
}
