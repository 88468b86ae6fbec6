//! Shape of a debate result as surfaced over MCP

use debate::DebateResult;
use serde::Serialize;

/// What callers of `run_debate` receive: counts and flags, not the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebateSummary {
    pub topic: String,
    pub consensus_reached: bool,
    pub round_number: u32,
    pub total_responses: usize,
}

impl From<&DebateResult> for DebateSummary {
    fn from(result: &DebateResult) -> Self {
        Self {
            topic: result.topic.clone(),
            consensus_reached: result.consensus_reached,
            round_number: result.round_number,
            total_responses: result.total_responses(),
        }
    }
}

/// Participant as listed by `list_participants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantSummary {
    pub id: String,
    pub role: String,
}
