//! Debate data model
//!
//! The transcript entries, votes, and the mutable state threaded through a
//! single run, plus the result handed back to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One participant's contribution to the transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Identifier of the producing participant
    pub agent_id: String,

    /// Descriptive role label (never used for control flow)
    pub role: String,

    /// Text content, or an `[Error: ...]` marker for a failed turn
    pub content: String,

    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl Response {
    /// Create a response stamped with the current time
    pub fn new(
        agent_id: impl Into<String>,
        role: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            role: role.into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create the marker response recorded in place of a failed turn
    pub fn error_marker(
        agent_id: impl Into<String>,
        role: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::new(agent_id, role, error_marker(message))
    }

    /// Whether this response records a failed turn
    pub fn is_error(&self) -> bool {
        self.content.starts_with("[Error: ") && self.content.ends_with(']')
    }

    /// Render as a transcript line: `{agent_id} ({role}): {content}`
    pub fn transcript_line(&self) -> String {
        format!("{} ({}): {}", self.agent_id, self.role, self.content)
    }
}

/// Format the content used for a failed capability call
pub fn error_marker(message: impl std::fmt::Display) -> String {
    format!("[Error: {}]", message)
}

/// A participant's decision on the current state of the debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteDecision {
    Agree,
    Disagree,
    NeedsRevision,
}

impl VoteDecision {
    /// Derive a decision from free text.
    ///
    /// Contains "agree" but not "disagree" => agree; contains "disagree" =>
    /// disagree; anything else => needs_revision. Matching ignores case:
    /// "Disagree" is disagree and "AGREE." is agree.
    pub fn from_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.contains("agree") && !lowered.contains("disagree") {
            VoteDecision::Agree
        } else if lowered.contains("disagree") {
            VoteDecision::Disagree
        } else {
            VoteDecision::NeedsRevision
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDecision::Agree => "agree",
            VoteDecision::Disagree => "disagree",
            VoteDecision::NeedsRevision => "needs_revision",
        }
    }
}

impl std::fmt::Display for VoteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured vote cast during a consensus check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub agent_id: String,
    pub decision: VoteDecision,
    pub reasoning: String,
    pub timestamp: DateTime<Utc>,
}

impl Vote {
    /// Create a vote stamped with the current time
    pub fn new(
        agent_id: impl Into<String>,
        decision: VoteDecision,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            decision,
            reasoning: reasoning.into(),
            timestamp: Utc::now(),
        }
    }

    /// Build a vote whose decision is derived from the given text
    pub fn from_text(agent_id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let decision = VoteDecision::from_text(&text);
        Self::new(agent_id, decision, text)
    }

    pub fn is_agree(&self) -> bool {
        self.decision == VoteDecision::Agree
    }
}

/// Mutable record owned by a single run
#[derive(Debug, Clone)]
pub struct DebateState {
    topic: String,
    responses: Vec<Response>,
    round_number: u32,
    consensus_reached: bool,
}

impl DebateState {
    /// Fresh state for a new run
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            responses: Vec::new(),
            round_number: 0,
            consensus_reached: false,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn consensus_reached(&self) -> bool {
        self.consensus_reached
    }

    /// Append a response to the transcript.
    ///
    /// Timestamps never go backwards within a run: a response stamped
    /// earlier than the previous entry takes the previous entry's time.
    pub fn append(&mut self, mut response: Response) {
        if let Some(last) = self.responses.last() {
            if response.timestamp < last.timestamp {
                response.timestamp = last.timestamp;
            }
        }
        self.responses.push(response);
    }

    /// Content of every transcript entry, in order
    pub fn contents(&self) -> Vec<String> {
        self.responses.iter().map(|r| r.content.clone()).collect()
    }

    /// Close the current round
    pub fn complete_round(&mut self) -> u32 {
        self.round_number += 1;
        self.round_number
    }

    /// Record a consensus verdict. Once reached it stays reached.
    pub fn record_consensus(&mut self, verdict: bool) {
        self.consensus_reached = self.consensus_reached || verdict;
    }

    /// Consume the state into the caller-facing result
    pub fn into_result(self) -> DebateResult {
        DebateResult {
            topic: self.topic,
            responses: self.responses,
            round_number: self.round_number,
            consensus_reached: self.consensus_reached,
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateResult {
    pub topic: String,
    pub responses: Vec<Response>,
    pub round_number: u32,
    pub consensus_reached: bool,
}

impl DebateResult {
    pub fn total_responses(&self) -> usize {
        self.responses.len()
    }

    /// Responses that record a failed turn
    pub fn errors(&self) -> impl Iterator<Item = &Response> {
        self.responses.iter().filter(|r| r.is_error())
    }
}
