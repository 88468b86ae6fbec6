//! MCP parameter types for debate tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_max_rounds() -> u32 {
    1
}

/// Parameters for the run_debate tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RunDebateParams {
    /// Topic the participants debate
    pub topic: String,

    /// Round ceiling, checked after each round (0 still runs one round)
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,

    /// Stop early once every participant votes agree
    #[serde(default)]
    pub check_consensus: bool,
}

/// Parameters for the list_participants tool
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListParticipantsParams {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_debate_defaults() {
        let params: RunDebateParams =
            serde_json::from_value(serde_json::json!({ "topic": "Rust vs Go" })).unwrap();

        assert_eq!(params.topic, "Rust vs Go");
        assert_eq!(params.max_rounds, 1);
        assert!(!params.check_consensus);
    }

    #[test]
    fn test_negative_rounds_rejected() {
        let parsed: Result<RunDebateParams, _> =
            serde_json::from_value(serde_json::json!({ "topic": "t", "max_rounds": -1 }));
        assert!(parsed.is_err());
    }
}
