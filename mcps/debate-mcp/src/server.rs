//! Debate MCP Server implementation

use std::sync::Arc;

use debate::{build_roster, DebateFileConfig, Orchestrator, ProviderKind, RunConfig};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::params::{ListParticipantsParams, RunDebateParams};
use crate::summary::{DebateSummary, ParticipantSummary};

/// Debate MCP Server
#[derive(Clone)]
pub struct DebateMcpServer {
    /// MCP tool router
    tool_router: ToolRouter<Self>,

    /// The engine; the lock keeps at most one debate in flight
    orchestrator: Arc<Mutex<Orchestrator>>,

    /// Roster snapshot for listing without taking the run lock
    participants: Arc<Vec<ParticipantSummary>>,
}

fn json_result<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(format!("JSON error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl DebateMcpServer {
    /// Wrap an already-built orchestrator
    pub fn new(orchestrator: Orchestrator) -> Self {
        let participants = orchestrator
            .participants()
            .iter()
            .map(|p| ParticipantSummary {
                id: p.agent_id().to_string(),
                role: p.role().to_string(),
            })
            .collect();

        Self {
            tool_router: Self::tool_router(),
            orchestrator: Arc::new(Mutex::new(orchestrator)),
            participants: Arc::new(participants),
        }
    }

    /// Build from `.debate.toml` and the `DEBATE_PROVIDER` / `OLLAMA_URL` /
    /// `OLLAMA_MODEL` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let config = DebateFileConfig::load()?;

        let url = std::env::var("OLLAMA_URL").unwrap_or_else(|_| config.llm.url.clone());
        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| config.llm.model.clone());
        let provider_name = std::env::var("DEBATE_PROVIDER").unwrap_or_else(|_| "ollama".into());
        let provider = ProviderKind::from_name(&provider_name, &url)?;

        let roster = build_roster(&config.participants(), &provider, &model);
        let orchestrator = Orchestrator::new(roster)?;

        tracing::info!(
            provider = %provider_name,
            model = %model,
            participants = orchestrator.participants().len(),
            "Debate server configured"
        );

        Ok(Self::new(orchestrator))
    }

    /// Run a debate, waiting for any debate already in flight to finish
    pub async fn run(&self, params: RunDebateParams) -> Result<DebateSummary, McpError> {
        if params.topic.trim().is_empty() {
            return Err(McpError::invalid_params("topic must not be empty", None));
        }

        let config = RunConfig::new()
            .with_max_rounds(params.max_rounds)
            .with_consensus_check(params.check_consensus);

        let orchestrator = self.orchestrator.lock().await;
        let result = orchestrator.run(&params.topic, config).await;

        Ok(DebateSummary::from(&result))
    }

    pub fn participant_summaries(&self) -> &[ParticipantSummary] {
        &self.participants
    }

    // ========================================================================
    // MCP Tool Handlers
    // ========================================================================

    #[tool(
        description = "Run a multi-agent debate on a topic. Participants take turns in fixed order \
                       for up to max_rounds rounds (default 1; 0 still runs one round). With \
                       check_consensus, the debate stops early once every participant votes agree. \
                       Returns topic, consensus_reached, round_number, and total_responses."
    )]
    async fn run_debate(
        &self,
        Parameters(params): Parameters<RunDebateParams>,
    ) -> Result<CallToolResult, McpError> {
        let summary = self.run(params).await?;
        json_result(&summary)
    }

    #[tool(description = "List the debate participants in turn order with their roles")]
    async fn list_participants(
        &self,
        Parameters(_params): Parameters<ListParticipantsParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = serde_json::json!({
            "participants": self.participants.as_slice(),
            "total": self.participants.len(),
        });
        json_result(&response)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for DebateMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Debate MCP server. Runs structured multi-agent debates with optional \
                 unanimous-consensus early stopping."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
