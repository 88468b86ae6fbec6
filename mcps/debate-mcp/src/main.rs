//! Debate MCP Server
//!
//! Serves the `run_debate` tool over stdio. Participants come from
//! `.debate.toml`; `DEBATE_PROVIDER` selects the backend (ollama or mock).

use debate_mcp::DebateMcpServer;
use rmcp::{transport::io::stdio, ServiceExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    debate_mcp::logging::init_tracing()?;

    tracing::info!("Starting Debate MCP server");

    let server = DebateMcpServer::from_env()?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Debate MCP server running");

    service.waiting().await?;

    tracing::info!("Debate MCP server stopped");

    Ok(())
}
