//! Debate MCP Server
//!
//! Exposes the debate orchestrator over the MCP protocol.
//!
//! # Tools
//!
//! - `run_debate` - run a debate and report topic, rounds, response count, and consensus
//! - `list_participants` - list the configured participants in turn order
//!
//! # Architecture
//!
//! - `params` - MCP parameter types
//! - `summary` - result shapes returned to callers
//! - `server` - MCP server implementation
//! - `logging` - stderr tracing setup

pub mod logging;
pub mod params;
pub mod server;
pub mod summary;

pub use server::DebateMcpServer;
pub use summary::{DebateSummary, ParticipantSummary};
