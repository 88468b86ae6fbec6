//! Tracing setup for the stdio server
//!
//! stdout carries the MCP protocol, so every log line goes to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT=json` selects JSON; anything else is plain text
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(v) => Self::parse(&v),
            Err(_) => LogFormat::Text,
        }
    }

    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Install the global subscriber. `RUST_LOG` adds to the default
/// `debate=info,debate_mcp=info` directives.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("debate=info".parse()?)
        .add_directive("debate_mcp=info".parse()?);

    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_format() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
    }
}
