//! Debate CLI
//!
//! Runs multi-agent debates from the command line.
//!
//! Usage:
//!   debate run --topic "Should we rewrite it in Rust?" --max-rounds 3 --check-consensus
//!   debate run --topic "..." --provider mock --json
//!   debate run --topic "..." --no-check-consensus
//!   debate participants list

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use debate::participants::DEFAULT_MOCK_RESPONSE;
use debate::{build_roster, DebateFileConfig, DebateResult, Orchestrator, ProviderKind};

#[derive(Parser)]
#[command(name = "debate")]
#[command(about = "Structured multi-agent debates with consensus detection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Ollama server URL
    #[arg(long, env = "OLLAMA_URL", global = true)]
    ollama_url: Option<String>,

    /// Default model for participants without an override
    #[arg(short = 'm', long, env = "OLLAMA_MODEL", global = true)]
    model: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a debate
    Run {
        /// Topic to debate
        #[arg(long, short)]
        topic: String,

        /// Round ceiling (checked after each round; 0 still runs one round)
        #[arg(long)]
        max_rounds: Option<u32>,

        /// Stop early once every participant votes agree
        #[arg(long, overrides_with = "no_check_consensus")]
        check_consensus: bool,

        /// Run every round even if `.debate.toml` enables consensus checks
        #[arg(long, overrides_with = "check_consensus")]
        no_check_consensus: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Backend participants talk to
        #[arg(long, value_enum, default_value_t = Provider::Ollama)]
        provider: Provider,
    },
    /// Participant management
    Participants {
        #[command(subcommand)]
        command: ParticipantCommands,
    },
}

#[derive(Subcommand)]
enum ParticipantCommands {
    /// List configured participants in turn order
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum Provider {
    Ollama,
    Mock,
}

/// Consensus setting from the command line, `None` keeps the file's value
fn consensus_override(check: bool, no_check: bool) -> Option<bool> {
    match (check, no_check) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Initialize tracing with the given verbosity level
///
/// - 0: warn (default)
/// - 1: info (-v)
/// - 2: debug (-vv)
/// - 3+: trace (-vvv)
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Allow RUST_LOG to override if set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file_config = DebateFileConfig::load()?;

    let ollama_url = cli
        .ollama_url
        .unwrap_or_else(|| file_config.llm.url.clone());
    let model = cli.model.unwrap_or_else(|| file_config.llm.model.clone());

    match cli.command {
        Commands::Run {
            topic,
            max_rounds,
            check_consensus,
            no_check_consensus,
            json,
            provider,
        } => {
            let provider = match provider {
                Provider::Ollama => ProviderKind::Ollama { url: ollama_url },
                Provider::Mock => ProviderKind::Mock {
                    response: DEFAULT_MOCK_RESPONSE.to_string(),
                },
            };

            let mut run_config = file_config.run_config();
            if let Some(max_rounds) = max_rounds {
                run_config = run_config.with_max_rounds(max_rounds);
            }
            if let Some(check) = consensus_override(check_consensus, no_check_consensus) {
                run_config = run_config.with_consensus_check(check);
            }

            let roster = build_roster(&file_config.participants(), &provider, &model);
            let orchestrator = Orchestrator::new(roster)?;

            let result = orchestrator.run(&topic, run_config).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
        }

        Commands::Participants {
            command: ParticipantCommands::List,
        } => {
            println!("Participants (turn order):\n");
            for (i, p) in file_config.participants().iter().enumerate() {
                let model = p.model.as_deref().unwrap_or(&model);
                println!("  {}. {} ({}) - {}", i + 1, p.id, p.role, model);
            }
        }
    }

    Ok(())
}

fn print_result(result: &DebateResult) {
    println!("\n{}", "═".repeat(60));
    println!("  DEBATE: {}", result.topic);
    println!("{}\n", "═".repeat(60));

    for response in &result.responses {
        println!(
            "[{}] {} ({})",
            response.timestamp.format("%H:%M:%S"),
            response.agent_id,
            response.role
        );
        println!("{}\n", response.content);
    }

    println!("{}", "─".repeat(60));
    println!("Rounds: {}", result.round_number);
    println!("Responses: {}", result.total_responses());
    println!(
        "Consensus: {}",
        if result.consensus_reached { "reached" } else { "not reached" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_flags(args: &[&str]) -> (bool, bool) {
        let mut argv = vec!["debate", "run", "--topic", "t"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Run {
                check_consensus,
                no_check_consensus,
                ..
            } => (check_consensus, no_check_consensus),
            Commands::Participants { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_consensus_flags_absent_keep_file_value() {
        let (check, no_check) = run_flags(&[]);
        assert_eq!(consensus_override(check, no_check), None);
    }

    #[test]
    fn test_no_check_consensus_disables() {
        let (check, no_check) = run_flags(&["--no-check-consensus"]);
        assert_eq!(consensus_override(check, no_check), Some(false));

        let config = debate::RunConfig::new().with_consensus_check(true);
        let config = match consensus_override(check, no_check) {
            Some(value) => config.with_consensus_check(value),
            None => config,
        };
        assert!(!config.check_consensus);
    }

    #[test]
    fn test_last_consensus_flag_wins() {
        let (check, no_check) = run_flags(&["--no-check-consensus", "--check-consensus"]);
        assert_eq!(consensus_override(check, no_check), Some(true));

        let (check, no_check) = run_flags(&["--check-consensus", "--no-check-consensus"]);
        assert_eq!(consensus_override(check, no_check), Some(false));
    }
}
