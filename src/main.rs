//! CodeCrafter - AI Code Actions from the Terminal
//!
//! Thin CLI host around the CodeCrafter action pipeline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use codecrafter::action::ActionKind;
use codecrafter::client::RemoteActionClient;
use codecrafter::config::Config;
use codecrafter::host::StdioHost;
use codecrafter::orchestrator::{ActionOrchestrator, Phase};
use std::io::Read;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the CodeCrafter backend
    #[arg(long, default_value = "http://localhost:8501")]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate code from the selected text
    Generate {
        /// Declared language of the active document
        #[arg(short, long, default_value = "plaintext")]
        language: String,

        /// Selection content; read from stdin when omitted
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Explain the selected code
    Explain {
        /// Declared language of the active document
        #[arg(short, long, default_value = "plaintext")]
        language: String,

        /// Selection content; read from stdin when omitted
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Check that the backend is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config {
        endpoint: args.endpoint,
        request_timeout: args.timeout,
    };
    let client = RemoteActionClient::new(&config);

    let (kind, language, text) = match args.command {
        Command::Check => {
            if client.health_check().await {
                info!("✅ Backend reachable at {}", config.endpoint);
                return Ok(());
            }
            eprintln!("error: backend not reachable at {}", config.endpoint);
            std::process::exit(1);
        }
        Command::Generate { language, text } => (ActionKind::GenerateCode, language, text),
        Command::Explain { language, text } => (ActionKind::ExplainCode, language, text),
    };

    let selection = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let host = Arc::new(StdioHost::new(selection, language));
    let orchestrator = ActionOrchestrator::new(Arc::new(client), host);

    match orchestrator.run(kind).await {
        Phase::Done => Ok(()),
        _ => std::process::exit(1),
    }
}
