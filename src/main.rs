//! deskbot: IM dialog gateway for order inquiries

use clap::{Parser, Subcommand};
use deskbot::commands;
use deskbot::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "deskbot", version, about = "Session-scoped dialog gateway for order inquiries")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP gateway
    Serve {
        /// Port to listen on (overrides DESKBOT_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Interactive session on the terminal
    Repl,
    /// Drive concurrent three-turn flows against a running gateway
    Bench {
        /// Chat endpoint to target
        #[arg(long, default_value = "http://127.0.0.1:8000/chat")]
        url: String,
        /// Number of concurrent flows
        #[arg(short, long, default_value_t = 5)]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deskbot=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            commands::serve::run(config).await
        }
        Command::Repl => commands::repl::run(config).await,
        Command::Bench { url, concurrency } => commands::bench::run(url, concurrency).await,
    }
}
