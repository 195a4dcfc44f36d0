//! weatherwear CLI, the main entry point.
//!
//! Commands:
//! - `gateway` Start the HTTP server
//! - `ask`     Answer one question from the terminal
//! - `config`  Print the default configuration file
//! - `doctor`  Check configuration and API keys

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "weatherwear",
    about = "weatherwear: current weather and what to wear",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway server
    Gateway {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask the assistant a single question
    Ask {
        /// The question, e.g. "What should I wear in Mumbai today?"
        #[arg(short, long)]
        message: String,

        /// Also print every tool call and result of the conversation
        #[arg(long)]
        history: bool,
    },

    /// Print the default config.toml
    Config,

    /// Diagnose configuration and API keys
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }

    match cli.command {
        Commands::Gateway { port } => commands::gateway::run(port).await?,
        Commands::Ask { message, history } => commands::ask::run(&message, history).await?,
        Commands::Config => commands::config_cmd::run(),
        Commands::Doctor => commands::doctor::run()?,
    }

    Ok(())
}
