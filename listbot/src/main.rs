//! listbot CLI: run the bot or preview rendered records. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use listbot::cli::{Cli, Commands};
use listbot::{record_source_from_env, responder_config_from_env, run_bot, run_preview, BotConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Preview { count } => {
            // Console-only logging so load errors are visible.
            tracing_subscriber::fmt()
                .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
                .with_target(false)
                .init();
            let responder = responder_config_from_env()?;
            run_preview(record_source_from_env(), count, responder.reference_url).await
        }
    }
}
