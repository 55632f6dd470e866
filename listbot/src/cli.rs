//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "listbot")]
#[command(about = "Telegram bot serving random entries from the list of extremist materials", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Load the record list and print a few random records as the bot would render them.
    Preview {
        #[arg(short, long, default_value = "3")]
        count: usize,
    },
}
