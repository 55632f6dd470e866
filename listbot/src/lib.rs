//! # listbot
//!
//! Application crate: env config, CLI and the wiring that turns them into a running bot.

pub mod cli;
pub mod config;
pub mod runner;

pub use config::{record_source_from_env, responder_config_from_env, BotConfig};
pub use runner::{build_handler_chain, build_outbound_bot, preview, run_bot, run_preview};
