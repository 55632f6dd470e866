//! # listbot-telegram
//!
//! Telegram transport layer: adapters, [`listbot_core::Bot`] implementation, connectivity config,
//! long-polling and webhook runners. Handles only Telegram connectivity and handler-chain execution;
//! no record loading or reply logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;
mod webhook;

pub use adapters::{
    is_start_command, message_to_event, update_to_event, TelegramMessageWrapper,
    TelegramUserWrapper,
};
pub use bot_adapter::{to_inline_result, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{dispatch_update, run_polling};
pub use webhook::{run_webhook, webhook_router, WebhookOptions, LIVENESS_TEXT};
