//! Application config: Telegram access, logging, record source, responder behaviour and transport.
//! Loaded from env (after `.env`); the CLI token overrides BOT_TOKEN.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use handlers::{InlineMode, ResponderConfig};
use listbot_core::DEFAULT_REFERENCE_URL;
use listbot_telegram::{TelegramConfig, WebhookOptions};
use record_loader::RecordSource;

const DEFAULT_LOG_FILE: &str = "logs/listbot.log";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
    /// RECORDS_PATH, else RECORDS_URL, else the public list
    pub records: RecordSource,
    /// INLINE_MODE and REFERENCE_URL
    pub responder: ResponderConfig,
    /// Set when WEBHOOK_HOST is; polling otherwise.
    pub webhook: Option<WebhookOptions>,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let webhook = match non_empty_var("WEBHOOK_HOST") {
            Some(host) => Some(WebhookOptions {
                host,
                secret_path: telegram.bot_token.clone(),
                listen_addr: listen_addr_from_env()?,
            }),
            None => None,
        };

        Ok(Self {
            telegram,
            log_file,
            records: record_source_from_env(),
            responder: responder_config_from_env()?,
            webhook,
        })
    }

    /// Checks values that can only fail at runtime (API URL, webhook host).
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if let Some(webhook) = &self.webhook {
            webhook.url()?;
        }
        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// RECORDS_PATH wins over RECORDS_URL.
pub fn record_source_from_env() -> RecordSource {
    if let Some(path) = non_empty_var("RECORDS_PATH") {
        return RecordSource::Path(PathBuf::from(path));
    }
    match non_empty_var("RECORDS_URL") {
        Some(url) => RecordSource::Url(url),
        None => RecordSource::default(),
    }
}

/// INLINE_MODE defaults to `prompt`. REFERENCE_URL unset uses the public registry link; empty disables it.
pub fn responder_config_from_env() -> Result<ResponderConfig> {
    let inline_mode = match non_empty_var("INLINE_MODE") {
        Some(raw) => raw
            .parse::<InlineMode>()
            .map_err(|e| anyhow::anyhow!("INLINE_MODE: {}", e))?,
        None => InlineMode::default(),
    };
    let reference_url = match env::var("REFERENCE_URL") {
        Ok(url) if url.trim().is_empty() => None,
        Ok(url) => Some(url),
        Err(_) => Some(DEFAULT_REFERENCE_URL.to_string()),
    };
    Ok(ResponderConfig {
        inline_mode,
        reference_url,
    })
}

/// LISTEN_ADDR, else `0.0.0.0:$PORT`, else `0.0.0.0:8000`.
fn listen_addr_from_env() -> Result<SocketAddr> {
    if let Some(addr) = non_empty_var("LISTEN_ADDR") {
        return addr
            .parse()
            .with_context(|| format!("LISTEN_ADDR is not a socket address: {}", addr));
    }
    let port = match non_empty_var("PORT") {
        Some(port) => port
            .parse::<u16>()
            .with_context(|| format!("PORT is not a port number: {}", port))?,
        None => DEFAULT_PORT,
    };
    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}
