//! Minimal Telegram connectivity config: token and API URL.
//! Loaded from BOT_TOKEN and TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::Result;
use std::env;

/// Telegram access settings shared by the polling and webhook runners.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from environment. `token` overrides BOT_TOKEN; an empty token is treated as unset.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|u| !u.is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Rejects a malformed API URL before any request is made.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.telegram_api_url {
            reqwest::Url::parse(url)
                .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL '{}': {}", url, e))?;
        }
        Ok(())
    }

    /// Creates the teloxide bot, pointing it at the custom API URL when one is set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(&self.bot_token);
        match &self.telegram_api_url {
            Some(url) => Ok(bot.set_api_url(reqwest::Url::parse(url)?)),
            None => Ok(bot),
        }
    }
}
