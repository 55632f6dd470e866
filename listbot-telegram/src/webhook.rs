//! Webhook runner: registers the public URL with Telegram and serves updates over HTTP.
//!
//! Routes (any other method/path is 404):
//! - `GET /` liveness text
//! - `POST /<secret path>` one JSON update; 200 `ok` once processed (handler failures included,
//!   so Telegram does not re-deliver), 500 `error` when the body is not an update

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    Router,
};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use teloxide::types::Update;
use tracing::{error, info, instrument, warn};

use super::runner::dispatch_update;

pub const LIVENESS_TEXT: &str = "Bot is running! 🤖";

/// Where Telegram delivers updates and where the server listens.
#[derive(Debug, Clone)]
pub struct WebhookOptions {
    /// Public host (no scheme); Telegram is told `https://<host>/<secret_path>`.
    pub host: String,
    /// Path segment only Telegram knows; the bot token by convention.
    pub secret_path: String,
    pub listen_addr: SocketAddr,
}

impl WebhookOptions {
    pub fn url(&self) -> Result<reqwest::Url> {
        let raw = format!(
            "https://{}/{}",
            self.host.trim_end_matches('/'),
            self.secret_path.trim_start_matches('/')
        );
        reqwest::Url::parse(&raw).map_err(|e| anyhow::anyhow!("Invalid webhook host '{}': {}", self.host, e))
    }
}

struct WebhookState {
    chain: HandlerChain,
    path: String,
}

/// Builds the HTTP app. A single fallback route keeps unknown methods at 404 rather than 405.
pub fn webhook_router(chain: HandlerChain, secret_path: &str) -> Router {
    let state = Arc::new(WebhookState {
        chain,
        path: format!("/{}", secret_path.trim_start_matches('/')),
    });
    Router::new().fallback(serve).with_state(state)
}

async fn serve(
    State(state): State<Arc<WebhookState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let path = uri.path();
    if method == Method::GET && path == "/" {
        return (StatusCode::OK, LIVENESS_TEXT);
    }
    if method != Method::POST || path != state.path {
        return (StatusCode::NOT_FOUND, "not found");
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, "Webhook body is not a Telegram update");
            return (StatusCode::INTERNAL_SERVER_ERROR, "error");
        }
    };
    dispatch_update(&state.chain, &update).await;
    (StatusCode::OK, "ok")
}

/// Registers the webhook (failure is logged, not fatal) and serves until Ctrl-C.
#[instrument(skip(bot, handler_chain, options), fields(listen_addr = %options.listen_addr))]
pub async fn run_webhook(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    options: WebhookOptions,
) -> Result<()> {
    let url = options.url()?;
    // The URL embeds the token; only the host is logged.
    match bot.set_webhook(url).await {
        Ok(_) => info!(host = %options.host, "Webhook registered"),
        Err(e) => error!(error = %e, host = %options.host, "Failed to register webhook"),
    }

    let listener = tokio::net::TcpListener::bind(options.listen_addr).await?;
    info!(addr = %options.listen_addr, "Bot started in webhook mode");
    axum::serve(listener, webhook_router(handler_chain, &options.secret_path))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Webhook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
}
