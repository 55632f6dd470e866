//! Wiring: tracing, record load, outbound bot, handler chain, then polling or webhook.

use std::sync::Arc;

use anyhow::Result;
use handler_chain::HandlerChain;
use handlers::{LoggingHandler, Responder, ResponderConfig};
use listbot_core::{init_tracing, render_record, Bot, RecordStore};
use listbot_telegram::{run_polling, run_webhook, TelegramBotAdapter};
use rand::seq::IteratorRandom;
use record_loader::RecordSource;
use tracing::{info, instrument, warn};

use crate::config::BotConfig;

/// Wraps the Telegram adapter with URL masking when the `mask-urls` feature is on.
pub fn build_outbound_bot(bot: teloxide::Bot) -> Arc<dyn Bot> {
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(bot));
    #[cfg(feature = "mask-urls")]
    let adapter: Arc<dyn Bot> = Arc::new(listbot_core::MaskingBot::new(adapter));
    adapter
}

/// Chain order: LoggingHandler, then Responder.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    records: Option<Arc<RecordStore>>,
    config: ResponderConfig,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(Responder::new(bot, records, config)))
}

/// Main entry: validate config, init logging, load records once, then serve updates until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        records = %config.records,
        inline_mode = %config.responder.inline_mode,
        webhook = config.webhook.is_some(),
        mask_urls = cfg!(feature = "mask-urls"),
        "Initializing bot"
    );

    let records = record_loader::load(&config.records).await.map(Arc::new);
    if records.is_none() {
        warn!("Starting without records; every request will get the no-data answer");
    }

    let teloxide_bot = config.telegram.build_bot()?;
    let chain = build_handler_chain(
        build_outbound_bot(teloxide_bot.clone()),
        records,
        config.responder.clone(),
    );

    match config.webhook {
        Some(options) => run_webhook(teloxide_bot, chain, options).await,
        None => run_polling(teloxide_bot, chain).await,
    }
}

/// Renders `count` distinct random records exactly as the bot would send them.
pub fn preview(store: &RecordStore, count: usize, reference_url: Option<&str>) -> Vec<String> {
    let mut rng = rand::thread_rng();
    store
        .records()
        .iter()
        .choose_multiple(&mut rng, count)
        .into_iter()
        .map(|record| outbound_text(render_record(record, reference_url)))
        .collect()
}

#[cfg(feature = "mask-urls")]
fn outbound_text(text: String) -> String {
    listbot_core::mask_urls(&text)
}

#[cfg(not(feature = "mask-urls"))]
fn outbound_text(text: String) -> String {
    text
}

/// `listbot preview`: load the list and print a few rendered records to stdout.
pub async fn run_preview(source: RecordSource, count: usize, reference_url: Option<String>) -> Result<()> {
    let Some(store) = record_loader::load(&source).await else {
        anyhow::bail!("No records could be loaded from {}", source);
    };
    println!("Loaded {} record(s) from {}\n", store.len(), source);
    for text in preview(&store, count, reference_url.as_deref()) {
        println!("{}\n{}", text, "-".repeat(40));
    }
    Ok(())
}
