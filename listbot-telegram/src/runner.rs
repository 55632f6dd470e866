//! Long-polling runner: converts every teloxide update to a core [`Event`] and hands it to the HandlerChain.

use anyhow::Result;
use handler_chain::HandlerChain;
use listbot_core::Event;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::update_to_event;

/// Processes one update. Unsupported update kinds are skipped.
/// Chain errors stop at this boundary: they are logged and never reach the transport.
pub async fn dispatch_update(chain: &HandlerChain, update: &Update) {
    let Some(event) = update_to_event(update) else {
        debug!(update_id = ?update.id, "Ignoring unsupported update");
        return;
    };
    dispatch_event(chain, &event).await;
}

async fn dispatch_event(chain: &HandlerChain, event: &Event) {
    if let Err(e) = chain.handle(event).await {
        error!(
            error = %e,
            event = event.kind(),
            user_id = event.user().id,
            "Handler chain failed"
        );
    }
}

/// Starts long polling with the given teloxide Bot and HandlerChain until Ctrl-C.
/// A failing event never stops the dispatcher.
#[instrument(skip(bot, handler_chain))]
pub async fn run_polling(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity resolved");
        }
    }

    // A webhook left over from a previous deployment blocks getUpdates.
    if let Err(e) = bot.delete_webhook().await {
        error!(error = %e, "Failed to delete webhook before polling");
    }

    let handler = dptree::endpoint(move |update: Update| {
        let chain = handler_chain.clone();
        async move {
            dispatch_update(&chain, &update).await;
            respond(())
        }
    });

    info!("Bot started in polling mode");
    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Polling stopped");
    Ok(())
}
