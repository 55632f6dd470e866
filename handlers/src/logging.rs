//! Handler that logs every inbound event and the chain's final response.

use async_trait::async_trait;
use listbot_core::{Event, Handler, HandlerResponse, Result};
use tracing::{debug, info, instrument};

/// Logs each event in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        let user = event.user();
        let username = user.username.as_deref().unwrap_or("unknown");
        match event {
            Event::Start(_) => info!(
                user_id = user.id,
                username = %username,
                chat_id = ?event.chat_id(),
                "{}", event.kind()
            ),
            Event::Text(message) => info!(
                user_id = user.id,
                username = %username,
                chat_id = message.chat.id,
                text = %message.content,
                "{}", event.kind()
            ),
            Event::InlineQuery(query) => info!(
                user_id = user.id,
                username = %username,
                query = %query.query,
                "{}", event.kind()
            ),
            Event::Callback(callback) => info!(
                user_id = user.id,
                username = %username,
                chat_id = ?event.chat_id(),
                data = ?callback.data,
                "{}", event.kind()
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &Event, response: &HandlerResponse) -> Result<()> {
        debug!(
            event = event.kind(),
            user_id = event.user().id,
            response = ?response,
            "Processed event"
        );
        Ok(())
    }
}
