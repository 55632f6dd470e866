//! Bot abstraction for outbound operations.
//!
//! [`Bot`] trait is transport-agnostic; the Telegram implementation lives in listbot-telegram.

use crate::error::Result;
use crate::types::{Chat, InlineArticle, Message, MessageTarget, TextFormat};
use async_trait::async_trait;

/// Outbound operations a handler may perform. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
    /// Replaces the text of an already-sent message.
    async fn edit_message(&self, target: &MessageTarget, text: &str, format: TextFormat) -> Result<()>;
    /// Answers an inline query with the given results.
    async fn answer_inline_query(&self, query_id: &str, results: Vec<InlineArticle>) -> Result<()>;
    /// Acknowledges a callback query, optionally showing a notice to the user.
    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}
