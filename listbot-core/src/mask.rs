//! URL redaction for outbound text.
//!
//! [`mask_urls`] is the pure transform; [`MaskingBot`] applies it to every outbound text of a wrapped [`Bot`].

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::bot::Bot;
use crate::error::Result;
use crate::types::{Chat, InlineArticle, Message, MessageTarget, TextFormat};

/// Replacement for every masked URL.
pub const REDACTION_MARKER: &str = "[||ДАННЫЕ УДАЛЕНЫ||]";

// Scheme-prefixed or bare `www.` URL; the last character may not be trailing punctuation.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b((?:https?|ftp|file)://|www\.)[^\s<>()"'`]+[^\s.,:;!?<>()"'`]"#)
        .expect("valid url regex")
});

/// Replaces every URL-like substring of `text` with [`REDACTION_MARKER`].
pub fn mask_urls(text: &str) -> String {
    URL_RE.replace_all(text, REDACTION_MARKER).into_owned()
}

/// [`Bot`] decorator that masks URLs in all outbound text before delegating.
pub struct MaskingBot {
    inner: Arc<dyn Bot>,
}

impl MaskingBot {
    pub fn new(inner: Arc<dyn Bot>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Bot for MaskingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.inner.send_message(chat, &mask_urls(text)).await
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.inner.reply_to(message, &mask_urls(text)).await
    }

    async fn edit_message(&self, target: &MessageTarget, text: &str, format: TextFormat) -> Result<()> {
        self.inner.edit_message(target, &mask_urls(text), format).await
    }

    async fn answer_inline_query(&self, query_id: &str, results: Vec<InlineArticle>) -> Result<()> {
        let results = results
            .into_iter()
            .map(|mut article| {
                article.title = mask_urls(&article.title);
                article.description = article.description.as_deref().map(mask_urls);
                article.message_text = mask_urls(&article.message_text);
                article
            })
            .collect();
        self.inner.answer_inline_query(query_id, results).await
    }

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        let masked = text.map(mask_urls);
        self.inner
            .answer_callback_query(callback_id, masked.as_deref())
            .await
    }
}
