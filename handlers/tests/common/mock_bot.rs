//! Mock implementation of [`listbot_core::Bot`] for integration tests.
//!
//! Records every outbound call in order so tests can assert on what the responder sent
//! without hitting Telegram.

use async_trait::async_trait;
use listbot_core::{Bot, BotError, Chat, InlineArticle, MessageTarget, Result, TextFormat};
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send { chat_id: i64, text: String },
    Edit { target: MessageTarget, text: String, format: TextFormat },
    AnswerInline { query_id: String, results: Vec<InlineArticle> },
    AnswerCallback { callback_id: String, text: Option<String> },
}

/// Mock Bot that records calls; optionally fails every edit.
#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<Call>>,
    fail_edits: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bot whose `edit_message` always returns an error.
    #[allow(dead_code)]
    pub fn failing_edits() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_edits: true,
        }
    }

    /// Snapshot of the calls recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Call::Send {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn edit_message(&self, target: &MessageTarget, text: &str, format: TextFormat) -> Result<()> {
        if self.fail_edits {
            return Err(BotError::Bot("message is not modified".to_string()));
        }
        self.record(Call::Edit {
            target: target.clone(),
            text: text.to_string(),
            format,
        });
        Ok(())
    }

    async fn answer_inline_query(&self, query_id: &str, results: Vec<InlineArticle>) -> Result<()> {
        self.record(Call::AnswerInline {
            query_id: query_id.to_string(),
            results,
        });
        Ok(())
    }

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        self.record(Call::AnswerCallback {
            callback_id: callback_id.to_string(),
            text: text.map(str::to_string),
        });
        Ok(())
    }
}
