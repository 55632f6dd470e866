//! Core types: user, chat, inbound events, outbound inline results, handler response, and Handler trait.

use async_trait::async_trait;

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Placeholder for updates that carry no sender (e.g. channel posts).
    pub fn unknown() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A text message received in a chat.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
}

/// Inline query typed by a user as `@bot ...` in any chat.
#[derive(Debug, Clone)]
pub struct InlineQuery {
    pub id: String,
    pub user: User,
    pub query: String,
}

/// Message a callback button was attached to.
///
/// Results sent through inline mode live outside any bot chat and are addressed by
/// an inline message id; regular messages are addressed by chat and message id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageTarget {
    Inline(String),
    Chat { chat_id: i64, message_id: i32 },
}

/// Button press on an inline keyboard.
#[derive(Debug, Clone)]
pub struct CallbackQuery {
    pub id: String,
    pub user: User,
    pub data: Option<String>,
    /// `None` when Telegram no longer exposes the originating message.
    pub origin: Option<MessageTarget>,
}

/// Inbound event, already converted from the transport's update type.
#[derive(Debug, Clone)]
pub enum Event {
    /// `/start` command.
    Start(Message),
    /// Any other text, including unknown commands.
    Text(Message),
    InlineQuery(InlineQuery),
    Callback(CallbackQuery),
}

impl Event {
    /// Sender of the event.
    pub fn user(&self) -> &User {
        match self {
            Event::Start(m) | Event::Text(m) => &m.user,
            Event::InlineQuery(q) => &q.user,
            Event::Callback(q) => &q.user,
        }
    }

    /// Chat the event came from; inline and callback queries may have none.
    pub fn chat_id(&self) -> Option<i64> {
        match self {
            Event::Start(m) | Event::Text(m) => Some(m.chat.id),
            Event::InlineQuery(_) => None,
            Event::Callback(q) => match q.origin {
                Some(MessageTarget::Chat { chat_id, .. }) => Some(chat_id),
                _ => None,
            },
        }
    }

    /// Stable action name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Start(_) => "START_COMMAND",
            Event::Text(_) => "TEXT_MESSAGE",
            Event::InlineQuery(_) => "INLINE_QUERY",
            Event::Callback(_) => "CALLBACK_QUERY",
        }
    }
}

/// Markup dialect of an outbound text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    /// Legacy Telegram Markdown.
    Markdown,
}

/// Inline keyboard button that sends `callback_data` back to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub text: String,
    pub callback_data: String,
}

/// Article result for an inline query answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineArticle {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub message_text: String,
    pub format: TextFormat,
    pub button: Option<InlineButton>,
}

impl InlineArticle {
    pub fn new(id: impl Into<String>, title: impl Into<String>, message_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            message_text: message_text.into(),
            format: TextFormat::Plain,
            button: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_button(mut self, text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        self.button = Some(InlineButton {
            text: text.into(),
            callback_data: callback_data.into(),
        });
        self
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the text that was sent.
    Reply(String),
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _event: &Event) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _event: &Event) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(&self, _event: &Event, _response: &HandlerResponse) -> crate::error::Result<()> {
        Ok(())
    }
}
