//! Adapters from Telegram (teloxide) types to listbot_core types.
//! Depends only on teloxide and listbot_core type definitions.

use listbot_core::{CallbackQuery, Chat, Event, InlineQuery, Message, MessageTarget, User};
use teloxide::types::{Update, UpdateKind};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    pub fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::unknown),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.0.text().unwrap_or("").to_string(),
        }
    }
}

/// Converts an update into a core [`Event`]. `None` for update kinds the bot does not handle
/// (non-text messages, edits, channel posts, ...).
pub fn update_to_event(update: &Update) -> Option<Event> {
    match &update.kind {
        UpdateKind::Message(msg) => message_to_event(msg),
        UpdateKind::InlineQuery(query) => Some(Event::InlineQuery(InlineQuery {
            id: query.id.to_string(),
            user: TelegramUserWrapper(&query.from).to_core(),
            query: query.query.clone(),
        })),
        UpdateKind::CallbackQuery(query) => Some(Event::Callback(CallbackQuery {
            id: query.id.to_string(),
            user: TelegramUserWrapper(&query.from).to_core(),
            data: query.data.clone(),
            origin: callback_origin(query),
        })),
        _ => None,
    }
}

/// Text messages become [`Event::Start`] for `/start` and [`Event::Text`] otherwise.
pub fn message_to_event(msg: &teloxide::types::Message) -> Option<Event> {
    let text = msg.text()?;
    let message = TelegramMessageWrapper(msg).to_core();
    if is_start_command(text) {
        Some(Event::Start(message))
    } else {
        Some(Event::Text(message))
    }
}

/// True for `/start`, `/start@bot_name` and `/start payload`.
pub fn is_start_command(text: &str) -> bool {
    let Some(first) = text.split_whitespace().next() else {
        return false;
    };
    first.split('@').next() == Some("/start")
}

/// Inline results are edited by inline message id; regular messages by chat and message id.
fn callback_origin(query: &teloxide::types::CallbackQuery) -> Option<MessageTarget> {
    if let Some(id) = &query.inline_message_id {
        return Some(MessageTarget::Inline(id.clone()));
    }
    query.message.as_ref().map(|m| MessageTarget::Chat {
        chat_id: m.chat().id.0,
        message_id: m.id().0,
    })
}
