//! Shared fixtures for responder integration tests.

pub mod mock_bot;

use listbot_core::{
    CallbackQuery, Chat, Event, InlineQuery, Message, MessageTarget, Record, RecordStore, User,
    DATE_FIELD, TITLE_FIELD,
};

pub fn user() -> User {
    User {
        id: 42,
        username: Some("reader".to_string()),
        first_name: Some("Reader".to_string()),
        last_name: None,
    }
}

pub fn message(content: &str) -> Message {
    Message {
        id: "10".to_string(),
        user: user(),
        chat: Chat {
            id: 555,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
    }
}

pub fn inline_query(id: &str) -> Event {
    Event::InlineQuery(InlineQuery {
        id: id.to_string(),
        user: user(),
        query: String::new(),
    })
}

pub fn callback(id: &str, data: Option<&str>, origin: Option<MessageTarget>) -> Event {
    Event::Callback(CallbackQuery {
        id: id.to_string(),
        user: user(),
        data: data.map(str::to_string),
        origin,
    })
}

/// Store with the single record `{Материал: "X", Дата включения: "2020-01-01"}`.
pub fn single_record_store() -> RecordStore {
    RecordStore::new(vec![Record::new(vec![
        (TITLE_FIELD.to_string(), "X".to_string()),
        (DATE_FIELD.to_string(), "2020-01-01".to_string()),
    ])])
}
