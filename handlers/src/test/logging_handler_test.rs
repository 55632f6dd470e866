//! Unit tests for LoggingHandler.

use listbot_core::{
    CallbackQuery, Chat, Event, Handler, HandlerResponse, InlineQuery, Message, User,
};
use crate::LoggingHandler;

fn sample_user(user_id: i64) -> User {
    User {
        id: user_id,
        username: Some("testuser".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

fn sample_text(user_id: i64, content: &str) -> Event {
    Event::Text(Message {
        id: "msg-1".to_string(),
        user: sample_user(user_id),
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
    })
}

#[tokio::test]
async fn test_logging_handler_before_continues() {
    let h = LoggingHandler;
    let event = sample_text(1, "hello");
    let result: listbot_core::Result<bool> = h.before(&event).await;
    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_logging_handler_continues_for_queries() {
    let h = LoggingHandler;
    let inline = Event::InlineQuery(InlineQuery {
        id: "q".to_string(),
        user: sample_user(2),
        query: "anything".to_string(),
    });
    let callback = Event::Callback(CallbackQuery {
        id: "c".to_string(),
        user: User::unknown(),
        data: None,
        origin: None,
    });
    assert!(h.before(&inline).await.unwrap());
    assert!(h.before(&callback).await.unwrap());
}

#[tokio::test]
async fn test_logging_handler_after_ok() {
    let h = LoggingHandler;
    let event = sample_text(1, "hello");
    let response = HandlerResponse::Reply("hi".to_string());
    let result: listbot_core::Result<()> = h.after(&event, &response).await;
    assert!(result.is_ok());
}
