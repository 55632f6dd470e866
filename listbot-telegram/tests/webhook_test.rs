//! HTTP-level tests for the webhook router, driven with `tower::ServiceExt::oneshot`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use handler_chain::HandlerChain;
use listbot_core::{BotError, Event, Handler, HandlerResponse, Result};
use listbot_telegram::{webhook_router, LIVENESS_TEXT};
use tower::ServiceExt;

const SECRET: &str = "123456:test-token";

/// Records the kind of every event it sees; optionally fails.
struct RecordingHandler {
    seen: Arc<Mutex<Vec<&'static str>>>,
    fail: bool,
}

#[async_trait]
impl Handler for RecordingHandler {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        self.seen.lock().unwrap().push(event.kind());
        if self.fail {
            return Err(BotError::Bot(
                "Forbidden: bot was blocked by the user".to_string(),
            ));
        }
        Ok(HandlerResponse::Stop)
    }
}

fn app(fail: bool) -> (Router, Arc<Mutex<Vec<&'static str>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new().add_handler(Arc::new(RecordingHandler {
        seen: seen.clone(),
        fail,
    }));
    (webhook_router(chain, SECRET), seen)
}

fn start_update_json() -> String {
    r#"{"update_id":1,"message":{"message_id":5,"date":1706529600,"chat":{"id":123,"type":"private","first_name":"Test"},"from":{"id":42,"is_bot":false,"first_name":"Test"},"text":"/start"}}"#
        .to_string()
}

async fn send(app: Router, method: Method, uri: &str, body: String) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_liveness() {
    let (app, seen) = app(false);
    let (status, body) = send(app, Method::GET, "/", String::new()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, LIVENESS_TEXT);
    assert!(seen.lock().unwrap().is_empty());
}

/// **Test: a valid update on the secret path is processed before the 200 "ok".**
#[tokio::test]
async fn test_update_is_processed() {
    let (app, seen) = app(false);
    let (status, body) = send(app, Method::POST, &format!("/{}", SECRET), start_update_json()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
    assert_eq!(*seen.lock().unwrap(), vec!["START_COMMAND"]);
}

#[tokio::test]
async fn test_malformed_body_is_500() {
    let (app, seen) = app(false);
    let (status, body) = send(app, Method::POST, &format!("/{}", SECRET), "{not json".to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "error");
    assert!(seen.lock().unwrap().is_empty());
}

/// **Test: a failing handler is contained: 200 "ok", so Telegram does not re-deliver the update.**
///
/// **Setup:** handler always fails (e.g. the user blocked the bot).
/// **Expected:** each delivery is answered 200 and the handler runs once per delivery.
#[tokio::test]
async fn test_handler_failure_is_acknowledged() {
    let (app, seen) = app(true);
    for _ in 0..3 {
        let (status, body) =
            send(app.clone(), Method::POST, &format!("/{}", SECRET), start_update_json()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
    assert_eq!(seen.lock().unwrap().len(), 3);
}

/// **Test: wrong path, wrong method on either route: 404 and nothing dispatched.**
#[tokio::test]
async fn test_other_routes_are_404() {
    let cases = [
        (Method::POST, "/wrong-token".to_string()),
        (Method::GET, format!("/{}", SECRET)),
        (Method::POST, "/".to_string()),
        (Method::PUT, "/".to_string()),
        (Method::GET, "/health".to_string()),
    ];
    for (method, uri) in cases {
        let (app, seen) = app(false);
        let (status, body) = send(app, method.clone(), &uri, start_update_json()).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(body, "not found");
        assert!(seen.lock().unwrap().is_empty());
    }
}
