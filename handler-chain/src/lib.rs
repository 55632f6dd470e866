//! # Handler chain
//!
//! Runs a sequence of handlers for each event. Any handler's `before` can stop the chain; the first
//! handler that returns Stop or Reply ends the handle phase; `after` callbacks run in reverse order.

use listbot_core::{Event, Handler, HandlerResponse, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered handlers: all `before` in order, `handle` until Stop/Reply, all `after` in reverse order.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Reply ends handler phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the three phases for one event. Returns the first Stop or Reply, or Continue.
    #[instrument(skip(self, event), fields(event = event.kind(), user_id = event.user().id))]
    pub async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        debug!("step: handler_chain started");

        for handler in &self.handlers {
            if !handler.before(event).await? {
                info!(
                    handler = %std::any::type_name_of_val(handler.as_ref()),
                    "step: before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(event).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "step: handler done"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(event, &final_response).await?;
        }

        debug!("step: handler_chain finished");
        Ok(final_response)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
