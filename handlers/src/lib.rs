//! # Handlers for listbot
//!
//! This crate provides handler implementations: event logging and the record [`Responder`].

mod logging;
mod responder;

#[cfg(test)]
mod test;

pub use logging::LoggingHandler;
pub use responder::{
    InlineMode, Responder, ResponderConfig, CALLBACK_NO_DATA_TEXT, ECHO_PREFIX,
    NO_DATA_ARTICLE_ID, PROMPT_ARTICLE_ID, RANDOM_RECORD_CALLBACK, START_MESSAGE,
};
