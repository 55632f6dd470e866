//! # listbot-core
//!
//! Core types and traits for the list bot: [`Event`], [`Handler`], the outbound [`Bot`] trait,
//! the immutable [`RecordStore`], record rendering, URL masking, and tracing initialization.
//! Transport-agnostic; used by handler-chain, handlers and listbot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod mask;
pub mod record;
pub mod render;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use mask::{mask_urls, MaskingBot, REDACTION_MARKER};
pub use record::{Record, RecordStore, DATE_FIELD, TITLE_FIELD, TITLE_PLACEHOLDER};
pub use render::{render_record, truncate_chars, DEFAULT_REFERENCE_URL};
pub use types::{
    CallbackQuery, Chat, Event, Handler, HandlerResponse, InlineArticle, InlineButton,
    InlineQuery, Message, MessageTarget, TextFormat, User,
};
