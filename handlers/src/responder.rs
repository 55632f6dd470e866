//! Record responder: answers `/start`, echoes text, serves inline queries and reveals a random
//! record when the inline result's button is pressed.
//!
//! **External interactions:** [`Bot`] (reply, edit, answer inline/callback queries) and the
//! read-only [`RecordStore`] injected at construction.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use listbot_core::{
    render_record, truncate_chars, Bot, CallbackQuery, Event, Handler, HandlerResponse,
    InlineArticle, InlineQuery, Message, Record, RecordStore, Result, TextFormat,
};
use tracing::{info, instrument, warn};

// --- User-facing texts ---
pub const START_MESSAGE: &str = "Welcome to the Extrimism List Bot!";
pub const ECHO_PREFIX: &str = "You said: ";
pub const CALLBACK_NO_DATA_TEXT: &str = "Данные недоступны";

/// Callback data of the prompt article's button.
pub const RANDOM_RECORD_CALLBACK: &str = "get_random_record";

pub const NO_DATA_ARTICLE_ID: &str = "no-data";
const NO_DATA_TITLE: &str = "No data available";
const NO_DATA_TEXT: &str = "No records found in CSV.";

pub const PROMPT_ARTICLE_ID: &str = "extrimism-test";
const PROMPT_TITLE: &str = "Запрещенные экстремистские материалы";
const PROMPT_DESCRIPTION: &str = "Экстремистский материал дня";
const PROMPT_TEXT: &str = "Нажмите, чтобы узнать об запрещенном экстремистском материале!";
const PROMPT_BUTTON: &str = "Узнать";

fn prompt_article() -> InlineArticle {
    InlineArticle::new(PROMPT_ARTICLE_ID, PROMPT_TITLE, PROMPT_TEXT)
        .with_description(PROMPT_DESCRIPTION)
        .with_button(PROMPT_BUTTON, RANDOM_RECORD_CALLBACK)
}

/// How inline queries are answered; fixed for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InlineMode {
    /// A fixed prompt article whose button reveals a random record.
    #[default]
    Prompt,
    /// A random record returned directly as the result.
    Direct,
}

impl FromStr for InlineMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prompt" | "button" => Ok(InlineMode::Prompt),
            "direct" => Ok(InlineMode::Direct),
            other => Err(format!("unknown inline mode: {}", other)),
        }
    }
}

impl fmt::Display for InlineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InlineMode::Prompt => write!(f, "prompt"),
            InlineMode::Direct => write!(f, "direct"),
        }
    }
}

/// Deployment-level responder settings.
#[derive(Debug, Clone, Default)]
pub struct ResponderConfig {
    pub inline_mode: InlineMode,
    /// Appended to rendered records; `None` omits the link.
    pub reference_url: Option<String>,
}

/// Terminal handler of the chain. Stateless across events apart from the shared, read-only store.
#[derive(Clone)]
pub struct Responder {
    bot: Arc<dyn Bot>,
    records: Option<Arc<RecordStore>>,
    config: ResponderConfig,
}

impl Responder {
    /// `records` is `None` when the list could not be loaded.
    pub fn new(bot: Arc<dyn Bot>, records: Option<Arc<RecordStore>>, config: ResponderConfig) -> Self {
        Self {
            bot,
            records,
            config,
        }
    }

    /// The store, if it was loaded and holds at least one record.
    fn available_records(&self) -> Option<&RecordStore> {
        self.records.as_deref().filter(|store| !store.is_empty())
    }

    /// A uniformly chosen record with its index; `None` when there is no data.
    fn pick_record(&self) -> Option<(usize, &Record)> {
        self.available_records().and_then(RecordStore::pick_random)
    }

    fn render(&self, record: &Record) -> String {
        render_record(record, self.config.reference_url.as_deref())
    }

    async fn on_start(&self, message: &Message) -> Result<HandlerResponse> {
        self.bot.reply_to(message, START_MESSAGE).await?;
        Ok(HandlerResponse::Reply(START_MESSAGE.to_string()))
    }

    async fn on_text(&self, message: &Message) -> Result<HandlerResponse> {
        let text = format!("{}{}", ECHO_PREFIX, message.content);
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }

    #[instrument(skip(self, query), fields(user_id = query.user.id))]
    async fn on_inline_query(&self, query: &InlineQuery) -> Result<HandlerResponse> {
        let article = match self.config.inline_mode {
            InlineMode::Prompt => self.available_records().map(|_| prompt_article()),
            InlineMode::Direct => self
                .pick_record()
                .map(|(index, record)| self.direct_article(query, index, record)),
        };

        let Some(article) = article else {
            info!(user_id = query.user.id, "INLINE_QUERY_NO_DATA");
            let article = InlineArticle::new(NO_DATA_ARTICLE_ID, NO_DATA_TITLE, NO_DATA_TEXT);
            self.bot.answer_inline_query(&query.id, vec![article]).await?;
            return Ok(HandlerResponse::Reply(NO_DATA_TEXT.to_string()));
        };

        let text = article.message_text.clone();
        self.bot.answer_inline_query(&query.id, vec![article]).await?;
        info!(
            user_id = query.user.id,
            mode = %self.config.inline_mode,
            "INLINE_QUERY_ANSWERED"
        );
        Ok(HandlerResponse::Reply(text))
    }

    fn direct_article(&self, query: &InlineQuery, index: usize, record: &Record) -> InlineArticle {
        info!(
            user_id = query.user.id,
            record_index = index,
            title = %truncate_chars(record.title(), 50),
            "INLINE_QUERY_RECORD_PICKED"
        );
        let article = InlineArticle::new(format!("record-{}", index), record.title(), self.render(record))
            .with_format(TextFormat::Markdown);
        if record.date().is_empty() {
            article
        } else {
            article.with_description(record.date())
        }
    }

    #[instrument(skip(self, callback), fields(user_id = callback.user.id))]
    async fn on_callback(&self, callback: &CallbackQuery) -> Result<HandlerResponse> {
        if callback.data.as_deref() != Some(RANDOM_RECORD_CALLBACK) {
            return Ok(HandlerResponse::Ignore);
        }

        let Some((index, record)) = self.pick_record() else {
            info!(user_id = callback.user.id, "CALLBACK_QUERY_NO_DATA");
            self.bot
                .answer_callback_query(&callback.id, Some(CALLBACK_NO_DATA_TEXT))
                .await?;
            return Ok(HandlerResponse::Reply(CALLBACK_NO_DATA_TEXT.to_string()));
        };

        let Some(target) = callback.origin.as_ref() else {
            warn!(
                user_id = callback.user.id,
                "Callback query has no message to edit; acknowledging only"
            );
            self.bot.answer_callback_query(&callback.id, None).await?;
            return Ok(HandlerResponse::Stop);
        };

        let text = self.render(record);
        self.bot
            .edit_message(target, &text, TextFormat::Markdown)
            .await?;
        self.bot.answer_callback_query(&callback.id, None).await?;

        info!(
            user_id = callback.user.id,
            record_index = index,
            title = %truncate_chars(record.title(), 50),
            "RANDOM_RECORD_SENT"
        );
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for Responder {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        match event {
            Event::Start(message) => self.on_start(message).await,
            Event::Text(message) => self.on_text(message).await,
            Event::InlineQuery(query) => self.on_inline_query(query).await,
            Event::Callback(callback) => self.on_callback(callback).await,
        }
    }
}
