//! Wraps teloxide::Bot and implements [`listbot_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use listbot_core::{Bot as CoreBot, BotError, Chat, InlineArticle, MessageTarget, Result, TextFormat};
use teloxide::{
    prelude::*,
    types::{
        CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryId,
        InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
        InputMessageContentText, MessageId, ParseMode,
    },
};

/// Thin wrapper around teloxide::Bot that implements listbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Builds the `answerInlineQuery` request without sending it.
    pub fn inline_answer_request(
        &self,
        query_id: &str,
        articles: Vec<InlineArticle>,
    ) -> <teloxide::Bot as Requester>::AnswerInlineQuery {
        let results: Vec<InlineQueryResult> = articles.into_iter().map(to_inline_result).collect();
        let mut req = self
            .bot
            .answer_inline_query(InlineQueryId(query_id.to_string()), results);
        // Results are random per query; never let Telegram serve a cached one.
        req.cache_time = Some(0);
        req.is_personal = Some(true);
        req
    }

    /// Builds the `answerCallbackQuery` request without sending it.
    pub fn callback_answer_request(
        &self,
        callback_id: &str,
        text: Option<&str>,
    ) -> <teloxide::Bot as Requester>::AnswerCallbackQuery {
        let mut req = self
            .bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()));
        req.text = text.map(str::to_string);
        req
    }
}

fn bot_error(e: teloxide::RequestError) -> BotError {
    BotError::Bot(e.to_string())
}

/// Rendered records use the legacy Markdown dialect.
#[allow(deprecated)]
fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Markdown => Some(ParseMode::Markdown),
    }
}

/// Converts a transport-neutral article into a Telegram inline result.
pub fn to_inline_result(article: InlineArticle) -> InlineQueryResult {
    let mut content = InputMessageContentText::new(article.message_text);
    content.parse_mode = parse_mode(article.format);

    let mut result = InlineQueryResultArticle::new(
        article.id,
        article.title,
        InputMessageContent::Text(content),
    );
    result.description = article.description;
    result.reply_markup = article.button.map(|button| {
        InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            button.text,
            button.callback_data,
        )]])
    });
    InlineQueryResult::Article(result)
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn edit_message(&self, target: &MessageTarget, text: &str, format: TextFormat) -> Result<()> {
        match target {
            MessageTarget::Inline(inline_message_id) => {
                let mut req = self
                    .bot
                    .edit_message_text_inline(inline_message_id.clone(), text.to_string());
                req.parse_mode = parse_mode(format);
                req.await.map_err(bot_error)?;
            }
            MessageTarget::Chat {
                chat_id,
                message_id,
            } => {
                let mut req = self.bot.edit_message_text(
                    ChatId(*chat_id),
                    MessageId(*message_id),
                    text.to_string(),
                );
                req.parse_mode = parse_mode(format);
                req.await.map_err(bot_error)?;
            }
        }
        Ok(())
    }

    async fn answer_inline_query(&self, query_id: &str, articles: Vec<InlineArticle>) -> Result<()> {
        self.inline_answer_request(query_id, articles)
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        self.callback_answer_request(callback_id, text)
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}
