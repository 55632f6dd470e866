use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Outbound call to the transport failed.
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Records error: {0}")]
    Records(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
