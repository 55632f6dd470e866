//! # Record Loader
//!
//! Loads the record list once at startup from a [`RecordSource`].
//!
//! [`load`] never fails: any error is logged and reported as `None`, so the bot keeps running
//! without data. [`try_load`] exposes the underlying [`LoadError`].

mod source;

pub use source::{RecordSource, DEFAULT_RECORDS_URL};

use listbot_core::RecordStore;
use thiserror::Error;
use tracing::{error, info, instrument};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("content is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("failed to parse records: {0}")]
    Parse(#[from] listbot_core::BotError),
}

/// Loads and parses the records; `None` when the source is unavailable or malformed.
#[instrument(skip(source), fields(source = %source))]
pub async fn load(source: &RecordSource) -> Option<RecordStore> {
    match try_load(source).await {
        Ok(store) => {
            info!(source = %source, count = store.len(), "Records loaded");
            Some(store)
        }
        Err(e) => {
            error!(source = %source, error = %e, "Failed to load records");
            None
        }
    }
}

/// Fetches the source text and parses it.
pub async fn try_load(source: &RecordSource) -> Result<RecordStore, LoadError> {
    let bytes = match source {
        RecordSource::Url(url) => fetch(url).await?,
        RecordSource::Path(path) => tokio::fs::read(path).await?,
    };
    let text = String::from_utf8(bytes)?;
    Ok(RecordStore::from_csv(&text)?)
}

async fn fetch(url: &str) -> Result<Vec<u8>, LoadError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }
    Ok(response.bytes().await?.to_vec())
}
