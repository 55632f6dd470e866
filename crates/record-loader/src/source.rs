//! Where the record list comes from.

use std::fmt;
use std::path::PathBuf;

/// Public list fetched when no other source is configured.
pub const DEFAULT_RECORDS_URL: &str =
    "https://raw.githubusercontent.com/Creepypoke/extrimism-list-bot/refs/heads/main/list.csv";

/// Remote URL or local file holding the CSV text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    Url(String),
    Path(PathBuf),
}

impl Default for RecordSource {
    fn default() -> Self {
        RecordSource::Url(DEFAULT_RECORDS_URL.to_string())
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::Url(url) => write!(f, "{}", url),
            RecordSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
