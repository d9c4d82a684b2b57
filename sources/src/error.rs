use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use skywatch_formats::FormatError;

/// Custom error type for the owner registry.
///
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Can not open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Missing column {0}")]
    MissingColumn(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Custom error type for the feed, allow us to differentiate between errors.
///
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Can not create HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("Timeout fetching {0}")]
    Timeout(String),
    #[error("HTTP Error: {0}")]
    Network(reqwest::Error),
    #[error("Bad status {status} from {url}")]
    Status { status: StatusCode, url: String },
    #[error(transparent)]
    Malformed(#[from] FormatError),
}

impl FeedError {
    /// Sort out timeouts from the other transport errors.
    ///
    pub fn from_transport(e: reqwest::Error, url: &str) -> Self {
        if e.is_timeout() {
            FeedError::Timeout(url.to_string())
        } else {
            FeedError::Network(e)
        }
    }
}
