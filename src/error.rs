// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

/// Everything that can go wrong between fetching a page and writing a file.
///
/// Most variants are recovered from inside the pipeline (a failed listing page
/// ends pagination, a failed detail page drops one entity). Only output and
/// option errors reach the caller of `runner::run`.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("malformed geocoding response: {0}")]
    Geocode(#[source] reqwest::Error),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error on {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("record is missing required key `{0}`")]
    MissingKey(&'static str),

    #[error("invalid option: {0}")]
    Option(String),
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }
}
