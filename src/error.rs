use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library. Filtering itself never fails; everything
/// here comes from fetching, decoding, or file I/O.
#[derive(Debug, Error)]
pub enum Error {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("decode json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a FeatureCollection, got type {0:?}")]
    NotFeatureCollection(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
