use serde_json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] dg_core::error::Error),

    #[error("Missing required prompt slot: {0}")]
    MissingSlot(String),

    #[error("Completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion request failed: {0}")]
    Completion(String),

    #[error("Completion returned no content")]
    EmptyCompletion,

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}
