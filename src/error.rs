//! Errors surfaced by the state sync operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("durable store failed: {0}")]
    Store(#[source] anyhow::Error),

    #[error("playback engine failed: {0}")]
    Engine(#[source] anyhow::Error),

    #[error("stored tracks are not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("could not serialize queue: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored index {0:?} is not an integer")]
    InvalidIndex(String),

    #[error("index {index} is out of bounds for a queue of {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("playlist has tracks but no current index")]
    MissingIndex,

    #[error("engine has no track at index {0}")]
    MissingTrack(usize),
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;
