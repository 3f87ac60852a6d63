use anyhow::Result;

use crate::model::{PlaybackState, Track};

/// Port trait wrapping the playback engine capabilities the playlist logic uses.
///
/// The engine owns queue order and transport; callers only observe the
/// queue or ask the engine to change it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PlaybackEngine: Send + Sync {
    /// Stop playback and drop the whole queue.
    async fn reset(&self) -> Result<()>;

    /// Append tracks to the end of the queue.
    async fn add(&self, tracks: Vec<Track>) -> Result<()>;

    /// Make the track at `index` current.
    async fn skip(&self, index: usize) -> Result<()>;

    async fn play(&self) -> Result<()>;

    async fn get_queue(&self) -> Result<Vec<Track>>;

    /// Index of the current track, `None` when nothing is loaded.
    async fn get_current_track(&self) -> Result<Option<usize>>;

    async fn get_track(&self, index: usize) -> Result<Option<Track>>;

    async fn get_state(&self) -> Result<PlaybackState>;
}
