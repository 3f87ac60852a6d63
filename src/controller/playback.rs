//! Playback control methods

use anyhow::Result;

use crate::model::PlaybackState;
use crate::ports::{DurableStore, Notifier, PlaybackEngine};

use super::PlaylistController;

impl<S, E, N> PlaylistController<S, E, N>
where
    S: DurableStore,
    E: PlaybackEngine,
    N: Notifier,
{
    pub async fn skip_to(&self, index: usize) -> Result<()> {
        tracing::debug!(index, "Skipping to track");
        self.engine.skip(index).await?;
        let _ = self.persist_current_state().await;
        tracing::info!(index, "Skipped to track");
        Ok(())
    }

    pub async fn play(&self) -> Result<()> {
        self.engine.play().await?;
        let _ = self.persist_current_state().await;
        tracing::info!("Playback started");
        Ok(())
    }

    /// Drop the whole queue; the stored record goes with it.
    pub async fn clear(&self) -> Result<()> {
        self.engine.reset().await?;
        let _ = self.persist_current_state().await;
        tracing::info!("Playlist cleared");
        Ok(())
    }

    pub async fn playback_state(&self) -> Result<PlaybackState> {
        self.engine.get_state().await
    }
}
