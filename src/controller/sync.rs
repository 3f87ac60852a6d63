//! Restoring and persisting the playlist record
//!
//! Both operations are fail-safe: errors are logged and handed back, never
//! propagated as panics, and a failed persist leaves the store in the empty
//! playlist state instead of a half-written record.

use crate::error::{SyncError, SyncResult};
use crate::model::{PlaylistSnapshot, Track};
use crate::ports::{DurableStore, Notifier, PlaybackEngine};

use super::{PlaylistController, CURRENT_INDEX_KEY, TRACKS_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The stored queue was loaded into the engine and published
    Restored { count: usize, index: usize },
    /// Nothing (or an empty queue) was stored; state is untouched
    NoStoredPlaylist,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersistOutcome {
    Stored { count: usize, index: usize },
    /// The engine queue was empty and the record was removed
    Cleared,
}

fn parse_index(raw: Option<&str>) -> SyncResult<usize> {
    let raw = raw.ok_or(SyncError::MissingIndex)?;
    raw.trim()
        .parse::<usize>()
        .map_err(|_| SyncError::InvalidIndex(raw.to_string()))
}

fn decode_tracks(raw: Option<&str>) -> SyncResult<Vec<Track>> {
    match raw {
        None => Ok(Vec::new()),
        // `null` is a valid stored value and means no playlist
        Some(raw) => Ok(serde_json::from_str::<Option<Vec<Track>>>(raw)
            .map_err(SyncError::Decode)?
            .unwrap_or_default()),
    }
}

impl<S, E, N> PlaylistController<S, E, N>
where
    S: DurableStore,
    E: PlaybackEngine,
    N: Notifier,
{
    /// Load the stored playlist into the engine and publish it.
    ///
    /// Meant to run once on startup. On failure nothing is published.
    pub async fn restore_from_storage(&self) -> SyncResult<RestoreOutcome> {
        match self.try_restore().await {
            Ok(outcome) => {
                match outcome {
                    RestoreOutcome::Restored { count, index } => {
                        tracing::info!(count, index, "Restored stored playlist")
                    }
                    RestoreOutcome::NoStoredPlaylist => tracing::debug!("No stored playlist"),
                }
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not restore stored playlist");
                Err(e)
            }
        }
    }

    async fn try_restore(&self) -> SyncResult<RestoreOutcome> {
        let stored_tracks = self
            .store
            .get_item(TRACKS_KEY)
            .await
            .map_err(SyncError::Store)?;
        let tracks = decode_tracks(stored_tracks.as_deref())?;
        let stored_index = self
            .store
            .get_item(CURRENT_INDEX_KEY)
            .await
            .map_err(SyncError::Store)?;

        if tracks.is_empty() {
            return Ok(RestoreOutcome::NoStoredPlaylist);
        }

        let index = parse_index(stored_index.as_deref())?;
        if index >= tracks.len() {
            return Err(SyncError::IndexOutOfBounds {
                index,
                len: tracks.len(),
            });
        }

        self.engine.reset().await.map_err(SyncError::Engine)?;
        self.engine
            .add(tracks.clone())
            .await
            .map_err(SyncError::Engine)?;
        self.engine.skip(index).await.map_err(SyncError::Engine)?;
        let current_track = self
            .engine
            .get_track(index)
            .await
            .map_err(SyncError::Engine)?
            .ok_or(SyncError::MissingTrack(index))?;

        let count = tracks.len();
        self.state.publish(PlaylistSnapshot::from_queue(
            tracks,
            Some(index),
            Some(current_track),
        ));

        Ok(RestoreOutcome::Restored { count, index })
    }

    /// Mirror the engine's live queue into the store and the playlist state.
    ///
    /// Run after anything that changes the queue or the current track
    /// (add, skip, play, clear); pausing does not need it.
    pub async fn persist_current_state(&self) -> SyncResult<PersistOutcome> {
        match self.try_persist().await {
            Ok(outcome) => {
                tracing::debug!(?outcome, "Persisted playlist");
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!(error = %e, "Storing playlist failed, resetting to empty");
                self.state.reset_counter();
                self.remove_record().await;
                Err(e)
            }
        }
    }

    async fn try_persist(&self) -> SyncResult<PersistOutcome> {
        let queue = self.engine.get_queue().await.map_err(SyncError::Engine)?;

        if queue.is_empty() {
            self.store
                .remove_item(TRACKS_KEY)
                .await
                .map_err(SyncError::Store)?;
            self.store
                .remove_item(CURRENT_INDEX_KEY)
                .await
                .map_err(SyncError::Store)?;

            self.state
                .publish(PlaylistSnapshot::from_queue(queue, None, None));
            return Ok(PersistOutcome::Cleared);
        }

        let index = self
            .engine
            .get_current_track()
            .await
            .map_err(SyncError::Engine)?
            .ok_or(SyncError::MissingIndex)?;
        if index >= queue.len() {
            return Err(SyncError::IndexOutOfBounds {
                index,
                len: queue.len(),
            });
        }
        let current_track = self
            .engine
            .get_track(index)
            .await
            .map_err(SyncError::Engine)?
            .ok_or(SyncError::MissingTrack(index))?;

        let tracks_json = serde_json::to_string(&queue).map_err(SyncError::Encode)?;
        self.store
            .set_item(TRACKS_KEY, &tracks_json)
            .await
            .map_err(SyncError::Store)?;
        self.store
            .set_item(CURRENT_INDEX_KEY, &index.to_string())
            .await
            .map_err(SyncError::Store)?;

        let count = queue.len();
        self.state.publish(PlaylistSnapshot::from_queue(
            queue,
            Some(index),
            Some(current_track),
        ));

        Ok(PersistOutcome::Stored { count, index })
    }

    async fn remove_record(&self) {
        for key in [TRACKS_KEY, CURRENT_INDEX_KEY] {
            if let Err(e) = self.store.remove_item(key).await {
                tracing::warn!(key, error = %e, "Failed to remove stored key");
            }
        }
    }
}
