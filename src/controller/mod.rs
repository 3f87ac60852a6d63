//! Controller module - Playlist logic on top of the engine and the store
//!
//! The controller mirrors the playback engine's queue into durable storage and
//! into the observable playlist state. It is organized into submodules by
//! responsibility:
//!
//! - `sync`: Restoring and persisting the playlist record
//! - `admission`: Adding a track with duplicate detection
//! - `playback`: Transport commands that persist after they mutate the engine

mod sync;
mod admission;
mod playback;

use std::sync::Arc;

use crate::audio::QueueError;
use crate::model::PlaylistState;
use crate::ports::{DurableStore, Notifier, PlaybackEngine};

pub use admission::Admission;
pub use sync::{PersistOutcome, RestoreOutcome};

/// Store key holding the JSON array of queued tracks
pub const TRACKS_KEY: &str = "@tracks";
/// Store key holding the current index as a decimal string
pub const CURRENT_INDEX_KEY: &str = "@currentIndex";

pub struct PlaylistController<S, E, N> {
    pub(crate) store: Arc<S>,
    pub(crate) engine: Arc<E>,
    pub(crate) notifier: Arc<N>,
    pub(crate) state: PlaylistState,
}

// Manual impl: derive would require S, E, N themselves to be Clone
impl<S, E, N> Clone for PlaylistController<S, E, N> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            engine: self.engine.clone(),
            notifier: self.notifier.clone(),
            state: self.state.clone(),
        }
    }
}

impl<S, E, N> PlaylistController<S, E, N>
where
    S: DurableStore,
    E: PlaybackEngine,
    N: Notifier,
{
    pub fn new(store: Arc<S>, engine: Arc<E>, notifier: Arc<N>, state: PlaylistState) -> Self {
        Self {
            store,
            engine,
            notifier,
            state,
        }
    }

    pub fn state(&self) -> &PlaylistState {
        &self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn format_error(error: &anyhow::Error) -> String {
        match error.downcast_ref::<QueueError>() {
            Some(QueueError::IndexOutOfRange { .. }) => {
                "That track is not in the playlist.".to_string()
            }
            Some(QueueError::EmptyQueue) => "Playlist is empty. Add a track first.".to_string(),
            None => format!("Error: {}", error),
        }
    }
}
