//! Adding tracks to the queue with duplicate detection

use anyhow::Result;

use crate::model::{AdmitMode, Track};
use crate::ports::{DurableStore, Notifier, PlaybackEngine, Severity};

use super::PlaylistController;

pub const ADDED_MESSAGE: &str = "Selection added to playlist.";
pub const ALREADY_QUEUED_MESSAGE: &str = "Selection already in playlist.";

/// What `add_track` ended up doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Appended at `index`, playback untouched
    Queued { index: usize },
    /// Appended at `index` and started
    QueuedAndPlaying { index: usize },
    /// Already queued at `index`; jumped to it and started
    Playing { index: usize },
    /// Already queued at `index`; nothing changed
    AlreadyQueued { index: usize },
}

/// Position of the first queued track sharing `candidate`'s id.
pub fn find_queued(queue: &[Track], candidate: &Track) -> Option<usize> {
    queue.iter().position(|queued| queued.same_track(candidate))
}

impl<S, E, N> PlaylistController<S, E, N>
where
    S: DurableStore,
    E: PlaybackEngine,
    N: Notifier,
{
    /// Admit `candidate` into the queue.
    ///
    /// `queue` is the queue as the caller last saw it, before this call.
    /// Engine errors are returned as-is; persistence failures are not, since
    /// persisting already falls back to the empty playlist on its own.
    pub async fn add_track(
        &self,
        candidate: Track,
        queue: &[Track],
        mode: AdmitMode,
    ) -> Result<Admission> {
        tracing::debug!(track_id = %candidate.id, mode = mode.tag(), "Adding track");

        let admission = match (find_queued(queue, &candidate), mode) {
            (None, mode) => {
                let index = queue.len();
                tracing::info!(track_id = %candidate.id, index, "No match, adding track to playlist");
                self.engine.add(vec![candidate]).await?;

                match mode {
                    AdmitMode::PlayNow => {
                        self.engine.skip(index).await?;
                        self.engine.play().await?;
                        Admission::QueuedAndPlaying { index }
                    }
                    AdmitMode::AddToPlaylist => {
                        self.notifier.show(Severity::Success, ADDED_MESSAGE);
                        Admission::Queued { index }
                    }
                }
            }
            (Some(index), AdmitMode::PlayNow) => {
                tracing::info!(track_id = %candidate.id, index, "Track already in playlist, playing");
                self.engine.skip(index).await?;
                self.engine.play().await?;
                Admission::Playing { index }
            }
            (Some(index), AdmitMode::AddToPlaylist) => {
                tracing::debug!(track_id = %candidate.id, index, "Track already in playlist");
                self.notifier.show(Severity::Info, ALREADY_QUEUED_MESSAGE);
                return Ok(Admission::AlreadyQueued { index });
            }
        };

        // Failure is already logged and compensated inside persist
        let _ = self.persist_current_state().await;

        Ok(admission)
    }
}
