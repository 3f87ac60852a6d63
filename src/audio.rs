//! In-process playback engine
//!
//! Keeps the queue and transport state in memory. Nothing is decoded; the
//! engine exists so the playlist logic has a real queue to drive from the CLI.

use anyhow::Result;
use thiserror::Error;
use tokio::sync::{watch, Mutex};

use crate::model::{PlaybackState, Track};
use crate::ports::PlaybackEngine;

/// Transport commands the queue cannot carry out
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("track index {index} out of range (queue has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("nothing to play, queue is empty")]
    EmptyQueue,
}

#[derive(Default)]
struct QueueInner {
    queue: Vec<Track>,
    current: Option<usize>,
}

pub struct QueuePlayer {
    inner: Mutex<QueueInner>,
    state_tx: watch::Sender<PlaybackState>,
}

impl QueuePlayer {
    pub fn new() -> Self {
        let (state_tx, _rx) = watch::channel(PlaybackState::None);
        Self {
            inner: Mutex::new(QueueInner::default()),
            state_tx,
        }
    }

    /// Stream of transport state changes.
    pub fn subscribe_state(&self) -> watch::Receiver<PlaybackState> {
        self.state_tx.subscribe()
    }

    fn set_state(&self, state: PlaybackState) {
        let previous = self.state_tx.send_replace(state);
        if previous != state {
            tracing::debug!(from = %previous, to = %state, "Playback state changed");
        }
    }
}

impl Default for QueuePlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PlaybackEngine for QueuePlayer {
    async fn reset(&self) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.queue.clear();
        inner.current = None;
        self.set_state(PlaybackState::None);
        Ok(())
    }

    async fn add(&self, tracks: Vec<Track>) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let was_empty = inner.queue.is_empty();
        inner.queue.extend(tracks);

        // First track loaded becomes current, like a freshly loaded player
        if was_empty && !inner.queue.is_empty() {
            inner.current = Some(0);
            self.set_state(PlaybackState::Ready);
        }
        Ok(())
    }

    async fn skip(&self, index: usize) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if index >= inner.queue.len() {
            return Err(QueueError::IndexOutOfRange {
                index,
                len: inner.queue.len(),
            }
            .into());
        }
        inner.current = Some(index);

        // Skipping while playing keeps playing, otherwise the new track is just cued
        if *self.state_tx.borrow() != PlaybackState::Playing {
            self.set_state(PlaybackState::Ready);
        }
        Ok(())
    }

    async fn play(&self) -> Result<()> {
        let inner = self.inner.lock().await;
        if inner.current.is_none() {
            return Err(QueueError::EmptyQueue.into());
        }
        self.set_state(PlaybackState::Playing);
        Ok(())
    }

    async fn get_queue(&self) -> Result<Vec<Track>> {
        Ok(self.inner.lock().await.queue.clone())
    }

    async fn get_current_track(&self) -> Result<Option<usize>> {
        Ok(self.inner.lock().await.current)
    }

    async fn get_track(&self, index: usize) -> Result<Option<Track>> {
        Ok(self.inner.lock().await.queue.get(index).cloned())
    }

    async fn get_state(&self) -> Result<PlaybackState> {
        Ok(*self.state_tx.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks(ids: &[&str]) -> Vec<Track> {
        ids.iter().map(|id| Track::new(*id)).collect()
    }

    #[tokio::test]
    async fn add_loads_first_track() {
        let player = QueuePlayer::new();
        assert_eq!(player.get_current_track().await.unwrap(), None);

        player.add(tracks(&["a", "b"])).await.unwrap();

        assert_eq!(player.get_current_track().await.unwrap(), Some(0));
        assert_eq!(player.get_state().await.unwrap(), PlaybackState::Ready);
        assert_eq!(player.get_queue().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn skip_and_play() {
        let player = QueuePlayer::new();
        player.add(tracks(&["a", "b", "c"])).await.unwrap();

        player.skip(2).await.unwrap();
        player.play().await.unwrap();

        assert_eq!(player.get_current_track().await.unwrap(), Some(2));
        assert_eq!(player.get_track(2).await.unwrap().unwrap().id, "c");
        assert_eq!(player.get_state().await.unwrap(), PlaybackState::Playing);

        // still playing after moving on
        player.skip(0).await.unwrap();
        assert_eq!(player.get_state().await.unwrap(), PlaybackState::Playing);
    }

    #[tokio::test]
    async fn skip_out_of_range_fails() {
        let player = QueuePlayer::new();
        player.add(tracks(&["a"])).await.unwrap();

        let err = player.skip(1).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<QueueError>(),
            Some(&QueueError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(player.get_current_track().await.unwrap(), Some(0));
    }

    #[tokio::test]
    async fn play_on_empty_queue_fails() {
        let player = QueuePlayer::new();
        let err = player.play().await.unwrap_err();
        assert_eq!(err.downcast_ref::<QueueError>(), Some(&QueueError::EmptyQueue));
    }

    #[tokio::test]
    async fn reset_clears_everything() {
        let player = QueuePlayer::new();
        let mut state_rx = player.subscribe_state();
        player.add(tracks(&["a"])).await.unwrap();
        player.play().await.unwrap();

        player.reset().await.unwrap();

        assert!(player.get_queue().await.unwrap().is_empty());
        assert_eq!(player.get_current_track().await.unwrap(), None);
        assert!(state_rx.has_changed().unwrap());
        assert_eq!(*state_rx.borrow_and_update(), PlaybackState::None);
    }
}
