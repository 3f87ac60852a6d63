//! Observable playlist state shared with UI consumers

use std::sync::Arc;

use tokio::sync::watch;

use super::track::Track;

/// Everything a UI needs to draw the playlist, published as one unit
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaylistSnapshot {
    pub playlist_counter: usize,
    pub current_index: Option<usize>,
    pub current_track: Option<Track>,
    pub current_queue: Vec<Track>,
}

impl PlaylistSnapshot {
    pub fn from_queue(queue: Vec<Track>, index: Option<usize>, track: Option<Track>) -> Self {
        Self {
            playlist_counter: queue.len(),
            current_index: index,
            current_track: track,
            current_queue: queue,
        }
    }
}

/// Handle to the process-wide playlist state.
///
/// Cloning is cheap and every clone sees the same state. Writes replace the
/// whole snapshot, so subscribers never observe a half-applied update.
#[derive(Clone)]
pub struct PlaylistState {
    tx: Arc<watch::Sender<PlaylistSnapshot>>,
}

impl PlaylistState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PlaylistSnapshot::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn publish(&self, snapshot: PlaylistSnapshot) {
        tracing::trace!(
            count = snapshot.playlist_counter,
            index = ?snapshot.current_index,
            "Publishing playlist snapshot"
        );
        self.tx.send_replace(snapshot);
    }

    pub fn snapshot(&self) -> PlaylistSnapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlaylistSnapshot> {
        self.tx.subscribe()
    }

    /// Zero the counter without touching the other fields.
    pub fn reset_counter(&self) {
        self.tx.send_modify(|snapshot| snapshot.playlist_counter = 0);
    }
}

impl Default for PlaylistState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = PlaylistState::new();
        let snapshot = state.snapshot();

        assert_eq!(snapshot.playlist_counter, 0);
        assert_eq!(snapshot.current_index, None);
        assert_eq!(snapshot.current_track, None);
        assert!(snapshot.current_queue.is_empty());
    }

    #[test]
    fn clones_share_state() {
        let state = PlaylistState::new();
        let other = state.clone();

        state.publish(PlaylistSnapshot::from_queue(
            vec![Track::new("a"), Track::new("b")],
            Some(1),
            Some(Track::new("b")),
        ));

        assert_eq!(other.snapshot().playlist_counter, 2);
        assert_eq!(other.snapshot().current_index, Some(1));
    }

    #[tokio::test]
    async fn subscribers_see_whole_snapshot() {
        let state = PlaylistState::new();
        let mut rx = state.subscribe();

        state.publish(PlaylistSnapshot::from_queue(
            vec![Track::new("a")],
            Some(0),
            Some(Track::new("a")),
        ));

        rx.changed().await.unwrap();
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.playlist_counter, 1);
        assert_eq!(seen.current_track.map(|t| t.id), Some("a".to_string()));
    }

    #[test]
    fn reset_counter_leaves_other_fields() {
        let state = PlaylistState::new();
        state.publish(PlaylistSnapshot::from_queue(vec![Track::new("a")], Some(0), None));

        state.reset_counter();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.playlist_counter, 0);
        assert_eq!(snapshot.current_index, Some(0));
        assert_eq!(snapshot.current_queue.len(), 1);
    }
}
