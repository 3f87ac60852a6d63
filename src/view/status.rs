//! Status text and transport button derived from the playback state

use std::fmt;

use crate::model::PlaybackState;

/// Which transport button the player should show.
///
/// The tag names the current state, not the action the button offers:
/// `Play` is shown while playing and `Pause` while paused or idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonMode {
    Load,
    Pause,
    Play,
}

impl ButtonMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Pause => "pause",
            Self::Play => "play",
        }
    }
}

impl fmt::Display for ButtonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn status_label(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Buffering => "BUFFERING...",
        PlaybackState::Loading => "LOADING...",
        PlaybackState::Connecting => "CONNECTING...",
        PlaybackState::Paused => "PAUSED (READY TO PLAY)",
        PlaybackState::Playing => "NOW PLAYING",
        _ => "READY TO PLAY",
    }
}

pub fn button_mode(state: PlaybackState) -> ButtonMode {
    match state {
        PlaybackState::Buffering | PlaybackState::Loading | PlaybackState::Connecting => {
            ButtonMode::Load
        }
        PlaybackState::Paused => ButtonMode::Pause,
        PlaybackState::Playing => ButtonMode::Play,
        _ => ButtonMode::Pause,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(status_label(PlaybackState::Playing), "NOW PLAYING");
        assert_eq!(status_label(PlaybackState::Paused), "PAUSED (READY TO PLAY)");
        assert_eq!(status_label(PlaybackState::Buffering), "BUFFERING...");
        assert_eq!(status_label(PlaybackState::Loading), "LOADING...");
        assert_eq!(status_label(PlaybackState::Connecting), "CONNECTING...");
    }

    #[test]
    fn unrecognized_states_read_ready() {
        for state in [PlaybackState::None, PlaybackState::Ready, PlaybackState::Stopped] {
            assert_eq!(status_label(state), "READY TO PLAY");
        }
        let unknown: PlaybackState = "rewinding".parse().unwrap();
        assert_eq!(status_label(unknown), "READY TO PLAY");
    }

    #[test]
    fn buttons() {
        assert_eq!(button_mode(PlaybackState::Paused), ButtonMode::Pause);
        assert_eq!(button_mode(PlaybackState::Playing), ButtonMode::Play);
        assert_eq!(button_mode(PlaybackState::Buffering), ButtonMode::Load);
        assert_eq!(button_mode(PlaybackState::Loading), ButtonMode::Load);
        assert_eq!(button_mode(PlaybackState::Connecting), ButtonMode::Load);
        assert_eq!(button_mode(PlaybackState::Stopped), ButtonMode::Pause);
        assert_eq!(button_mode(PlaybackState::None).to_string(), "pause");
    }
}
