//! Playback-related types

use std::fmt;
use std::str::FromStr;

/// Transport state reported by the playback engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    None,
    Ready,
    Playing,
    Paused,
    Stopped,
    Buffering,
    Connecting,
    Loading,
}

impl PlaybackState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
            Self::Buffering => "buffering",
            Self::Connecting => "connecting",
            Self::Loading => "loading",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized names fall back to `None` rather than failing, engines
/// are free to report states we don't know about.
impl FromStr for PlaybackState {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "ready" => Self::Ready,
            "playing" => Self::Playing,
            "paused" => Self::Paused,
            "stopped" => Self::Stopped,
            "buffering" => Self::Buffering,
            "connecting" => Self::Connecting,
            "loading" => Self::Loading,
            _ => Self::None,
        })
    }
}

/// How a track should be admitted into the queue
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum AdmitMode {
    /// Add (if needed) and start playing it right away
    #[value(name = "play")]
    PlayNow,
    /// Add to the playlist without touching playback
    #[value(name = "atpl")]
    AddToPlaylist,
}

impl AdmitMode {
    pub fn tag(self) -> &'static str {
        match self {
            Self::PlayNow => "play",
            Self::AddToPlaylist => "atpl",
        }
    }
}
