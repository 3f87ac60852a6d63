//! Model module - Application state and data types
//!
//! - `track`: The track record passed between store, engine and UI
//! - `playback`: Playback state and admission mode enums
//! - `app_model`: Observable playlist state container

mod track;
mod playback;
mod app_model;

pub use track::Track;

pub use playback::{AdmitMode, PlaybackState};

pub use app_model::{PlaylistSnapshot, PlaylistState};
