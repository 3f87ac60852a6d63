//! View module - Text output for the playlist
//!
//! - `status`: Status label and button mode derived from playback state
//! - `utils`: Shared formatting helpers

mod status;
mod utils;

use std::fmt::Write;

use crate::model::{PlaybackState, PlaylistSnapshot};

pub use status::{button_mode, status_label, ButtonMode};

/// Plain-text summary of the playlist for the terminal.
pub fn render_playlist(snapshot: &PlaylistSnapshot, state: PlaybackState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  [{}]", status_label(state), button_mode(state));

    match &snapshot.current_track {
        Some(track) => {
            let _ = writeln!(out, "Current: {}", utils::track_line(track));
        }
        None => {
            let _ = writeln!(out, "Current: -");
        }
    }

    let _ = writeln!(out, "Playlist ({} tracks)", snapshot.playlist_counter);
    let width = utils::calculate_num_width(snapshot.current_queue.len());
    for (i, track) in snapshot.current_queue.iter().enumerate() {
        let marker = if snapshot.current_index == Some(i) { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:>width$} {}",
            marker,
            i,
            utils::track_line(track),
            width = width
        );
    }

    out
}
