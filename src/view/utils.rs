//! Utility functions for rendering playlist lines

use crate::model::Track;

pub fn format_duration(ms: u32) -> String {
    let total_seconds = ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

/// "Title - Artist (m:ss)", falling back to the id when there is no title.
/// Track durations are stored in seconds.
pub fn track_line(track: &Track) -> String {
    let mut line = track.title().unwrap_or(&track.id).to_string();
    if let Some(artist) = track.artist() {
        line.push_str(" - ");
        line.push_str(artist);
    }
    if let Some(seconds) = track.metadata.get("duration").and_then(|d| d.as_f64()) {
        line.push_str(&format!(" ({})", format_duration((seconds * 1000.0) as u32)));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_width_grows_with_digits() {
        assert_eq!(calculate_num_width(0), 2);
        assert_eq!(calculate_num_width(9), 2);
        assert_eq!(calculate_num_width(10), 3);
        assert_eq!(calculate_num_width(250), 4);
    }

    #[test]
    fn track_line_variants() {
        assert_eq!(track_line(&Track::new("x1")), "x1");

        let mut track = Track::new("x2").with("title", "Song").with("artist", "Someone");
        track.metadata.insert("duration".to_string(), serde_json::json!(185));
        assert_eq!(track_line(&track), "Song - Someone (3:05)");
    }
}
