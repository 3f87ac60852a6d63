//! Command-line and environment configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::AdmitMode;

#[derive(Parser, Debug)]
#[command(name = "playlist-sync", version, about = "Keep a playback queue in sync with local storage")]
pub struct Cli {
    /// Directory holding the stored playlist
    #[arg(long, env = "PLAYLIST_SYNC_DATA_DIR", default_value = ".data", global = true)]
    pub data_dir: PathBuf,

    /// Directory for log files
    #[arg(long, env = "PLAYLIST_SYNC_LOG_DIR", default_value = ".logs", global = true)]
    pub log_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a track to the playlist, or play it if it is already there
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        artwork: Option<String>,
        /// `play` starts the track, `atpl` only adds it
        #[arg(long, value_enum, default_value = "atpl")]
        mode: AdmitMode,
    },
    /// Jump to the track at INDEX
    Skip { index: usize },
    /// Start playback of the current track
    Play,
    /// Remove every track from the playlist
    Clear,
    /// Show the playlist and playback status
    Status,
}

/// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            log_dir: cli.log_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_defaults() {
        let cli = Cli::try_parse_from(["playlist-sync", "add", "--id", "42", "--title", "Song"]).unwrap();

        assert_eq!(
            cli.command,
            Command::Add {
                id: "42".to_string(),
                title: Some("Song".to_string()),
                url: None,
                artist: None,
                artwork: None,
                mode: AdmitMode::AddToPlaylist,
            }
        );
    }

    #[test]
    fn parses_play_mode_and_dirs() {
        let cli = Cli::try_parse_from([
            "playlist-sync",
            "--data-dir",
            "/tmp/pl",
            "add",
            "--id",
            "1",
            "--mode",
            "play",
        ])
        .unwrap();

        let config = Config::from(&cli);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pl"));
        assert!(matches!(cli.command, Command::Add { mode: AdmitMode::PlayNow, .. }));
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = Cli::try_parse_from(["playlist-sync", "add", "--id", "1", "--mode", "later"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_skip_index() {
        let cli = Cli::try_parse_from(["playlist-sync", "skip", "3"]).unwrap();
        assert_eq!(cli.command, Command::Skip { index: 3 });
    }
}
