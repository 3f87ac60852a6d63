use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use playlist_sync::audio::QueuePlayer;
use playlist_sync::config::{Cli, Command, Config};
use playlist_sync::controller::PlaylistController;
use playlist_sync::model::{PlaylistState, Track};
use playlist_sync::notify::ConsoleNotifier;
use playlist_sync::ports::{Notifier, Severity};
use playlist_sync::storage::FileStore;
use playlist_sync::{logging, view};

type AppController = PlaylistController<FileStore, QueuePlayer, ConsoleNotifier>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    if let Err(e) = logging::init_logging(&config.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!(data_dir = %config.data_dir.display(), "=== playlist-sync starting ===");

    let controller = PlaylistController::new(
        Arc::new(FileStore::new(&config.data_dir)),
        Arc::new(QueuePlayer::new()),
        Arc::new(ConsoleNotifier),
        PlaylistState::new(),
    );

    // A failed restore leaves an empty playlist; keep going
    let _ = controller.restore_from_storage().await;

    let code = match run_command(&controller, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "Command failed");
            controller
                .notifier()
                .show(Severity::Error, &AppController::format_error(&err));
            ExitCode::FAILURE
        }
    };

    tracing::info!("playlist-sync shutting down");
    code
}

async fn run_command(controller: &AppController, command: Command) -> Result<()> {
    match command {
        Command::Add {
            id,
            title,
            url,
            artist,
            artwork,
            mode,
        } => {
            let mut track = Track::new(id);
            for (key, value) in [("title", title), ("url", url), ("artist", artist), ("artwork", artwork)] {
                if let Some(value) = value {
                    track = track.with(key, value);
                }
            }

            let queue = controller.state().snapshot().current_queue;
            let admission = controller.add_track(track, &queue, mode).await?;
            tracing::debug!(?admission, "Add finished");
        }
        Command::Skip { index } => controller.skip_to(index).await?,
        Command::Play => controller.play().await?,
        Command::Clear => controller.clear().await?,
        Command::Status => {}
    }

    let state = controller.playback_state().await?;
    print!("{}", view::render_playlist(&controller.state().snapshot(), state));
    Ok(())
}
