//! Tic-tac-toe in the terminal.
//!
//! Click a cell to place the active player's marker. Once a round is won or
//! drawn, the next click starts a fresh round. `q`, `Esc` or `Ctrl+C` quits.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use std::path::Path;
use tictactoe::{GameConfig, GameLoop, MarkerImages, TerminalPresenter, terminal};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = GameConfig::load()?;
    init_tracing(config.log_file())?;

    info!(?config, "Starting tic-tac-toe");

    // Both markers must load before the terminal is touched.
    let (cell_width, cell_height) = config.cell_size();
    let markers = MarkerImages::load(
        config.x_marker_path(),
        config.o_marker_path(),
        cell_width,
        cell_height,
    )
    .inspect_err(|e| error!(error = %e, "Failed to load marker assets"))?;

    run(markers, &config)
}

#[instrument(skip_all)]
fn run(markers: MarkerImages, config: &GameConfig) -> Result<()> {
    terminal::install_panic_hook();
    let presenter = TerminalPresenter::new(terminal::enter()?);
    let mut game = GameLoop::new(presenter, markers, config);

    let res = game.run();

    // Always try to restore terminal state.
    let mut term = game.into_presenter().into_terminal();
    if let Err(e) = terminal::restore(&mut term) {
        error!(error = %e, "Failed to restore terminal");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Sends tracing output to a file so it doesn't interfere with the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
