//! solo_tictactoe - terminal tic-tac-toe against a randomized computer.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use rand::SeedableRng;
use rand::rngs::StdRng;
use solo_tictactoe::TurnController;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to a file to avoid interfering with the TUI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(delay_ms = cli.delay_ms, seed = ?cli.seed, "starting solo_tictactoe");

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel();

    let mut controller = TurnController::new(
        Duration::from_millis(cli.delay_ms),
        rng,
        snapshot_tx,
    );
    let controller_task = tokio::spawn(async move { controller.run(command_rx).await });

    // run_tui owns the command sender; when it returns the channel closes
    // and the controller loop drains out.
    let res = tui::run_tui(command_tx, snapshot_rx).await;

    controller_task.await?;
    res
}
