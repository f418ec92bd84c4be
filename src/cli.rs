//! Command-line interface for solo_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Single-player tic-tac-toe against a randomized computer opponent.
#[derive(Parser, Debug)]
#[command(name = "solo_tictactoe")]
#[command(about = "Tic-tac-toe against a randomized computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Computer "thinking" delay in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,

    /// Seed for the match RNG (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file (logs go to a file so they don't disturb the terminal UI)
    #[arg(long, default_value = "solo_tictactoe.log")]
    pub log_file: PathBuf,
}
