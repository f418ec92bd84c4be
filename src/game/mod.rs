//! Board and rules engine.
//!
//! Leaf layer of the game: holds the 9-cell grid, validates moves, and
//! detects terminal states. No randomness, no timing, no I/O.

mod rules;
mod types;

pub use rules::{GameStatus, WIN_LINES, evaluate};
pub use types::{Board, Cell, Mark, MoveError};
