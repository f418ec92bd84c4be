//! Single-player tic-tac-toe against a randomized computer opponent.
//!
//! The crate splits into two layers:
//!
//! - the board/rules engine ([`Board`], [`evaluate`]) validates moves and
//!   detects terminal states;
//! - the [`TurnController`] owns whose turn it is, drives the human-move
//!   and computer-move paths, applies the artificial thinking delay before
//!   computer moves, and notifies the presentation layer with a
//!   [`Snapshot`] after every accepted transition.
//!
//! Presentation is an external collaborator: it forwards [`Command`]s into
//! the controller over a channel and renders the snapshots it receives. The
//! library holds no rendering concerns.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod controller;
mod game;

// Crate-level exports - turn controller
pub use controller::{
    Assignment, Command, Outcome, Phase, Snapshot, TurnController, random_empty_cell,
};

// Crate-level exports - board and rules engine
pub use game::{Board, Cell, GameStatus, Mark, MoveError, WIN_LINES, evaluate};
