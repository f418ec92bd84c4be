//! Turn controller for a match against the randomized computer opponent.
//!
//! The controller owns the board and match state, alternates turns between
//! the human and the computer, applies the artificial thinking delay before
//! computer moves, and notifies the presentation layer with a [`Snapshot`]
//! after every accepted transition.

use crate::game::{Board, GameStatus, Mark, evaluate};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Which mark belongs to the human, and which mark opens the game.
///
/// Both choices are drawn independently, so the computer opens half of all
/// games regardless of which mark it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The human's mark.
    pub human: Mark,
    /// The mark that moves first.
    pub first_move: Mark,
}

impl Assignment {
    /// Draws a fresh random assignment.
    pub fn random(rng: &mut impl Rng) -> Self {
        let human = if rng.random_bool(0.5) { Mark::X } else { Mark::O };
        let first_move = if rng.random_bool(0.5) { Mark::X } else { Mark::O };
        Self { human, first_move }
    }

    /// The computer's mark.
    pub fn computer(&self) -> Mark {
        self.human.opponent()
    }
}

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the presentation layer to submit a human move.
    AwaitingHuman,
    /// A computer move is pending behind the thinking delay.
    ComputerThinking,
    /// Terminal; no moves are accepted until restart.
    GameOver(Outcome),
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// Full board, no line.
    Draw,
}

/// State-change notification for the presentation layer.
///
/// Delivered after every accepted mutation; carries everything a renderer
/// needs, so the presentation layer holds no game state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents at the time of the notification.
    pub board: Board,
    /// The human's mark.
    pub human_mark: Mark,
    /// The computer's mark.
    pub computer_mark: Mark,
    /// Controller phase, carrying the turn owner or the terminal result.
    pub phase: Phase,
    /// The completed line, when the game ended in a win.
    pub winning_line: Option<[usize; 3]>,
}

/// Input from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The user chose a cell (0-8).
    CellChosen(usize),
    /// Abandon the current game and start over with a fresh assignment.
    Restart,
}

/// Picks a uniformly random empty cell by resampling rejected draws.
///
/// The board must have at least one empty cell; a terminal check always
/// precedes scheduling a computer move, so a full board here is a wiring
/// bug.
pub fn random_empty_cell(board: &Board, rng: &mut impl Rng) -> usize {
    assert!(!board.is_full(), "no empty cell to pick");
    loop {
        let index = rng.random_range(0..9);
        if board.is_empty(index) {
            return index;
        }
    }
}

/// Drives a match between the human and the randomized computer opponent.
pub struct TurnController {
    board: Board,
    assignment: Assignment,
    phase: Phase,
    winning_line: Option<[usize; 3]>,
    delay: Duration,
    rng: StdRng,
    snapshots: mpsc::UnboundedSender<Snapshot>,
}

impl TurnController {
    /// Creates a controller that notifies `snapshots` after every accepted
    /// transition.
    ///
    /// No game is running until [`TurnController::run`] (or a `start_*`
    /// method) is called.
    pub fn new(delay: Duration, rng: StdRng, snapshots: mpsc::UnboundedSender<Snapshot>) -> Self {
        Self {
            board: Board::new(),
            assignment: Assignment {
                human: Mark::X,
                first_move: Mark::X,
            },
            phase: Phase::AwaitingHuman,
            winning_line: None,
            delay,
            rng,
            snapshots,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current mark assignment.
    pub fn assignment(&self) -> Assignment {
        self.assignment
    }

    /// Begins a fresh game with a random assignment.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        let assignment = Assignment::random(&mut self.rng);
        self.start_with(assignment);
    }

    /// Begins a fresh game with a fixed assignment.
    pub fn start_with(&mut self, assignment: Assignment) {
        self.board.reset();
        self.assignment = assignment;
        self.winning_line = None;
        self.phase = if assignment.first_move == assignment.human {
            Phase::AwaitingHuman
        } else {
            Phase::ComputerThinking
        };
        info!(
            human = %assignment.human,
            computer = %assignment.computer(),
            first = %assignment.first_move,
            "starting game"
        );
        self.notify();
    }

    /// Applies the human's move at `index`.
    ///
    /// Ignored unless the controller is awaiting a human move; the board is
    /// rendered non-interactive in the other phases, so anything arriving
    /// here is a stale click. A rejected move (occupied cell, out-of-range
    /// index) leaves the state untouched and produces no notification.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, index: usize) {
        if self.phase != Phase::AwaitingHuman {
            debug!(phase = ?self.phase, "ignoring move outside human turn");
            return;
        }
        if let Err(err) = self.board.place(index, self.assignment.human) {
            debug!(%err, "ignoring rejected move");
            return;
        }
        match evaluate(&self.board) {
            GameStatus::InProgress => self.phase = Phase::ComputerThinking,
            status => self.finish(status),
        }
        self.notify();
    }

    /// Plays the computer's move.
    ///
    /// Only the elapsed thinking timer may call this; any other phase is a
    /// wiring bug in the controller, not a user condition.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) {
        assert_eq!(
            self.phase,
            Phase::ComputerThinking,
            "computer move outside the thinking phase"
        );
        let index = random_empty_cell(&self.board, &mut self.rng);
        let mark = self.assignment.computer();
        self.board
            .place(index, mark)
            .expect("random draw landed on an occupied cell");
        debug!(index, %mark, "computer moved");
        match evaluate(&self.board) {
            GameStatus::InProgress => self.phase = Phase::AwaitingHuman,
            status => self.finish(status),
        }
        self.notify();
    }

    /// Abandons the current game and starts a new one.
    ///
    /// Valid from any phase. The run loop drops a pending thinking timer
    /// before handling the restart, so a stale computer move never fires
    /// into the new game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("restarting");
        self.start_game();
    }

    fn finish(&mut self, status: GameStatus) {
        let outcome = match status {
            GameStatus::Won { mark, line } => {
                self.winning_line = Some(line);
                if mark == self.assignment.human {
                    Outcome::HumanWin
                } else {
                    Outcome::ComputerWin
                }
            }
            GameStatus::Draw => Outcome::Draw,
            GameStatus::InProgress => unreachable!("finish called on a live board"),
        };
        info!(?outcome, "game over");
        self.phase = Phase::GameOver(outcome);
    }

    fn notify(&self) {
        let snapshot = Snapshot {
            board: self.board.clone(),
            human_mark: self.assignment.human,
            computer_mark: self.assignment.computer(),
            phase: self.phase,
            winning_line: self.winning_line,
        };
        if self.snapshots.send(snapshot).is_err() {
            debug!("snapshot receiver dropped");
        }
    }

    /// Runs the controller until the command channel closes.
    ///
    /// Starts the first game, then processes presentation commands. While a
    /// computer move is pending, the armed one-shot delay and the command
    /// stream race: ignored clicks keep the same timer running, and a
    /// restart drops it, cancelling the pending move.
    pub async fn run(&mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        self.start_game();
        loop {
            if self.phase == Phase::ComputerThinking {
                let think = sleep(self.delay);
                tokio::pin!(think);
                loop {
                    tokio::select! {
                        () = &mut think => {
                            self.computer_move();
                            break;
                        }
                        cmd = commands.recv() => {
                            let Some(cmd) = cmd else { return };
                            match cmd {
                                // Re-enter the outer loop so a new game that
                                // opens with the computer arms a fresh timer.
                                Command::Restart => {
                                    self.restart();
                                    break;
                                }
                                // Phase check ignores it; the timer keeps
                                // its original deadline.
                                Command::CellChosen(index) => self.submit_human_move(index),
                            }
                        }
                    }
                }
            } else {
                let Some(cmd) = commands.recv().await else { return };
                match cmd {
                    Command::CellChosen(index) => self.submit_human_move(index),
                    Command::Restart => self.restart(),
                }
            }
        }
    }
}
