//! Win and draw evaluation for tic-tac-toe.
//!
//! Evaluation is a pure function of the board. Rules are separated from
//! board storage so the turn controller can reuse a single evaluation per
//! move for both branching and notification.

use super::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// The 8 winning lines, as index triples into the board.
///
/// Enumeration order is fixed: rows, then columns, then diagonals. When a
/// degenerate board completes several lines at once, the first line in this
/// order is the one reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // middle column
    [2, 5, 8], // right column
    [0, 4, 8], // principal diagonal
    [2, 4, 6], // secondary diagonal
];

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No completed line and at least one empty cell.
    InProgress,
    /// `mark` holds all three cells of `line`.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: [usize; 3],
    },
    /// Board full with no completed line.
    Draw,
}

/// Evaluates the board.
///
/// Scans the win lines in their fixed order and reports the first line held
/// entirely by one mark. A full board with no such line is a draw.
pub fn evaluate(board: &Board) -> GameStatus {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(Cell::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Cell::Occupied(mark))
            && board.get(c) == Some(Cell::Occupied(mark))
        {
            return GameStatus::Won { mark, line };
        }
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new();
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::X).unwrap();
        board.place(2, Mark::X).unwrap();
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.place(0, Mark::O).unwrap();
        board.place(4, Mark::O).unwrap();
        board.place(8, Mark::O).unwrap();
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                mark: Mark::O,
                line: [0, 4, 8]
            }
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::X).unwrap();
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full, no line
        let mut board = Board::new();
        for (index, mark) in [
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::O),
        ] {
            board.place(index, mark).unwrap();
        }
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_simultaneous_lines_report_first_in_order() {
        // Not reachable by legal play; the engine still resolves it
        // deterministically by enumeration order.
        let mut board = Board::new();
        for index in 0..6 {
            board.place(index, Mark::X).unwrap();
        }
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
    }
}
