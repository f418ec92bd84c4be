//! Tests for the board and rules engine.

use solo_tictactoe::{Board, Cell, GameStatus, Mark, MoveError, WIN_LINES, evaluate};

#[test]
fn test_rejected_moves_leave_the_board_untouched() {
    let mut board = Board::new();
    board.place(4, Mark::X).unwrap();
    let before = board.clone();

    assert_eq!(board.place(4, Mark::O), Err(MoveError::Occupied(4)));
    assert_eq!(board, before);

    // Rejection is idempotent: retrying fails the same way.
    assert_eq!(board.place(4, Mark::O), Err(MoveError::Occupied(4)));
    assert_eq!(board.place(9, Mark::O), Err(MoveError::OutOfBounds(9)));
    assert_eq!(board, before);
}

#[test]
fn test_top_row_win_reports_mark_and_line() {
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
fn test_every_win_line_is_detected() {
    for line in WIN_LINES {
        let mut board = Board::new();
        for index in line {
            board.place(index, Mark::O).unwrap();
        }
        assert_eq!(
            evaluate(&board),
            GameStatus::Won {
                mark: Mark::O,
                line
            },
            "line {line:?} not detected"
        );
    }
}

#[test]
fn test_full_board_without_a_line_is_a_draw() {
    // X O X / X O O / O X X
    let mut board = Board::new();
    for index in [0, 2, 3, 7, 8] {
        board.place(index, Mark::X).unwrap();
    }
    for index in [1, 4, 5, 6] {
        board.place(index, Mark::O).unwrap();
    }

    assert!(board.is_full());
    assert_eq!(evaluate(&board), GameStatus::Draw);
}

#[test]
fn test_open_board_without_a_line_is_in_progress() {
    let mut board = Board::new();
    board.place(0, Mark::X).unwrap();
    board.place(4, Mark::O).unwrap();
    board.place(8, Mark::X).unwrap();

    assert_eq!(evaluate(&board), GameStatus::InProgress);
}

#[test]
fn test_reset_clears_every_cell() {
    let mut board = Board::new();
    board.place(0, Mark::X).unwrap();
    board.place(4, Mark::O).unwrap();

    board.reset();

    assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(board.count(Mark::X), 0);
    assert_eq!(board.count(Mark::O), 0);
}

#[test]
fn test_display_numbers_empty_cells() {
    let mut board = Board::new();
    board.place(0, Mark::X).unwrap();

    let rendered = board.display();
    assert!(rendered.starts_with("X|2|3"));
}
