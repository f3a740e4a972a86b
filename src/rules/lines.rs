//! The eight winning lines.

use crate::core::{Board, Mark};

/// Winning lines in the order they are checked: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// The mark filling the first complete line, if any.
///
/// Only one mark can own a line in a reachable position, so the check
/// order does not affect the result.
#[must_use]
pub fn winning_mark(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board[a];
        (!mark.is_empty() && mark == board[b] && mark == board[c]).then_some(mark)
    })
}

/// True if some line is filled with `mark`.
#[must_use]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    !mark.is_empty()
        && LINES
            .iter()
            .any(|line| line.iter().all(|&i| board[i] == mark))
}

/// True if writing `mark` at `cell` would complete a line of `mark`.
///
/// Works on a copy; `board` is not touched. Off-board cells and
/// `Mark::Empty` never complete a line.
#[must_use]
pub fn completes_line(board: &Board, cell: usize, mark: Mark) -> bool {
    board
        .with_mark(cell, mark)
        .is_some_and(|hypothetical| has_line(&hypothetical, mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark::{Empty as E, O, X};

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_mark(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_marks([X, X, X, O, O, E, E, E, E]);
        assert_eq!(winning_mark(&board), Some(X));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_marks([X, O, X, E, O, X, E, O, E]);
        assert_eq!(winning_mark(&board), Some(O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_marks([X, X, O, E, O, E, O, E, X]);
        assert_eq!(winning_mark(&board), Some(O));
    }

    #[test]
    fn test_full_board_without_line() {
        let board = Board::from_marks([X, O, X, X, O, O, O, X, X]);
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn test_has_line() {
        let board = Board::from_marks([O, X, X, E, O, X, E, E, O]);
        assert!(has_line(&board, O));
        assert!(!has_line(&board, X));
        assert!(!has_line(&Board::new(), E));
    }

    #[test]
    fn test_completes_line() {
        let board = Board::from_marks([X, X, E, E, O, E, E, E, E]);

        assert!(completes_line(&board, 2, X));
        assert!(!completes_line(&board, 2, O));
        assert!(!completes_line(&board, 3, X));
        assert!(!completes_line(&board, 2, E));
        assert!(!completes_line(&board, 9, X));

        // Original board untouched.
        assert_eq!(board[2], E);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut marks = [E; 9];
            for cell in line {
                marks[cell] = O;
            }
            assert_eq!(winning_mark(&Board::from_marks(marks)), Some(O), "line {:?}", line);
        }
    }
}
