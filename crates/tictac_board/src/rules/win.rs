//! Win detection logic for tic-tac-toe.

use super::super::{Board, Coordinate, Square, Symbol};
use tracing::instrument;

const fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::ALL[row * 3 + col]
}

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Coordinate; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks whether `symbol` holds three in a row on any line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, symbol: Symbol) -> bool {
    let mark = Square::Occupied(symbol);
    LINES
        .iter()
        .any(|line| line.iter().all(|&cell| board.get(cell) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_line_empty_board() {
        let board = Board::new();
        assert!(!has_line(&board, Symbol::X));
        assert!(!has_line(&board, Symbol::O));
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            for symbol in [Symbol::X, Symbol::O] {
                let mut board = Board::new();
                for cell in line {
                    board.place(cell, symbol);
                }
                assert!(has_line(&board, symbol), "{symbol} should win on {line:?}");
                assert!(!has_line(&board, symbol.opponent()));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(at(0, 0), Symbol::X);
        board.place(at(0, 1), Symbol::O);
        board.place(at(0, 2), Symbol::X);
        assert!(!has_line(&board, Symbol::X));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        board.place(at(1, 1), Symbol::O);
        board.place(at(2, 2), Symbol::O);
        assert!(!has_line(&board, Symbol::O));
    }
}
