//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Symbol};
use super::win::has_line;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.filled() == 9
}

/// A draw is a full board where neither symbol holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_line(board, Symbol::X) && !has_line(board, Symbol::O)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let layout = [
            Symbol::X, Symbol::O, Symbol::X,
            Symbol::O, Symbol::X, Symbol::X,
            Symbol::O, Symbol::X, Symbol::O,
        ];
        let mut board = Board::new();
        for (cell, symbol) in Coordinate::ALL.into_iter().zip(layout) {
            board.place(cell, symbol);
        }
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for cell in Coordinate::ALL {
            board.place(cell, Symbol::O);
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
