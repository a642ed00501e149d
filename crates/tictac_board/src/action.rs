//! First-class move and move-error types.
//!
//! A move is a domain event: who placed a mark, and where. The core records
//! accepted moves in order, which is what the invariants reason about.

use super::coordinate::Coordinate;
use super::types::Symbol;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An accepted placement of a symbol on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol that moved.
    pub symbol: Symbol,
    /// Where it was placed.
    pub at: Coordinate,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(symbol: Symbol, at: Coordinate) -> Self {
        Self { symbol, at }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.at)
    }
}

/// Reasons a move attempt is rejected.
///
/// None of these are fatal; a rejected attempt leaves the board and the turn
/// exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column outside `0..3`.
    #[display("Coordinate ({}, {}) is off the board", row, col)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a symbol.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Coordinate),

    /// The game reached a terminal state.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Non-blocking attempt made while the other symbol holds the turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Symbol),

    /// The opponent's thread stopped while the caller was waiting on it.
    #[display("Opponent left the game")]
    OpponentLeft,
}

/// Coarse classification of a rejection, used for per-player statistics.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RejectionKind {
    /// See [`MoveError::InvalidCoordinate`].
    InvalidCoordinate,
    /// See [`MoveError::CellOccupied`].
    CellOccupied,
    /// See [`MoveError::GameAlreadyOver`].
    GameAlreadyOver,
    /// See [`MoveError::NotYourTurn`].
    NotYourTurn,
    /// See [`MoveError::OpponentLeft`].
    OpponentLeft,
}

impl MoveError {
    /// Classifies this rejection.
    pub fn kind(&self) -> RejectionKind {
        match self {
            MoveError::InvalidCoordinate { .. } => RejectionKind::InvalidCoordinate,
            MoveError::CellOccupied(_) => RejectionKind::CellOccupied,
            MoveError::GameAlreadyOver => RejectionKind::GameAlreadyOver,
            MoveError::NotYourTurn(_) => RejectionKind::NotYourTurn,
            MoveError::OpponentLeft => RejectionKind::OpponentLeft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let at = Coordinate::new(1, 2).unwrap();
        assert_eq!(
            MoveError::CellOccupied(at).to_string(),
            "Cell (1, 2) is already occupied"
        );
        assert_eq!(
            MoveError::InvalidCoordinate { row: 5, col: 0 }.to_string(),
            "Coordinate (5, 0) is off the board"
        );
        assert_eq!(MoveError::NotYourTurn(Symbol::O).to_string(), "It's not O's turn");
    }

    #[test]
    fn test_kind() {
        assert_eq!(MoveError::GameAlreadyOver.kind(), RejectionKind::GameAlreadyOver);
        assert_eq!(RejectionKind::CellOccupied.to_string(), "cell_occupied");
        assert_eq!(MoveError::OpponentLeft.kind(), RejectionKind::OpponentLeft);
    }
}
