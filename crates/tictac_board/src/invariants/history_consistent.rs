//! History consistency invariant: the move log explains the board exactly.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every logged move shows on the board with its symbol, and the
/// board holds nothing the log does not.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let history = state.history();

        history
            .iter()
            .all(|m| board.get(m.at) == Square::Occupied(m.symbol))
            && board.filled() == history.len()
    }

    fn description() -> &'static str {
        "Move history matches board contents"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, Symbol};

    #[test]
    fn test_replayed_game_holds() {
        let state = GameState::replay(&[(2, 2), (0, 0), (1, 2)]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_unlogged_mark_violates() {
        let mut state = GameState::replay(&[(2, 2)]).unwrap();
        state
            .board_mut()
            .place(Coordinate::new(0, 1).unwrap(), Symbol::O);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut state = GameState::replay(&[(2, 2)]).unwrap();
        state
            .board_mut()
            .place(Coordinate::new(2, 2).unwrap(), Symbol::O);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
