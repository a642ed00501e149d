//! Balanced counts invariant: X is never behind O, and never more than one ahead.

use super::super::{GameState, Symbol};
use super::Invariant;
use tracing::warn;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct BalancedCountsInvariant;

impl Invariant<GameState> for BalancedCountsInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Symbol::X);
        let o_count = state.board().count(Symbol::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;

    #[test]
    fn test_holds_through_play() {
        let mut state = GameState::new();
        for (row, col) in [(0, 0), (0, 1), (1, 1)] {
            let symbol = state.to_move();
            state.play(symbol, row, col).unwrap();
            assert!(BalancedCountsInvariant::holds(&state));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut state = GameState::new();
        state
            .board_mut()
            .place(Coordinate::new(0, 0).unwrap(), Symbol::O);
        assert!(!BalancedCountsInvariant::holds(&state));
    }
}
