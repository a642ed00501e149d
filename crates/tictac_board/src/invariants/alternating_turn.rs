//! Alternating turn invariant: accepted moves go X, O, X, O, ...

use super::super::{GameState, Symbol};
use super::Invariant;

/// Invariant: symbols alternate, starting with X, and the turn token sits
/// with the symbol that did not make the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first()
            && first.symbol != Symbol::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].symbol == w[1].symbol) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Symbol::X
        } else {
            Symbol::O
        };
        state.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Symbols alternate turns (X, O, X, O, ...)"
    }
}
