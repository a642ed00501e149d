//! Outcome consistency invariant: the recorded outcome agrees with the rules.

use super::super::rules::{has_line, is_draw};
use super::super::{GameState, Move, Outcome};
use super::Invariant;

/// Invariant: an outcome is recorded iff the last move ended the game, and
/// it names the right result.
///
/// A game ends on the move that first creates a line or fills the board, so
/// at most one symbol can ever hold a line.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.outcome() {
            Some(Outcome::Won(symbol)) => {
                let last_mover = state.history().last().map(|Move { symbol, .. }| *symbol);
                has_line(board, symbol)
                    && !has_line(board, symbol.opponent())
                    && last_mover == Some(symbol)
            }
            Some(Outcome::Draw) => is_draw(board),
            None => state
                .history()
                .last()
                .is_none_or(|m| !has_line(board, m.symbol) && !is_draw(board)),
        }
    }

    fn description() -> &'static str {
        "Recorded outcome matches the board"
    }
}
