//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! storage so the synchronization core can evaluate them inside its critical
//! section without owning any rule logic itself.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, has_line};

use super::{Board, Outcome, Symbol};
use tracing::instrument;

/// Evaluates the board after `mover` placed a mark.
///
/// Win is checked before draw, so a full board with a line is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Symbol) -> Option<Outcome> {
    if has_line(board, mover) {
        Some(Outcome::Won(mover))
    } else if is_draw(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
