//! Pure tic-tac-toe game logic.
//!
//! Board storage, move validation, win/draw rules and invariants. Nothing in
//! this crate knows about threads; `tictac_threads` wraps [`GameState`] in a
//! lock and hands turns between player threads.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coordinate;
pub mod invariants;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError, RejectionKind};
pub use coordinate::{Coordinate, SIZE};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TicTacToeInvariants};
pub use state::GameState;
pub use types::{Board, Outcome, Square, Symbol};
