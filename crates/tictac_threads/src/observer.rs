//! Move observers: what happens on screen after each accepted move.

use crate::console::render;
use parking_lot::Mutex;
use tictac_board::{GameState, Move};
use tracing::warn;

/// Receives every accepted move while the game lock is still held.
///
/// Runs inside the critical section, so implementations should be quick and
/// must not call back into the [`SharedGame`](crate::SharedGame).
pub trait MoveObserver: Send + Sync {
    /// Called right after `mv` was written to the board, before the outcome
    /// is evaluated and before the turn passes to the opponent.
    fn move_applied(&self, state: &GameState, mv: Move);
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl MoveObserver for SilentObserver {
    fn move_applied(&self, _state: &GameState, _mv: Move) {}
}

/// Redraws the board on stdout after each move.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleObserver {
    clear_screen: bool,
}

impl ConsoleObserver {
    /// Creates a console observer; `clear_screen` wipes the terminal first.
    pub fn new(clear_screen: bool) -> Self {
        Self { clear_screen }
    }
}

impl MoveObserver for ConsoleObserver {
    fn move_applied(&self, state: &GameState, _mv: Move) {
        if let Err(error) = render(state.board(), self.clear_screen) {
            warn!(%error, "Failed to draw board");
        }
    }
}

/// Keeps every observed move in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    moves: Mutex<Vec<Move>>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves seen so far, in order.
    pub fn moves(&self) -> Vec<Move> {
        self.moves.lock().clone()
    }
}

impl MoveObserver for RecordingObserver {
    fn move_applied(&self, _state: &GameState, mv: Move) {
        self.moves.lock().push(mv);
    }
}

impl<T: MoveObserver + ?Sized> MoveObserver for std::sync::Arc<T> {
    fn move_applied(&self, state: &GameState, mv: Move) {
        (**self).move_applied(state, mv);
    }
}
