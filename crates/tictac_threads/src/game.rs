//! Shared game: the synchronization core.
//!
//! One [`GameState`] behind a mutex, plus a condition variable that hands the
//! turn token from one player thread to the other. Every read and write of
//! board, turn and outcome happens under the same lock, so a caller never
//! sees a torn combination of "whose turn" and "is it over".

use crate::observer::{MoveObserver, SilentObserver};
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tictac_board::{Board, GameState, Move, MoveError, Outcome, Symbol, invariants};
use tracing::{debug, info, instrument, trace, warn};

/// Game state shared between two player threads.
pub struct SharedGame {
    state: Mutex<GameState>,
    turn_changed: Condvar,
    /// Set once a player stops issuing moves. Only written with `state` locked.
    departed: AtomicBool,
    observer: Box<dyn MoveObserver>,
    pace: Duration,
}

impl SharedGame {
    /// Creates a game with no display and no pacing delay.
    pub fn new() -> Self {
        Self::with_observer(SilentObserver, Duration::ZERO)
    }

    /// Creates a game that reports every accepted move to `observer` and then
    /// sleeps for `pace` before handing the turn over.
    #[instrument(skip(observer))]
    pub fn with_observer(observer: impl MoveObserver + 'static, pace: Duration) -> Self {
        Self {
            state: Mutex::new(GameState::new()),
            turn_changed: Condvar::new(),
            departed: AtomicBool::new(false),
            observer: Box::new(observer),
            pace,
        }
    }

    /// Places `symbol` at `(row, col)`, blocking until `symbol` holds the turn.
    ///
    /// A waiter is also released once the game is over, and then gets
    /// [`MoveError::GameAlreadyOver`], or once the opponent has left, and then
    /// gets [`MoveError::OpponentLeft`]. Any rejection leaves the board and the
    /// turn untouched: a caller that hits an occupied cell keeps the turn and
    /// may try again without waiting.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidCoordinate`] if `row` or `col` is outside `0..3`.
    /// - [`MoveError::GameAlreadyOver`] once a terminal state was reached.
    /// - [`MoveError::CellOccupied`] if the cell already holds a symbol.
    /// - [`MoveError::OpponentLeft`] if the turn can no longer come back.
    #[instrument(skip(self))]
    pub fn attempt_move(&self, symbol: Symbol, row: usize, col: usize) -> Result<(), MoveError> {
        let mut state = self.state.lock();
        while state.to_move() != symbol && !state.is_over() && !self.has_departure() {
            trace!("Waiting for turn");
            self.turn_changed.wait(&mut state);
        }
        if state.to_move() != symbol && !state.is_over() {
            debug!("Opponent left while waiting");
            return Err(MoveError::OpponentLeft);
        }
        self.apply(&mut state, symbol, row, col)
    }

    /// Non-blocking variant of [`Self::attempt_move`].
    ///
    /// # Errors
    ///
    /// Everything [`Self::attempt_move`] returns, plus
    /// [`MoveError::NotYourTurn`] instead of waiting.
    #[instrument(skip(self))]
    pub fn try_move(&self, symbol: Symbol, row: usize, col: usize) -> Result<(), MoveError> {
        let mut state = self.state.lock();
        if state.to_move() != symbol && !state.is_over() {
            if self.has_departure() {
                return Err(MoveError::OpponentLeft);
            }
            debug!("Rejected out-of-turn move");
            return Err(MoveError::NotYourTurn(symbol));
        }
        self.apply(&mut state, symbol, row, col)
    }

    /// Runs one move under the lock: mutate, display, pace, evaluate, flip, signal.
    fn apply(
        &self,
        state: &mut GameState,
        symbol: Symbol,
        row: usize,
        col: usize,
    ) -> Result<(), MoveError> {
        let at = state.validate(row, col).inspect_err(|error| {
            debug!(%error, row, col, "Move rejected");
        })?;

        state.mark(symbol, at);
        self.observer.move_applied(state, Move::new(symbol, at));
        if !self.pace.is_zero() {
            std::thread::sleep(self.pace);
        }

        let outcome = state.finish_turn(symbol);
        debug_assert!(
            invariants::check(state).is_ok(),
            "invariants violated after {symbol} at {at}"
        );
        match outcome {
            Some(outcome) => info!(%at, %outcome, "Move accepted, game over"),
            None => debug!(%at, "Move accepted"),
        }

        self.turn_changed.notify_one();
        Ok(())
    }

    /// Records that `symbol` will not move again and wakes every waiter.
    ///
    /// Called when a player thread exits, including by unwinding. A caller
    /// still waiting for `symbol` to hand the turn over then gets
    /// [`MoveError::OpponentLeft`] instead of blocking forever.
    #[instrument(skip(self))]
    pub fn leave(&self, symbol: Symbol) {
        let state = self.state.lock();
        if !state.is_over() && state.to_move() == symbol {
            warn!("Player left while holding the turn");
        }
        self.departed.store(true, Ordering::Relaxed);
        drop(state);
        self.turn_changed.notify_all();
    }

    fn has_departure(&self) -> bool {
        self.departed.load(Ordering::Relaxed)
    }

    /// Whether a terminal state has been reached.
    pub fn is_game_over(&self) -> bool {
        self.state.lock().is_over()
    }

    /// Terminal outcome, once the game is over.
    pub fn winner(&self) -> Option<Outcome> {
        self.state.lock().outcome()
    }

    /// Symbol currently holding the turn token.
    pub fn current_player(&self) -> Symbol {
        self.state.lock().to_move()
    }

    /// Copy of the board.
    pub fn board(&self) -> Board {
        self.state.lock().board().clone()
    }

    /// Consistent copy of the whole state.
    pub fn snapshot(&self) -> GameState {
        self.state.lock().clone()
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedGame")
            .field("state", &*self.state.lock())
            .field("pace", &self.pace)
            .finish_non_exhaustive()
    }
}
