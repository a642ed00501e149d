//! Complete, lock-free game state.
//!
//! [`GameState`] is the data the synchronization core guards. It knows the
//! rules but nothing about threads: the core decides when each step runs.

use super::action::{Move, MoveError};
use super::coordinate::Coordinate;
use super::rules;
use super::types::{Board, Outcome, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board, turn owner, outcome and move history of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Symbol,
    outcome: Option<Outcome>,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Symbol::X,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol holding the turn token.
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    /// Terminal outcome, once reached.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether a terminal state has been reached.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks everything about a move except whose turn it is.
    ///
    /// Order matches the rejection precedence: coordinates first, then game
    /// over, then occupancy.
    #[instrument(skip(self))]
    pub fn validate(&self, row: usize, col: usize) -> Result<Coordinate, MoveError> {
        let at = Coordinate::new(row, col)?;
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if !self.board.is_empty(at) {
            return Err(MoveError::CellOccupied(at));
        }
        Ok(at)
    }

    /// Writes a validated move to the board and history.
    ///
    /// Does not evaluate the outcome or pass the turn; see [`Self::finish_turn`].
    pub fn mark(&mut self, symbol: Symbol, at: Coordinate) {
        self.board.place(at, symbol);
        self.history.push(Move::new(symbol, at));
    }

    /// Evaluates terminal conditions for `mover` and hands the turn over.
    ///
    /// The outcome is written at most once; a later call never replaces it.
    #[instrument(skip(self))]
    pub fn finish_turn(&mut self, mover: Symbol) -> Option<Outcome> {
        if self.outcome.is_none() {
            self.outcome = rules::evaluate(&self.board, mover);
            if let Some(outcome) = self.outcome {
                debug!(%outcome, "Terminal state reached");
            }
        }
        self.to_move = mover.opponent();
        self.outcome
    }

    /// Validates, marks and finishes in one step, requiring `symbol` to hold
    /// the turn.
    pub fn play(
        &mut self,
        symbol: Symbol,
        row: usize,
        col: usize,
    ) -> Result<Option<Outcome>, MoveError> {
        if symbol != self.to_move {
            return Err(MoveError::NotYourTurn(symbol));
        }
        let at = self.validate(row, col)?;
        self.mark(symbol, at);
        Ok(self.finish_turn(symbol))
    }

    /// Replays a sequence of `(row, col)` moves, alternating from X.
    pub fn replay(moves: &[(usize, usize)]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for &(row, col) in moves {
            let symbol = state.to_move;
            state.play(symbol, row, col)?;
        }
        Ok(state)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<Move> {
        &mut self.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
