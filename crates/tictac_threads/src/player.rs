//! Player actors: one thread, one symbol, one strategy.

use crate::game::SharedGame;
use crate::strategy::{Strategy, StrategyKind};
use derive_getters::Getters;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tictac_board::{MoveError, RejectionKind, Symbol};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a player actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PlayerPhase {
    /// Constructed, not started.
    Idle,
    /// Issuing moves.
    Running,
    /// Loop finished; the game was over or the strategy ran dry.
    Done,
}

/// What a player did during one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct PlayerStats {
    /// Symbol the player placed.
    symbol: Symbol,
    /// Strategy it used.
    strategy: StrategyKind,
    /// Calls into the shared game.
    attempts: usize,
    /// Attempts that placed a mark.
    accepted: usize,
    /// Rejected attempts by reason.
    rejections: BTreeMap<RejectionKind, usize>,
}

impl PlayerStats {
    fn new(symbol: Symbol, strategy: StrategyKind) -> Self {
        Self {
            symbol,
            strategy,
            attempts: 0,
            accepted: 0,
            rejections: BTreeMap::new(),
        }
    }

    /// Total rejected attempts.
    pub fn rejected(&self) -> usize {
        self.rejections.values().sum()
    }
}

/// A player bound to a symbol, a strategy and the shared game.
pub struct Player {
    symbol: Symbol,
    strategy: Box<dyn Strategy>,
    game: Arc<SharedGame>,
    phase: PlayerPhase,
    stats: PlayerStats,
}

impl Player {
    /// Creates an idle player.
    pub fn new(symbol: Symbol, strategy: Box<dyn Strategy>, game: Arc<SharedGame>) -> Self {
        let stats = PlayerStats::new(symbol, strategy.kind());
        Self {
            symbol,
            strategy,
            game,
            phase: PlayerPhase::Idle,
            stats,
        }
    }

    /// Symbol this player places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    /// Statistics so far.
    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Issues moves until the game is over or the strategy is exhausted.
    ///
    /// The game-over check runs before every attempt, accepted or not.
    /// Rejections are counted and otherwise ignored.
    #[instrument(skip(self), fields(symbol = %self.symbol, strategy = %self.stats.strategy))]
    pub fn run(&mut self) {
        self.phase = PlayerPhase::Running;
        debug!("Player started");

        while !self.game.is_game_over() {
            let Some((row, col)) = self.strategy.next_move() else {
                debug!("Strategy exhausted");
                break;
            };
            self.stats.attempts += 1;
            match self.game.attempt_move(self.symbol, row, col) {
                Ok(()) => self.stats.accepted += 1,
                Err(error) => {
                    *self.stats.rejections.entry(error.kind()).or_default() += 1;
                    if error == MoveError::OpponentLeft {
                        debug!("Opponent left, stopping");
                        break;
                    }
                }
            }
        }

        self.phase = PlayerPhase::Done;
        info!(
            attempts = self.stats.attempts,
            accepted = self.stats.accepted,
            rejected = self.stats.rejected(),
            "Player finished"
        );
    }

    /// Runs to completion on the current thread and returns the statistics.
    ///
    /// However the loop ends, panics included, the player leaves the shared
    /// game so the opponent is never left waiting on it.
    pub fn play(mut self) -> PlayerStats {
        let _seat = Seat {
            symbol: self.symbol,
            game: Arc::clone(&self.game),
        };
        self.run();
        self.stats
    }

    /// Runs on a new named thread.
    pub fn spawn(self) -> std::io::Result<JoinHandle<PlayerStats>> {
        thread::Builder::new()
            .name(format!("player-{}", self.symbol))
            .spawn(move || self.play())
    }
}

/// Leaves the game when dropped.
struct Seat {
    symbol: Symbol,
    game: Arc<SharedGame>,
}

impl Drop for Seat {
    fn drop(&mut self) {
        if thread::panicking() {
            warn!(symbol = %self.symbol, "Player panicked, releasing opponent");
        }
        self.game.leave(self.symbol);
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("symbol", &self.symbol)
            .field("phase", &self.phase)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
