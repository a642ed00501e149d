//! Two-thread tic-tac-toe.
//!
//! Each player runs on its own OS thread. Moves go through one
//! [`SharedGame`]: a mutex around the game state plus a condition variable
//! that passes the turn token back and forth.
//!
//! # Example
//!
//! ```no_run
//! use tictac_threads::{GameConfig, SilentObserver, StrategyKind, play_game};
//!
//! # fn example() -> Result<(), tictac_threads::DriverError> {
//! let config = GameConfig::default()
//!     .with_o(StrategyKind::Sequential)
//!     .with_pace_ms(0);
//! let report = play_game(&config, SilentObserver)?;
//! println!("{}", report.outcome());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod console;
mod driver;
mod game;
mod observer;
mod player;
mod strategy;

pub use config::{ConfigError, GameConfig, PlayerSpec};
pub use console::OutputFormat;
pub use driver::{DriverError, GameReport, play_game};
pub use game::SharedGame;
pub use observer::{ConsoleObserver, MoveObserver, RecordingObserver, SilentObserver};
pub use player::{Player, PlayerPhase, PlayerStats};
pub use strategy::{RandomCells, Sequential, Strategy, StrategyKind};

// Board types, re-exported for callers that only depend on this crate.
pub use tictac_board::{
    Board, Coordinate, GameState, Move, MoveError, Outcome, RejectionKind, Square, Symbol,
};
