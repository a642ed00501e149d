//! Match driver: builds the shared game, runs both players, reports.

use crate::config::GameConfig;
use crate::game::SharedGame;
use crate::observer::MoveObserver;
use crate::player::{Player, PlayerStats};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::Serialize;
use std::sync::Arc;
use tictac_board::{Board, Move, Outcome, Symbol};
use tracing::{error, info, instrument};

/// Everything known about a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameReport {
    /// Final board.
    board: Board,
    /// How the game ended.
    outcome: Outcome,
    /// Accepted moves in order.
    moves: Vec<Move>,
    /// Player X's statistics.
    player_x: PlayerStats,
    /// Player O's statistics.
    player_o: PlayerStats,
}

/// Why a match could not produce a report.
#[derive(Debug, Display, Error, From)]
pub enum DriverError {
    /// The OS refused to start a player thread.
    #[display("Failed to spawn player thread: {}", _0)]
    #[from]
    Spawn(std::io::Error),

    /// A player thread panicked.
    #[display("Player {} panicked", _0)]
    PlayerPanicked(#[error(not(source))] Symbol),

    /// Both players stopped without reaching a terminal state.
    #[display("Both players stopped before the game ended")]
    Unfinished,
}

/// Plays one full game on two threads and waits for both to finish.
///
/// # Errors
///
/// See [`DriverError`].
#[instrument(
    skip(config, observer),
    fields(x = %config.player_x().strategy(), o = %config.player_o().strategy())
)]
pub fn play_game(
    config: &GameConfig,
    observer: impl MoveObserver + 'static,
) -> Result<GameReport, DriverError> {
    let game = Arc::new(SharedGame::with_observer(observer, config.pace()));

    let mut spawned = Vec::with_capacity(2);
    for symbol in [Symbol::X, Symbol::O] {
        let spec = config.player(symbol);
        // Distinct streams when both seats are random under one seed.
        let seed = config.seed().map(|seed| match symbol {
            Symbol::X => seed,
            Symbol::O => seed.wrapping_add(1),
        });
        let strategy = spec.strategy().build(seed);
        match Player::new(symbol, strategy, Arc::clone(&game)).spawn() {
            Ok(handle) => spawned.push((symbol, handle)),
            Err(source) => {
                error!(%symbol, %source, "Failed to spawn player thread");
                // The empty seat never moves; release whoever already sat down.
                game.leave(symbol);
                for (_, handle) in spawned {
                    let _ = handle.join();
                }
                return Err(source.into());
            }
        }
    }

    let mut stats = Vec::with_capacity(2);
    let mut panicked = None;
    for (symbol, handle) in spawned {
        match handle.join() {
            Ok(player_stats) => stats.push(player_stats),
            Err(_) => {
                error!(%symbol, "Player thread panicked");
                panicked.get_or_insert(symbol);
            }
        }
    }
    if let Some(symbol) = panicked {
        return Err(DriverError::PlayerPanicked(symbol));
    }

    let state = game.snapshot();
    let outcome = state.outcome().ok_or(DriverError::Unfinished)?;
    info!(%outcome, moves = state.history().len(), "Game finished");

    let mut stats = stats.into_iter();
    let (Some(player_x), Some(player_o)) = (stats.next(), stats.next()) else {
        return Err(DriverError::Unfinished);
    };
    Ok(GameReport {
        board: state.board().clone(),
        outcome,
        moves: state.history().to_vec(),
        player_x,
        player_o,
    })
}
