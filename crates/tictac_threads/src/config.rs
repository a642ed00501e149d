//! Game configuration: who plays which symbol, and how fast.

use crate::strategy::StrategyKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictac_board::Symbol;
use tracing::{debug, info, instrument};

/// One seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct PlayerSpec {
    /// Symbol this player places.
    symbol: Symbol,
    /// How this player picks coordinates.
    strategy: StrategyKind,
}

impl PlayerSpec {
    /// Creates a player spec from typed values.
    pub fn new(symbol: Symbol, strategy: StrategyKind) -> Self {
        Self { symbol, strategy }
    }

    /// Parses a player spec from raw names.
    ///
    /// # Errors
    ///
    /// Fails on a symbol other than `X`/`O` or an unknown strategy name.
    #[instrument]
    pub fn parse(symbol: &str, strategy: &str) -> Result<Self, ConfigError> {
        let symbol = symbol
            .trim()
            .parse::<Symbol>()
            .map_err(|_| ConfigError::new(format!("Unknown player symbol: {symbol:?}")))?;
        let strategy = StrategyKind::parse(strategy)?;
        Ok(Self { symbol, strategy })
    }
}

/// Player entry as written in a config file, before validation.
#[derive(Debug, Clone, Deserialize)]
struct RawPlayer {
    symbol: String,
    strategy: String,
}

/// Config file layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawConfig {
    players: Vec<RawPlayer>,
    pace_ms: u64,
    seed: Option<u64>,
    clear_screen: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            pace_ms: default_pace_ms(),
            seed: None,
            clear_screen: true,
        }
    }
}

fn default_pace_ms() -> u64 {
    1000
}

/// Validated configuration for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameConfig {
    /// Player X's seat.
    player_x: PlayerSpec,
    /// Player O's seat.
    player_o: PlayerSpec,
    /// Delay after each accepted move, in milliseconds.
    pace_ms: u64,
    /// Seed for random strategies; entropy when absent.
    seed: Option<u64>,
    /// Whether the console display clears the terminal before drawing.
    clear_screen: bool,
}

impl Default for GameConfig {
    /// X scans sequentially, O plays randomly, one second between moves.
    fn default() -> Self {
        Self {
            player_x: PlayerSpec::new(Symbol::X, StrategyKind::Sequential),
            player_o: PlayerSpec::new(Symbol::O, StrategyKind::Random),
            pace_ms: default_pace_ms(),
            seed: None,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Builds a configuration from two player specs.
    ///
    /// # Errors
    ///
    /// Fails unless exactly one spec plays X and the other plays O.
    #[instrument]
    pub fn from_players(players: &[PlayerSpec]) -> Result<Self, ConfigError> {
        let [first, second] = players else {
            return Err(ConfigError::new(format!(
                "Expected exactly two players, got {}",
                players.len()
            )));
        };
        let (player_x, player_o) = match (first.symbol, second.symbol) {
            (Symbol::X, Symbol::O) => (*first, *second),
            (Symbol::O, Symbol::X) => (*second, *first),
            (symbol, _) => {
                return Err(ConfigError::new(format!(
                    "Both players are configured as {symbol}"
                )));
            }
        };
        Ok(Self {
            player_x,
            player_o,
            ..Self::default()
        })
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`]; an empty `players`
    /// list keeps the default seats.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            x = %config.player_x.strategy,
            o = %config.player_o.strategy,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        let mut config = if raw.players.is_empty() {
            Self::default()
        } else {
            let players = raw
                .players
                .iter()
                .map(|p| PlayerSpec::parse(&p.symbol, &p.strategy))
                .collect::<Result<Vec<_>, _>>()?;
            Self::from_players(&players)?
        };
        config.pace_ms = raw.pace_ms;
        config.seed = raw.seed;
        config.clear_screen = raw.clear_screen;
        Ok(config)
    }

    /// Spec for the given symbol.
    pub fn player(&self, symbol: Symbol) -> PlayerSpec {
        match symbol {
            Symbol::X => self.player_x,
            Symbol::O => self.player_o,
        }
    }

    /// Delay after each accepted move.
    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }

    /// Replaces X's strategy.
    pub fn with_x(mut self, strategy: StrategyKind) -> Self {
        self.player_x.strategy = strategy;
        self
    }

    /// Replaces O's strategy.
    pub fn with_o(mut self, strategy: StrategyKind) -> Self {
        self.player_o.strategy = strategy;
        self
    }

    /// Replaces the pacing delay.
    pub fn with_pace_ms(mut self, pace_ms: u64) -> Self {
        self.pace_ms = pace_ms;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables clearing the terminal.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seats() {
        let config = GameConfig::default();
        assert_eq!(config.player(Symbol::X).strategy, StrategyKind::Sequential);
        assert_eq!(config.player(Symbol::O).strategy, StrategyKind::Random);
        assert_eq!(config.pace(), Duration::from_secs(1));
        assert!(config.clear_screen);
    }

    #[test]
    fn test_parse_player_spec() {
        let spec = PlayerSpec::parse("o", "sequential").unwrap();
        assert_eq!(spec, PlayerSpec::new(Symbol::O, StrategyKind::Sequential));
    }

    #[test]
    fn test_unknown_symbol_fails_fast() {
        let err = PlayerSpec::parse("Z", "random").unwrap_err();
        assert!(err.message.contains("Unknown player symbol"));
    }

    #[test]
    fn test_unknown_strategy_fails_fast() {
        let err = PlayerSpec::parse("X", "greedy").unwrap_err();
        assert!(err.message.contains("Unknown strategy"));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let players = [
            PlayerSpec::new(Symbol::X, StrategyKind::Random),
            PlayerSpec::new(Symbol::X, StrategyKind::Sequential),
        ];
        let err = GameConfig::from_players(&players).unwrap_err();
        assert!(err.message.contains("Both players"));
    }

    #[test]
    fn test_players_in_any_order() {
        let players = [
            PlayerSpec::new(Symbol::O, StrategyKind::Sequential),
            PlayerSpec::new(Symbol::X, StrategyKind::Random),
        ];
        let config = GameConfig::from_players(&players).unwrap();
        assert_eq!(config.player_x.strategy, StrategyKind::Random);
        assert_eq!(config.player_o.strategy, StrategyKind::Sequential);
    }

    #[test]
    fn test_from_toml() {
        let config = GameConfig::from_toml(
            r#"
            pace_ms = 0
            seed = 11
            clear_screen = false

            [[players]]
            symbol = "X"
            strategy = "random"

            [[players]]
            symbol = "O"
            strategy = "random"
            "#,
        )
        .unwrap();
        assert_eq!(config.pace_ms, 0);
        assert_eq!(config.seed, Some(11));
        assert!(!config.clear_screen);
        assert_eq!(config.player_x.strategy, StrategyKind::Random);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_error_tracks_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
