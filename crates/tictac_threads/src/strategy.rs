//! Move-selection strategies.
//!
//! A strategy only proposes coordinates. It never sees the board and never
//! learns why an attempt was rejected; the player loop decides when to stop.

use crate::config::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tictac_board::{Coordinate, SIZE};
use tracing::instrument;

/// Produces the next `(row, col)` to attempt.
pub trait Strategy: Send {
    /// Next coordinate, or `None` once the strategy has nothing left to try.
    fn next_move(&mut self) -> Option<(usize, usize)>;

    /// Which kind of strategy this is.
    fn kind(&self) -> StrategyKind;
}

/// Named strategies selectable from configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Row-major scan, each cell tried once.
    Sequential,
    /// Uniform random cell, forever.
    Random,
}

impl StrategyKind {
    /// Parses a strategy name.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for names other than `sequential` and `random`.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        name.trim()
            .parse()
            .map_err(|_| ConfigError::new(format!("Unknown strategy: {name:?}")))
    }

    /// Builds a strategy; `seed` fixes the random sequence.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Sequential => Box::new(Sequential::new()),
            StrategyKind::Random => Box::new(match seed {
                Some(seed) => RandomCells::seeded(seed),
                None => RandomCells::new(),
            }),
        }
    }
}

/// Tries (0,0), (0,1), ... (2,2) once each, then stops.
#[derive(Debug, Clone)]
pub struct Sequential {
    cells: std::array::IntoIter<Coordinate, 9>,
}

impl Sequential {
    /// Starts the scan at (0,0).
    pub fn new() -> Self {
        Self {
            cells: Coordinate::ALL.into_iter(),
        }
    }
}

impl Default for Sequential {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Sequential {
    fn next_move(&mut self) -> Option<(usize, usize)> {
        self.cells.next().map(|c| (c.row(), c.col()))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Sequential
    }
}

/// Draws row and column independently and uniformly from `0..3`.
#[derive(Debug, Clone)]
pub struct RandomCells {
    rng: StdRng,
}

impl RandomCells {
    /// Seeds from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomCells {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomCells {
    fn next_move(&mut self) -> Option<(usize, usize)> {
        Some((self.rng.gen_range(0..SIZE), self.rng.gen_range(0..SIZE)))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_is_row_major_and_finite() {
        let mut strategy = Sequential::new();
        let moves: Vec<_> = std::iter::from_fn(|| strategy.next_move()).collect();
        assert_eq!(
            moves,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
        assert_eq!(strategy.next_move(), None);
    }

    #[test]
    fn test_random_stays_on_board() {
        let mut strategy = RandomCells::seeded(42);
        for _ in 0..500 {
            let (row, col) = strategy.next_move().unwrap();
            assert!(row < SIZE && col < SIZE);
        }
    }

    #[test]
    fn test_random_covers_every_cell() {
        let mut strategy = RandomCells::seeded(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(strategy.next_move().unwrap());
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = RandomCells::seeded(99);
        let mut b = RandomCells::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.next_move(), b.next_move());
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(StrategyKind::parse("sequential").unwrap(), StrategyKind::Sequential);
        assert_eq!(StrategyKind::parse(" Random ").unwrap(), StrategyKind::Random);
        assert_eq!(StrategyKind::Random.to_string(), "random");
        let err = StrategyKind::parse("minimax").unwrap_err();
        assert!(err.message.contains("minimax"));
    }

    #[test]
    fn test_build_matches_kind() {
        assert_eq!(StrategyKind::Sequential.build(None).kind(), StrategyKind::Sequential);
        assert_eq!(StrategyKind::Random.build(Some(1)).kind(), StrategyKind::Random);
    }
}
