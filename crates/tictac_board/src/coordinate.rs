//! Validated board coordinates.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A `(row, col)` pair known to lie on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Every cell in row-major order: (0,0), (0,1), ... (2,2).
    pub const ALL: [Coordinate; 9] = [
        Coordinate { row: 0, col: 0 },
        Coordinate { row: 0, col: 1 },
        Coordinate { row: 0, col: 2 },
        Coordinate { row: 1, col: 0 },
        Coordinate { row: 1, col: 1 },
        Coordinate { row: 1, col: 2 },
        Coordinate { row: 2, col: 0 },
        Coordinate { row: 2, col: 1 },
        Coordinate { row: 2, col: 2 },
    ];

    /// Validates a raw `(row, col)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] if either component is
    /// outside `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range() {
        let c = Coordinate::new(2, 1).unwrap();
        assert_eq!(c.row(), 2);
        assert_eq!(c.col(), 1);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            Coordinate::new(3, 0),
            Err(MoveError::InvalidCoordinate { row: 3, col: 0 })
        );
        assert!(Coordinate::new(0, 7).is_err());
    }

    #[test]
    fn test_all_is_row_major() {
        let expected: Vec<_> = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .collect();
        let actual: Vec<_> = Coordinate::ALL.iter().map(|c| (c.row(), c.col())).collect();
        assert_eq!(actual, expected);
    }
}
