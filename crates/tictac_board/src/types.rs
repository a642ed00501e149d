//! Core domain types for tic-tac-toe.

use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Mark placed by a player.
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
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Symbol X (moves first).
    X,
    /// Symbol O (moves second).
    O,
}

impl Symbol {
    /// Returns the opposing symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Character used when rendering the board.
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a symbol.
    Occupied(Symbol),
}

impl Square {
    fn as_char(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(symbol) => symbol.as_char(),
        }
    }
}

/// 3x3 tic-tac-toe board indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Square; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the square at the given coordinate.
    pub fn get(&self, at: Coordinate) -> Square {
        self.cells[at.row()][at.col()]
    }

    /// Checks if the cell at the given coordinate is empty.
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.get(at) == Square::Empty
    }

    /// Writes a symbol into a cell.
    ///
    /// Unchecked: callers decide whether overwriting is legal.
    pub fn place(&mut self, at: Coordinate, symbol: Symbol) {
        self.cells[at.row()][at.col()] = Square::Occupied(symbol);
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.squares()
            .filter(|s| *s == Square::Occupied(symbol))
            .count()
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.squares().filter(|s| *s != Square::Empty).count()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Rows as plain strings, one character per cell.
    pub fn rows(&self) -> [String; 3] {
        self.cells
            .map(|row| row.iter().map(|square| square.as_char()).collect())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for (j, square) in row.iter().enumerate() {
                write!(f, " {} ", square.as_char())?;
                if j < 2 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if i < 2 {
                writeln!(f, "{}", "-".repeat(11))?;
            }
        }
        Ok(())
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// A symbol completed a line.
    #[display("Player '{}' won", _0)]
    Won(Symbol),
    /// Board full with no line for either symbol.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Winning symbol, if any.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            Outcome::Won(symbol) => Some(symbol),
            Outcome::Draw => None,
        }
    }
}
