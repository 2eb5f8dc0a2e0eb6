//! The 81-cell value grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, DigitSet, House, Position};

/// Error raised when a grid's text or value form violates the grid contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The input did not contain exactly 81 cells.
    #[display("grid must have exactly 81 cells, got {len}")]
    InvalidLength {
        /// Number of cells found.
        len: usize,
    },
    /// A cell value was outside the range 0-9.
    #[display("invalid value {value} at cell {index}: must be 0-9")]
    InvalidCellValue {
        /// Row-major cell index.
        index: usize,
        /// Offending value.
        value: u8,
    },
    /// A character in the text form was not a digit or placeholder.
    #[display("invalid character {ch:?} in grid text")]
    InvalidChar {
        /// Offending character.
        ch: char,
    },
}

/// An immutable-by-convention 81-cell sudoku grid.
///
/// Cells hold `Option<Digit>`; `None` is an empty cell (the `0` of the wire
/// form). The grid is plain data: engine operations take a grid and return a
/// new one rather than mutating shared state.
///
/// # Text form
///
/// [`Display`] and [`FromStr`] use the 81-character row-major form with `0`
/// for empty cells; parsing also accepts `.` as empty and ignores
/// whitespace.
///
/// # Examples
///
/// ```
/// use dailydoku_core::DigitGrid;
///
/// let grid: DigitGrid = concat!(
///     "530070000",
///     "600195000",
///     "098000060",
///     "800060003",
///     "400803001",
///     "700020006",
///     "060000280",
///     "000419005",
///     "000080079",
/// )
/// .parse()?;
///
/// assert_eq!(grid.filled_count(), 30);
/// assert!(!grid.has_conflict());
/// # Ok::<(), dailydoku_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the position, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at the position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns a copy of this grid with the cell at `pos` set to `digit`.
    #[must_use]
    pub fn with(&self, pos: Position, digit: Option<Digit>) -> Self {
        let mut grid = *self;
        grid.set(pos, digit);
        grid
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if any house contains the same digit twice.
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in house.positions() {
                if let Some(digit) = self.get(pos) {
                    if seen.contains(digit) {
                        return true;
                    }
                    seen.insert(digit);
                }
            }
        }
        false
    }

    /// Returns `true` if the grid is complete and conflict-free.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        self.is_complete() && !self.has_conflict()
    }

    /// Returns `true` if `self`'s filled cells all agree with `other`.
    ///
    /// Used to check that a solved grid is a superset of the original givens.
    #[must_use]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        Position::ALL.iter().all(|&pos| match other.get(pos) {
            Some(digit) => self.get(pos) == Some(digit),
            None => true,
        })
    }

    /// Returns an iterator over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_none())
    }

    /// Creates a grid from 81 cell values, where 0 means empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidLength`] if `values` does not have exactly
    /// 81 elements, or [`GridError::InvalidCellValue`] for values outside
    /// 0-9.
    pub fn try_from_values(values: &[u8]) -> Result<Self, GridError> {
        if values.len() != 81 {
            return Err(GridError::InvalidLength { len: values.len() });
        }
        let mut grid = Self::new();
        for (index, (&value, pos)) in values.iter().zip(Position::ALL).enumerate() {
            let digit = match value {
                0 => None,
                1..=9 => Digit::try_from_value(value),
                _ => return Err(GridError::InvalidCellValue { index, value }),
            };
            grid.set(pos, digit);
        }
        Ok(grid)
    }

    /// Returns the 81 cell values in row-major order, with 0 for empty cells.
    #[must_use]
    pub fn to_values(&self) -> [u8; 81] {
        let mut values = [0u8; 81];
        for (value, cell) in values.iter_mut().zip(&self.cells) {
            *value = cell.map_or(0, Digit::value);
        }
        values
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "0")?,
            }
        }
        Ok(())
    }
}

impl FromStr for DigitGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut values = Vec::with_capacity(81);
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let value = match ch {
                '.' => 0,
                '0'..='9' => ch as u8 - b'0',
                _ => return Err(GridError::InvalidChar { ch }),
            };
            values.push(value);
        }
        Self::try_from_values(&values)
    }
}
