//! Core data structures for the dailydoku puzzle engine.
//!
//! This crate provides the 9×9 grid model shared by solving, generation,
//! scheduling, and session components:
//!
//! - [`Digit`]: type-safe representation of sudoku digits 1-9
//! - [`DigitSet`]: a 9-bit candidate mask over digits
//! - [`Position`] and [`House`]: 81-cell index arithmetic and the
//!   row/column/box units
//! - [`DigitGrid`]: an 81-cell value grid with conflict checking and a text
//!   form for fixtures and wire payloads
//! - [`Difficulty`]: the ordered difficulty vocabulary
//!
//! Everything here is plain data with no I/O and no hidden state.
//!
//! # Examples
//!
//! ```
//! use dailydoku_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! assert_eq!(grid.get(Position::new(4, 4)), Some(Digit::D5));
//! assert!(!grid.is_complete());
//! assert!(!grid.has_conflict());
//! ```

pub mod difficulty;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    difficulty::Difficulty,
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridError},
    house::House,
    position::Position,
};
