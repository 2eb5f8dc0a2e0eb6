//! Human-style solving techniques.
//!
//! Each technique implements the [`Technique`] trait: given a grid, it
//! deterministically finds its first applicable placement or reports none.
//! The [`TechniqueSolver`](crate::TechniqueSolver) applies techniques in
//! strict priority order (Full House, then Naked Single, then Hidden
//! Single), so the vocabulary here is intentionally small and stable: it
//! defines what "logically solvable" means for generation gating.

use std::fmt::{self, Debug, Display};

use dailydoku_core::{Digit, DigitGrid, House, Position};

pub use self::{
    full_house::FullHouse, hidden_single::HiddenSingle, naked_single::NakedSingle,
};

mod full_house;
mod hidden_single;
mod naked_single;

/// Identifies a solving technique in logs and stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechniqueKind {
    /// A house with exactly one empty cell.
    FullHouse,
    /// A cell with exactly one legal candidate.
    NakedSingle,
    /// A digit with exactly one legal cell within a house.
    HiddenSingle,
}

impl Display for TechniqueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FullHouse => "Full House",
            Self::NakedSingle => "Naked Single",
            Self::HiddenSingle => "Hidden Single",
        };
        f.write_str(name)
    }
}

/// A single placement proposed by a technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechniquePlacement {
    /// Cell to fill.
    pub pos: Position,
    /// Digit to place.
    pub digit: Digit,
    /// House whose structure justified the placement, if any.
    ///
    /// Naked Single is justified by a single cell's candidates rather than
    /// by a unit, so it reports `None`.
    pub unit: Option<House>,
}

/// A deterministic solving technique.
///
/// `find` must scan in a fixed order (houses in [`House::ALL`] order, cells
/// in row-major order) and return the first applicable placement, so that
/// repeated runs over identical grids produce identical logs.
pub trait Technique: Debug + Send + Sync {
    /// Returns the technique's kind.
    fn kind(&self) -> TechniqueKind;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Finds the first applicable placement, or `None` if the technique
    /// does not apply anywhere.
    fn find(&self, grid: &DigitGrid) -> Option<TechniquePlacement>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns the standard technique set in priority order.
///
/// The order is part of the engine contract: Full House fires before Naked
/// Single, which fires before Hidden Single.
#[must_use]
pub fn standard_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(FullHouse::new()),
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
    ]
}
