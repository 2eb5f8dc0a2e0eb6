use dailydoku_core::DigitGrid;

use crate::{
    candidates::candidates_at,
    technique::{BoxedTechnique, Technique, TechniqueKind, TechniquePlacement},
};

/// A technique that fills cells with exactly one remaining candidate.
///
/// Scans cells in row-major order and reports the first cell whose
/// candidate mask has a single bit set. Unlike the unit-based techniques it
/// is justified by a single cell, so the reported placement carries no
/// house.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle {}

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for NakedSingle {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::NakedSingle
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find(&self, grid: &DigitGrid) -> Option<TechniquePlacement> {
        for pos in grid.empty_positions() {
            if let Some(digit) = candidates_at(grid, pos).as_single() {
                return Some(TechniquePlacement {
                    pos,
                    digit,
                    unit: None,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use dailydoku_core::{Digit, Position};

    use super::*;

    #[test]
    fn test_finds_naked_single() {
        let mut grid = DigitGrid::new();
        // Exclude 1-8 at (0, 0): 1-5 via row, 6-8 via column
        for (x, value) in [1u8, 2, 3, 4, 5].into_iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            grid.set(Position::new(x as u8 + 1, 0), Digit::try_from_value(value));
        }
        for (y, value) in [6u8, 7, 8].into_iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            grid.set(Position::new(0, y as u8 + 3), Digit::try_from_value(value));
        }

        let placement = NakedSingle::new().find(&grid).unwrap();
        assert_eq!(placement.pos, Position::new(0, 0));
        assert_eq!(placement.digit, Digit::D9);
        assert_eq!(placement.unit, None);
    }

    #[test]
    fn test_empty_grid_has_none() {
        assert_eq!(NakedSingle::new().find(&DigitGrid::new()), None);
    }
}
