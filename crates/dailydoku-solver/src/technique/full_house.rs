use dailydoku_core::{DigitGrid, DigitSet, House};

use crate::technique::{BoxedTechnique, Technique, TechniqueKind, TechniquePlacement};

/// A technique that fills the last empty cell of a house.
///
/// When a row, column, or box has exactly one empty cell, that cell must
/// hold the house's one missing digit. This is the cheapest deduction and
/// has the highest priority in the standard technique order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullHouse {}

impl FullHouse {
    /// Creates a new `FullHouse` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for FullHouse {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::FullHouse
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find(&self, grid: &DigitGrid) -> Option<TechniquePlacement> {
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            let mut empty = None;
            let mut empty_count = 0;
            for pos in house.positions() {
                match grid.get(pos) {
                    Some(digit) => seen.insert(digit),
                    None => {
                        empty = Some(pos);
                        empty_count += 1;
                    }
                }
            }
            if empty_count == 1
                && let Some(pos) = empty
                && let Some(digit) = (!seen).as_single()
            {
                return Some(TechniquePlacement {
                    pos,
                    digit,
                    unit: Some(house),
                });
            }
        }
        None
    }
}
