use dailydoku_core::{Digit, DigitGrid, House};

use crate::{
    candidates::candidates_at,
    technique::{BoxedTechnique, Technique, TechniqueKind, TechniquePlacement},
};

/// A technique that finds digits with only one legal cell within a house.
///
/// A hidden single occurs when a digit can legally go in exactly one empty
/// cell of a row, column, or box, even though that cell may still have
/// several candidates of its own. Houses are scanned in [`House::ALL`] order
/// and digits in ascending order within each house; the first hit wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle {}

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Technique for HiddenSingle {
    fn kind(&self) -> TechniqueKind {
        TechniqueKind::HiddenSingle
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn find(&self, grid: &DigitGrid) -> Option<TechniquePlacement> {
        for house in House::ALL {
            let positions = house.positions();
            for digit in Digit::ALL {
                if positions.iter().any(|&pos| grid.get(pos) == Some(digit)) {
                    continue;
                }
                let mut only = None;
                let mut count = 0;
                for &pos in &positions {
                    if grid.get(pos).is_none() && candidates_at(grid, pos).contains(digit) {
                        only = Some(pos);
                        count += 1;
                        if count > 1 {
                            break;
                        }
                    }
                }
                if count == 1
                    && let Some(pos) = only
                {
                    return Some(TechniquePlacement {
                        pos,
                        digit,
                        unit: Some(house),
                    });
                }
            }
        }
        None
    }
}
