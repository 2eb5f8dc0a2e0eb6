//! Candidate-mask derivation shared by the solvers.

use dailydoku_core::{DigitGrid, DigitSet, Position};

/// Returns the digits not excluded at `pos` by its row, column, and box.
///
/// For a filled cell this still reports the candidates the cell would have
/// were it empty; callers filter on emptiness themselves.
pub(crate) fn candidates_at(grid: &DigitGrid, pos: Position) -> DigitSet {
    let mut used = DigitSet::EMPTY;
    for x in 0..9 {
        let peer = Position::new(x, pos.y());
        if peer != pos
            && let Some(digit) = grid.get(peer)
        {
            used.insert(digit);
        }
    }
    for y in 0..9 {
        let peer = Position::new(pos.x(), y);
        if peer != pos
            && let Some(digit) = grid.get(peer)
        {
            used.insert(digit);
        }
    }
    for i in 0..9 {
        let peer = Position::from_box(pos.box_index(), i);
        if peer != pos
            && let Some(digit) = grid.get(peer)
        {
            used.insert(digit);
        }
    }
    !used
}

#[cfg(test)]
mod tests {
    use dailydoku_core::Digit;

    use super::*;

    #[test]
    fn test_candidates_exclude_peers() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Some(Digit::D1)); // same row
        grid.set(Position::new(8, 8), Some(Digit::D2)); // same column
        grid.set(Position::new(7, 1), Some(Digit::D3)); // same box

        let candidates = candidates_at(&grid, Position::new(8, 0));
        assert!(!candidates.contains(Digit::D1));
        assert!(!candidates.contains(Digit::D2));
        assert!(!candidates.contains(Digit::D3));
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn test_own_value_does_not_exclude() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(4, 4), Some(Digit::D5));
        let candidates = candidates_at(&grid, Position::new(4, 4));
        assert!(candidates.contains(Digit::D5));
    }
}
