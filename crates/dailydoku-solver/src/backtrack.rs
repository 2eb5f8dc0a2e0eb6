//! Exhaustive backtracking search over the grid model.
//!
//! The search keeps per-row, per-column, and per-box used-digit bitmasks and
//! branches on the empty cell with the fewest legal digits (MRV), ties
//! broken by lowest cell index. A cell with zero legal digits backtracks
//! immediately. Candidate digits are tried in ascending order unless a
//! seeded ordering is requested, in which case a [`Pcg64Mcg`] permutes them;
//! the same seed always reproduces the same search.

use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;
use tinyvec::ArrayVec;

use dailydoku_core::{Digit, DigitGrid, DigitSet, Position};

/// The result of an exhaustive solve.
///
/// `Invalid` and `NoSolution` are expected outcomes the generator actively
/// relies on, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A fully solved grid that is a conflict-free superset of the givens.
    Solved(DigitGrid),
    /// The givens themselves conflict.
    Invalid,
    /// The givens are consistent but admit no solution.
    NoSolution,
}

impl SolveOutcome {
    /// Returns the solved grid, or `None` for `Invalid`/`NoSolution`.
    #[must_use]
    pub fn solved(self) -> Option<DigitGrid> {
        match self {
            Self::Solved(grid) => Some(grid),
            Self::Invalid | Self::NoSolution => None,
        }
    }
}

/// A solution count capped at a caller-supplied limit.
///
/// The engine only ever needs to distinguish "0 / 1 / at least 2", so the
/// search short-circuits as soon as `limit` solutions are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionCount {
    /// The givens themselves conflict.
    Invalid,
    /// The exact number of solutions, strictly below the limit.
    Exactly(usize),
    /// At least `limit` solutions exist; the search stopped early.
    AtLeast(usize),
}

impl SolutionCount {
    /// Returns `true` if the grid has exactly one solution.
    ///
    /// Only meaningful when the count was taken with a limit of at least 2;
    /// `AtLeast(1)` cannot distinguish one solution from many.
    #[must_use]
    pub fn is_unique(self) -> bool {
        matches!(self, Self::Exactly(1))
    }
}

/// Bitmask-constrained MRV backtracking solver.
///
/// # Examples
///
/// ```
/// use dailydoku_core::DigitGrid;
/// use dailydoku_solver::{BacktrackSolver, SolveOutcome};
///
/// let puzzle: DigitGrid = concat!(
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
/// let solver = BacktrackSolver::new();
/// let SolveOutcome::Solved(solution) = solver.solve(&puzzle) else {
///     panic!("textbook puzzle is solvable");
/// };
/// assert!(solution.is_valid_solution());
/// assert!(solution.is_superset_of(&puzzle));
/// # Ok::<(), dailydoku_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver {}

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Solves the grid, trying candidates in ascending digit order.
    #[must_use]
    pub fn solve(&self, grid: &DigitGrid) -> SolveOutcome {
        self.solve_inner(grid, &mut Order::Ascending)
    }

    /// Solves the grid with seeded candidate-order randomization.
    ///
    /// The search is still exhaustive and still uses MRV cell selection;
    /// only the order candidates are tried in differs. Identical
    /// `(grid, seed)` inputs always yield identical outcomes, which is what
    /// makes seeded generation reproducible across platforms.
    #[must_use]
    pub fn solve_seeded(&self, grid: &DigitGrid, seed: u64) -> SolveOutcome {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        self.solve_inner(grid, &mut Order::Shuffled(&mut rng))
    }

    fn solve_inner(&self, grid: &DigitGrid, order: &mut Order<'_>) -> SolveOutcome {
        if grid.has_conflict() {
            return SolveOutcome::Invalid;
        }
        let mut work = *grid;
        let mut masks = Masks::from_grid(grid);
        if search(&mut work, &mut masks, order) {
            SolveOutcome::Solved(work)
        } else {
            SolveOutcome::NoSolution
        }
    }

    /// Counts solutions up to `limit`, short-circuiting once reached.
    ///
    /// Candidates are tried in ascending order, so the count is a pure
    /// function of the grid.
    #[must_use]
    pub fn count_solutions(&self, grid: &DigitGrid, limit: usize) -> SolutionCount {
        if grid.has_conflict() {
            return SolutionCount::Invalid;
        }
        if limit == 0 {
            return SolutionCount::AtLeast(0);
        }
        let mut work = *grid;
        let mut masks = Masks::from_grid(grid);
        let mut found = 0;
        count(&mut work, &mut masks, limit, &mut found);
        if found >= limit {
            SolutionCount::AtLeast(limit)
        } else {
            SolutionCount::Exactly(found)
        }
    }
}

/// Candidate ordering policy for one search.
enum Order<'a> {
    Ascending,
    Shuffled(&'a mut Pcg64Mcg),
}

/// Used-digit masks per row, column, and box.
struct Masks {
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    boxes: [DigitSet; 9],
}

impl Masks {
    fn from_grid(grid: &DigitGrid) -> Self {
        let mut masks = Self {
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
        };
        for pos in Position::ALL {
            if let Some(digit) = grid.get(pos) {
                masks.place(pos, digit);
            }
        }
        masks
    }

    fn candidates(&self, pos: Position) -> DigitSet {
        !(self.rows[usize::from(pos.y())]
            .union(self.cols[usize::from(pos.x())])
            .union(self.boxes[usize::from(pos.box_index())]))
    }

    fn place(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.y())].insert(digit);
        self.cols[usize::from(pos.x())].insert(digit);
        self.boxes[usize::from(pos.box_index())].insert(digit);
    }

    fn unplace(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.y())].remove(digit);
        self.cols[usize::from(pos.x())].remove(digit);
        self.boxes[usize::from(pos.box_index())].remove(digit);
    }
}

/// Picks the empty cell with the fewest candidates, ties by lowest index.
///
/// Returns `None` when the grid is complete.
fn pick_mrv_cell(grid: &DigitGrid, masks: &Masks) -> Option<(Position, DigitSet)> {
    let mut best: Option<(Position, DigitSet)> = None;
    for pos in Position::ALL {
        if grid.get(pos).is_some() {
            continue;
        }
        let candidates = masks.candidates(pos);
        match &best {
            Some((_, best_candidates)) if best_candidates.len() <= candidates.len() => {}
            _ => best = Some((pos, candidates)),
        }
        // Nothing beats a zero-candidate cell; stop scanning.
        if candidates.is_empty() {
            break;
        }
    }
    best
}

fn ordered_values(candidates: DigitSet, order: &mut Order<'_>) -> ArrayVec<[u8; 9]> {
    let mut values: ArrayVec<[u8; 9]> = candidates.iter().map(Digit::value).collect();
    if let Order::Shuffled(rng) = order {
        values.shuffle(rng);
    }
    values
}

fn search(grid: &mut DigitGrid, masks: &mut Masks, order: &mut Order<'_>) -> bool {
    let Some((pos, candidates)) = pick_mrv_cell(grid, masks) else {
        return true;
    };
    for value in ordered_values(candidates, order) {
        let digit = Digit::from_value(value);
        grid.set(pos, Some(digit));
        masks.place(pos, digit);
        if search(grid, masks, order) {
            return true;
        }
        masks.unplace(pos, digit);
        grid.set(pos, None);
    }
    false
}

fn count(grid: &mut DigitGrid, masks: &mut Masks, limit: usize, found: &mut usize) {
    if *found >= limit {
        return;
    }
    let Some((pos, candidates)) = pick_mrv_cell(grid, masks) else {
        *found += 1;
        return;
    };
    for digit in candidates {
        grid.set(pos, Some(digit));
        masks.place(pos, digit);
        count(grid, masks, limit, found);
        masks.unplace(pos, digit);
        grid.set(pos, None);
        if *found >= limit {
            return;
        }
    }
}
