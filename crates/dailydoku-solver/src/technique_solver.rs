use dailydoku_core::{DigitGrid, House};

use crate::{
    SolverError,
    technique::{self, BoxedTechnique, TechniqueKind},
};

/// Iteration cap for a technique run.
///
/// A correct technique set applies at most one placement per empty cell, so
/// the cap only trips if a technique misbehaves.
const MAX_STEPS: usize = 81 + 8;

/// One applied technique step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechniqueEvent {
    /// Which technique fired.
    pub technique: TechniqueKind,
    /// The unit that justified the step, if the technique is unit-based.
    pub unit: Option<House>,
    /// Number of placements the step produced (always 1 for the standard
    /// technique set; kept explicit for auditability).
    pub placements: u32,
}

/// Whether a technique run finished the grid or got stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechniqueOutcome {
    /// Every cell was filled.
    Solved,
    /// No technique applies and the grid is incomplete.
    ///
    /// This is a generation-time signal, not a fault.
    Stuck,
}

/// The result of a technique run: the final grid, the applied-step log, and
/// the outcome.
///
/// For identical input grids the run is bit-for-bit reproducible, log
/// included; the generator's gating logic depends on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechniqueRun {
    /// Grid state after the run (fully solved, or partial when stuck).
    pub grid: DigitGrid,
    /// Applied steps in order.
    pub log: Vec<TechniqueEvent>,
    /// Solved or stuck.
    pub outcome: TechniqueOutcome,
}

impl TechniqueRun {
    /// Returns `true` if the run solved the grid completely.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == TechniqueOutcome::Solved
    }
}

/// A solver restricted to a fixed vocabulary of human-style techniques.
///
/// Each iteration tries the configured techniques in priority order,
/// applies the first placement found, logs it, and restarts the scan.
/// If no technique applies and the grid is incomplete the run reports
/// [`TechniqueOutcome::Stuck`].
///
/// # Examples
///
/// ```
/// use dailydoku_core::DigitGrid;
/// use dailydoku_solver::TechniqueSolver;
///
/// let solver = TechniqueSolver::with_standard_techniques();
/// let run = solver.run(&DigitGrid::new())?;
///
/// // An empty grid offers no deduction at all
/// assert!(!run.is_solved());
/// assert!(run.log.is_empty());
/// # Ok::<(), dailydoku_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TechniqueSolver {
    techniques: Vec<BoxedTechnique>,
}

impl TechniqueSolver {
    /// Creates a solver with the given techniques, tried in order.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with the standard set: Full House, Naked Single,
    /// Hidden Single, in that priority order.
    #[must_use]
    pub fn with_standard_techniques() -> Self {
        Self::new(technique::standard_techniques())
    }

    /// Returns the configured techniques in application order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Runs the techniques to completion or a stuck state.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidGivens`] if the input grid already
    /// conflicts, or [`SolverError::IterationLimit`] if a defective
    /// technique keeps the loop from terminating.
    pub fn run(&self, grid: &DigitGrid) -> Result<TechniqueRun, SolverError> {
        if grid.has_conflict() {
            return Err(SolverError::InvalidGivens);
        }

        let mut work = *grid;
        let mut log = Vec::new();
        loop {
            if work.is_complete() {
                return Ok(TechniqueRun {
                    grid: work,
                    log,
                    outcome: TechniqueOutcome::Solved,
                });
            }
            if log.len() >= MAX_STEPS {
                return Err(SolverError::IterationLimit { steps: log.len() });
            }

            let placement = self
                .techniques
                .iter()
                .find_map(|technique| technique.find(&work).map(|p| (technique.kind(), p)));
            match placement {
                Some((kind, placement)) => {
                    work.set(placement.pos, Some(placement.digit));
                    log.push(TechniqueEvent {
                        technique: kind,
                        unit: placement.unit,
                        placements: 1,
                    });
                }
                None => {
                    return Ok(TechniqueRun {
                        grid: work,
                        log,
                        outcome: TechniqueOutcome::Stuck,
                    });
                }
            }
        }
    }
}

impl Default for TechniqueSolver {
    fn default() -> Self {
        Self::with_standard_techniques()
    }
}

#[cfg(test)]
mod tests {
    use dailydoku_core::{Digit, Position};

    use super::*;

    const TEXTBOOK: &str = "\
        530070000\
        600195000\
        098000060\
        800060003\
        400803001\
        700020006\
        060000280\
        000419005\
        000080079";

    #[test]
    fn test_solves_textbook_puzzle() {
        let solver = TechniqueSolver::with_standard_techniques();
        let run = solver.run(&TEXTBOOK.parse().unwrap()).unwrap();

        assert!(run.is_solved());
        assert!(run.grid.is_valid_solution());
        assert_eq!(run.log.len(), 81 - 30);
        let values = run.grid.to_values();
        assert_eq!(values[0], 5);
        assert_eq!(values[80], 9);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        // Reproducibility is load-bearing for generation gating: the full
        // log, not just the solution, must match between runs.
        let solver = TechniqueSolver::with_standard_techniques();
        let grid = TEXTBOOK.parse().unwrap();
        let first = solver.run(&grid).unwrap();
        let second = solver.run(&grid).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stuck_on_empty_grid() {
        let solver = TechniqueSolver::with_standard_techniques();
        let run = solver.run(&DigitGrid::new()).unwrap();
        assert_eq!(run.outcome, TechniqueOutcome::Stuck);
        assert_eq!(run.grid, DigitGrid::new());
        assert!(run.log.is_empty());
    }

    #[test]
    fn test_invalid_givens_rejected() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Some(Digit::D1));
        grid.set(Position::new(1, 0), Some(Digit::D1));
        let solver = TechniqueSolver::with_standard_techniques();
        assert_eq!(solver.run(&grid), Err(SolverError::InvalidGivens));
    }

    #[test]
    fn test_full_house_has_priority() {
        let mut grid = DigitGrid::new();
        // Row 0 with one empty cell is both a full house and a naked single;
        // the log must attribute it to Full House.
        for x in 1..9 {
            grid.set(Position::new(x, 0), Digit::try_from_value(x + 1));
        }
        let solver = TechniqueSolver::with_standard_techniques();
        let run = solver.run(&grid).unwrap();
        assert_eq!(run.log[0].technique, TechniqueKind::FullHouse);
        assert_eq!(run.log[0].unit, Some(House::Row { y: 0 }));
        assert_eq!(run.grid.get(Position::new(0, 0)), Some(Digit::D1));
    }
}
