//! Solvers for the dailydoku puzzle engine.
//!
//! Two independent solvers operate on the core grid model:
//!
//! - [`backtrack`]: an exhaustive bitmask-constrained backtracking search
//!   with minimum-remaining-candidates cell selection. Used to validate
//!   puzzles, produce solved grids, and count solutions up to a limit.
//! - [`TechniqueSolver`]: a bounded human-style solver restricted to Full
//!   House, Naked Single, and Hidden Single. It either fully solves a grid
//!   or reports a stuck state; the generator uses it as a fairness gate.
//!
//! Both solvers are pure functions of their inputs: identical input (and
//! seed, where one is taken) yields bit-identical output.

pub mod backtrack;
mod candidates;
pub mod technique;
mod technique_solver;

pub use self::{
    backtrack::{BacktrackSolver, SolutionCount, SolveOutcome},
    technique_solver::{TechniqueEvent, TechniqueOutcome, TechniqueRun, TechniqueSolver},
};

/// Error raised when a solver's input or internal contract is violated.
///
/// Expected search outcomes (`NoSolution`, stuck states) are result values,
/// not errors; see [`SolveOutcome`] and [`TechniqueOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The givens already conflict with each other.
    #[display("the given cells conflict with each other")]
    InvalidGivens,
    /// The technique loop exceeded its iteration cap.
    ///
    /// A correct technique set places at most 81 digits; exceeding the cap
    /// indicates a defective technique implementation.
    #[display("technique solver exceeded the iteration cap after {steps} steps")]
    IterationLimit {
        /// Steps taken before the cap was hit.
        steps: usize,
    },
}
