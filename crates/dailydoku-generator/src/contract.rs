//! The puzzle publishability contract.
//!
//! The final gate before a puzzle is considered publishable: a
//! puzzle/solution pair is cross-checked against the exhaustive solver and
//! the uniqueness counter. Both the in-memory [`GeneratedPuzzle`] and the
//! wire [`PuzzlePayload`] go through the same checks.

use dailydoku_core::{DigitGrid, GridError, Position};
use dailydoku_solver::{BacktrackSolver, SolutionCount};

use crate::{GeneratedPuzzle, PuzzlePayload, SCHEMA_VERSION};

/// Why a puzzle/solution pair was rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ContractError {
    /// The payload declared a schema version the validator does not know.
    #[display("unsupported payload schema version {version} (expected {SCHEMA_VERSION})")]
    UnsupportedSchemaVersion {
        /// Declared version.
        version: u32,
    },
    /// A grid failed basic shape/range validation.
    #[display("malformed grid: {_0}")]
    #[from]
    Grid(GridError),
    /// The solution contains empty cells.
    #[display("solution has empty cells")]
    SolutionIncomplete,
    /// The solution violates the one-per-house rule.
    #[display("solution contains conflicting digits")]
    SolutionConflict,
    /// A filled puzzle cell disagrees with the solution.
    #[display("puzzle cell {index} disagrees with the solution")]
    PuzzleDisagreesWithSolution {
        /// Row-major cell index.
        index: usize,
    },
    /// The givens mask does not match the puzzle's filled cells.
    #[display("givens mask disagrees with the puzzle at cell {index}")]
    GivensMaskMismatch {
        /// Row-major cell index.
        index: usize,
    },
    /// The puzzle does not have exactly one solution.
    #[display("puzzle does not have a unique solution ({count:?})")]
    NotUnique {
        /// What the uniqueness counter reported.
        count: SolutionCount,
    },
}

/// Validates a distributable payload.
///
/// Checks, in order: schema version, grid shape and value ranges, solution
/// completeness and conflict-freedom, puzzle/solution agreement, and
/// uniqueness under the exhaustive solver.
///
/// # Errors
///
/// Returns the first [`ContractError`] encountered.
pub fn validate_payload(payload: &PuzzlePayload) -> Result<(), ContractError> {
    if payload.schema_version != SCHEMA_VERSION {
        return Err(ContractError::UnsupportedSchemaVersion {
            version: payload.schema_version,
        });
    }
    let puzzle = DigitGrid::try_from_values(&payload.puzzle)?;
    let solution = DigitGrid::try_from_values(&payload.solution)?;
    validate_grids(&puzzle, &solution)
}

/// Validates an in-memory generated puzzle, givens mask included.
///
/// # Errors
///
/// Returns the first [`ContractError`] encountered.
pub fn validate_pair(pair: &GeneratedPuzzle) -> Result<(), ContractError> {
    for (index, (&given, pos)) in pair.givens.iter().zip(Position::ALL).enumerate() {
        if given != pair.puzzle.get(pos).is_some() {
            return Err(ContractError::GivensMaskMismatch { index });
        }
    }
    validate_grids(&pair.puzzle, &pair.solution)
}

fn validate_grids(puzzle: &DigitGrid, solution: &DigitGrid) -> Result<(), ContractError> {
    if !solution.is_complete() {
        return Err(ContractError::SolutionIncomplete);
    }
    if solution.has_conflict() {
        return Err(ContractError::SolutionConflict);
    }
    for (index, pos) in Position::ALL.into_iter().enumerate() {
        if puzzle.get(pos).is_some_and(|digit| solution.get(pos) != Some(digit)) {
            return Err(ContractError::PuzzleDisagreesWithSolution { index });
        }
    }
    let count = BacktrackSolver::new().count_solutions(puzzle, 2);
    if count != SolutionCount::Exactly(1) {
        return Err(ContractError::NotUnique { count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use dailydoku_core::Difficulty;

    use super::*;
    use crate::PuzzleGenerator;

    fn gated_puzzle() -> GeneratedPuzzle {
        PuzzleGenerator::new()
            .generate_contract_gated(Difficulty::Skilled, 17, 8)
            .unwrap()
    }

    #[test]
    fn test_accepts_gated_puzzle() {
        let pair = gated_puzzle();
        assert_eq!(validate_pair(&pair), Ok(()));
        assert_eq!(validate_payload(&pair.to_payload("2026-08-23")), Ok(()));
    }

    #[test]
    fn test_rejects_wrong_schema_version() {
        let mut payload = gated_puzzle().to_payload("p1");
        payload.schema_version = 2;
        assert_eq!(
            validate_payload(&payload),
            Err(ContractError::UnsupportedSchemaVersion { version: 2 })
        );
    }

    #[test]
    fn test_rejects_malformed_grid() {
        let mut payload = gated_puzzle().to_payload("p1");
        payload.puzzle.truncate(80);
        assert_eq!(
            validate_payload(&payload),
            Err(ContractError::Grid(GridError::InvalidLength { len: 80 }))
        );

        let mut payload = gated_puzzle().to_payload("p1");
        payload.solution[3] = 11;
        assert_eq!(
            validate_payload(&payload),
            Err(ContractError::Grid(GridError::InvalidCellValue {
                index: 3,
                value: 11,
            }))
        );
    }

    #[test]
    fn test_rejects_incomplete_solution() {
        let mut payload = gated_puzzle().to_payload("p1");
        payload.solution[40] = 0;
        assert_eq!(
            validate_payload(&payload),
            Err(ContractError::SolutionIncomplete)
        );
    }

    #[test]
    fn test_rejects_puzzle_solution_disagreement() {
        let pair = gated_puzzle();
        let mut payload = pair.to_payload("p1");
        // Find a given and change it to a different digit
        let index = payload
            .puzzle
            .iter()
            .position(|&value| value != 0)
            .unwrap();
        payload.puzzle[index] = payload.puzzle[index] % 9 + 1;
        assert_eq!(
            validate_payload(&payload),
            Err(ContractError::PuzzleDisagreesWithSolution { index })
        );
    }

    #[test]
    fn test_rejects_non_unique_puzzle() {
        let pair = gated_puzzle();
        let empty_puzzle = GeneratedPuzzle {
            puzzle: DigitGrid::new(),
            givens: [false; 81],
            ..pair
        };
        assert_eq!(
            validate_pair(&empty_puzzle),
            Err(ContractError::NotUnique {
                count: SolutionCount::AtLeast(2)
            })
        );
    }

    #[test]
    fn test_rejects_givens_mask_mismatch() {
        let mut pair = gated_puzzle();
        let index = pair.givens.iter().position(|&given| given).unwrap();
        pair.givens[index] = false;
        assert_eq!(
            validate_pair(&pair),
            Err(ContractError::GivensMaskMismatch { index })
        );
    }

    #[test]
    fn test_rejects_conflicting_solution() {
        let pair = gated_puzzle();
        let mut payload = pair.to_payload("p1");
        // Make the first two solution cells equal
        payload.solution[1] = payload.solution[0];
        assert_eq!(
            validate_payload(&payload),
            Err(ContractError::SolutionConflict)
        );
    }
}
