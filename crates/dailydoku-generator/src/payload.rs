//! The distributable puzzle/solution payload shape.

use serde::{Deserialize, Serialize};

use dailydoku_core::Difficulty;

use crate::GeneratedPuzzle;

/// Current payload schema version.
///
/// Bumped whenever the payload shape changes incompatibly; the validator
/// rejects versions it does not understand.
pub const SCHEMA_VERSION: u32 = 1;

/// A puzzle/solution pair as distributed to clients.
///
/// This is the shape validated at the boundary when puzzles arrive as
/// remote content; [`validate_payload`](crate::validate_payload) is the
/// authority for whether a payload is acceptable, independent of transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzlePayload {
    /// Payload schema version; see [`SCHEMA_VERSION`].
    pub schema_version: u32,
    /// Date key (`YYYY-MM-DD`) or opaque puzzle id.
    pub id: String,
    /// Advertised difficulty.
    pub difficulty: Difficulty,
    /// 81 row-major cell values, 0 for empty.
    pub puzzle: Vec<u8>,
    /// 81 row-major solution values, 1-9.
    pub solution: Vec<u8>,
}

impl GeneratedPuzzle {
    /// Converts this puzzle into the distributable payload shape.
    #[must_use]
    pub fn to_payload(&self, id: impl Into<String>) -> PuzzlePayload {
        PuzzlePayload {
            schema_version: SCHEMA_VERSION,
            id: id.into(),
            difficulty: self.difficulty,
            puzzle: self.puzzle.to_values().to_vec(),
            solution: self.solution.to_values().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip() {
        let payload = PuzzlePayload {
            schema_version: SCHEMA_VERSION,
            id: "2026-08-23".to_owned(),
            difficulty: Difficulty::Expert,
            puzzle: vec![0; 81],
            solution: vec![1; 81],
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"difficulty\":\"expert\""));
        let back: PuzzlePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
