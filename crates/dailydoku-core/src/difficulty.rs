//! The ordered difficulty vocabulary.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Puzzle difficulty, ordered from gentlest to hardest.
///
/// The ordering is load-bearing: the daily scheduler's adjacency guardrail
/// compares neighboring days by [`tier`](Self::tier) distance. Reordering or
/// inserting variants requires a scheduling policy version bump so
/// previously computed schedules stay reproducible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry level.
    Novice,
    /// Comfortable for regular players.
    Skilled,
    /// Requires sustained technique use.
    Advanced,
    /// Hard; sparse givens.
    Expert,
    /// Harder than expert; reserved for special days.
    Fiendish,
    /// The hardest tier.
    Ultimate,
}

impl Difficulty {
    /// All difficulties in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Novice,
        Self::Skilled,
        Self::Advanced,
        Self::Expert,
        Self::Fiendish,
        Self::Ultimate,
    ];

    /// Returns the zero-based tier index (novice = 0, ultimate = 5).
    #[must_use]
    pub const fn tier(self) -> u8 {
        self as u8
    }

    /// Returns the absolute tier distance between two difficulties.
    #[must_use]
    pub const fn tier_distance(self, other: Self) -> u8 {
        self.tier().abs_diff(other.tier())
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Novice => "novice",
            Self::Skilled => "skilled",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
            Self::Fiendish => "fiendish",
            Self::Ultimate => "ultimate",
        };
        f.write_str(name)
    }
}
