use dailydoku_core::Difficulty;

use crate::ScheduleError;

/// Parameters of the monthly difficulty allocation.
///
/// A policy travels together with an opaque policy-version token: changing
/// any of these values (or the allocation algorithm) requires a new token
/// so already-published schedules stay reproducible under their original
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulePolicy {
    /// Monthly percentage target per difficulty, indexed by
    /// [`Difficulty::tier`]. Must sum to 100.
    pub target_percent: [u8; 6],
    /// Whether to reserve the 3-day `expert → fiendish → expert` block.
    pub fiendish_block: bool,
    /// Whole-month rebuild budget before a dead-ended fill becomes a fatal
    /// error.
    pub max_attempts: usize,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            // novice, skilled, advanced, expert, fiendish, ultimate.
            // Ultimate gets no quota: under the one-tier adjacency guardrail
            // it could only ever sit next to a fiendish day, and fiendish
            // days only exist inside the reserved block.
            target_percent: [20, 30, 30, 15, 5, 0],
            fiendish_block: true,
            max_attempts: 32,
        }
    }
}

impl SchedulePolicy {
    /// Returns the percentage target for one difficulty.
    #[must_use]
    pub fn target_for(&self, difficulty: Difficulty) -> u8 {
        self.target_percent[usize::from(difficulty.tier())]
    }

    /// Checks that the targets sum to exactly 100.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidPolicy`] otherwise.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let sum: u32 = self.target_percent.iter().map(|&p| u32::from(p)).sum();
        if sum == 100 {
            Ok(())
        } else {
            Err(ScheduleError::InvalidPolicy { sum })
        }
    }
}
