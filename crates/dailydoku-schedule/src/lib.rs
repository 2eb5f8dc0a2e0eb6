//! Deterministic daily difficulty scheduling.
//!
//! Assigns one [`Difficulty`](dailydoku_core::Difficulty) to every calendar
//! day of a month under quota and adjacency constraints. A schedule is a
//! pure function of `(year, month, policy_version, policy)`: the seed is
//! derived by hashing the policy version and calendar position, never
//! supplied externally, so the same inputs always reproduce the same month.
//!
//! # Examples
//!
//! ```
//! use dailydoku_schedule::{SchedulePolicy, build_schedule_for_month};
//!
//! let policy = SchedulePolicy::default();
//! let schedule = build_schedule_for_month(2026, 8, "sched-v1", &policy)?;
//!
//! assert_eq!(schedule.len(), 31);
//! assert_eq!(schedule[0].date_key.day(), 1);
//! # Ok::<(), dailydoku_schedule::ScheduleError>(())
//! ```

mod builder;
pub mod date;
mod policy;

pub use self::{
    builder::{ScheduleEntry, build_schedule_for_month, get_difficulty_for_date},
    date::{DateError, DateKey},
    policy::SchedulePolicy,
};

/// Error raised by schedule construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ScheduleError {
    /// A date or month argument was out of range.
    #[display("invalid date: {_0}")]
    #[from]
    Date(DateError),
    /// The policy's percentage targets do not sum to 100.
    #[display("policy percentage targets sum to {sum}, expected 100")]
    InvalidPolicy {
        /// Actual sum of the targets.
        sum: u32,
    },
    /// No quota-exact, guardrail-satisfying fill was found within the
    /// retry budget.
    ///
    /// Indicates a pathological seed or a mis-tuned policy; the scheduler
    /// never silently degrades the constraints instead.
    #[display("no valid schedule for {year}-{month:02} within {attempts} attempt(s)")]
    AttemptsExhausted {
        /// Year of the failed month.
        year: u16,
        /// Month of the failed month.
        month: u8,
        /// Retry budget that was exhausted.
        attempts: usize,
    },
}
