//! Multi-device play-history reconciliation.
//!
//! Devices record immutable [`MoveRecord`]s in per-device append-only logs.
//! When logs diverge (say, during a connectivity gap), [`merge`] unions them
//! into one canonical order and [`fold`] replays that order into a
//! [`SessionState`]. Both are pure functions: any two devices that have
//! seen the same merged log compute the same state.
//!
//! All "now" values are explicit parameters. Nothing in this crate reads a
//! clock.

mod fold;
mod merge;
mod record;
mod timer;

pub use self::{
    fold::{RunStatus, SessionState, fold},
    merge::merge,
    record::{HintType, MoveKind, MoveRecord},
    timer::RunTimer,
};

/// Error raised when a move record violates its wire contract.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// The record kind requires a cell index but none was given.
    #[display("{kind} record from {device_id}/{rev} is missing a cell index")]
    MissingCell {
        /// Kind of the offending record.
        kind: MoveKind,
        /// Device that produced the record.
        device_id: String,
        /// Per-device revision of the record.
        rev: u64,
    },
    /// The record kind requires a digit but none was given.
    #[display("{kind} record from {device_id}/{rev} is missing a digit")]
    MissingDigit {
        /// Kind of the offending record.
        kind: MoveKind,
        /// Device that produced the record.
        device_id: String,
        /// Per-device revision of the record.
        rev: u64,
    },
    /// A hint record carried no hint type.
    #[display("hint record from {device_id}/{rev} is missing a hint type")]
    MissingHintType {
        /// Device that produced the record.
        device_id: String,
        /// Per-device revision of the record.
        rev: u64,
    },
    /// The cell index is outside the 81-cell grid.
    #[display("cell index {cell} is out of range (0-80)")]
    CellOutOfRange {
        /// The offending index.
        cell: u8,
    },
    /// The digit is outside 1-9.
    #[display("digit {digit} is out of range (1-9)")]
    DigitOutOfRange {
        /// The offending value.
        digit: u8,
    },
}
