//! The move record wire shape.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::SessionError;

/// What a move record did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Wrote a digit into a cell.
    Set,
    /// Emptied a cell.
    Clear,
    /// Added a pencil-mark digit to a cell.
    NoteAdd,
    /// Removed a pencil-mark digit from a cell.
    NoteRemove,
    /// Paused the run timer.
    Pause,
    /// Resumed the run timer.
    Resume,
    /// Finished the session.
    Complete,
    /// Counted a wrong entry.
    Mistake,
    /// Consumed a hint.
    Hint,
}

impl Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Set => "set",
            Self::Clear => "clear",
            Self::NoteAdd => "note_add",
            Self::NoteRemove => "note_remove",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Complete => "complete",
            Self::Mistake => "mistake",
            Self::Hint => "hint",
        };
        f.write_str(name)
    }
}

/// Which kind of help a hint record consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintType {
    /// The correct digit for one cell was revealed.
    RevealCell,
    /// The legal candidates for one cell were shown.
    ShowCandidates,
    /// A solving technique was pointed out.
    Technique,
}

impl HintType {
    /// All hint types, in breakdown-bucket order.
    pub const ALL: [Self; 3] = [Self::RevealCell, Self::ShowCandidates, Self::Technique];

    /// Returns the bucket index used by the fold's hint breakdown.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One immutable fact appended to a per-device move log.
///
/// Identity is `(device_id, rev)`; two records with the same identity are
/// the same fact, so log unions deduplicate on it. Optional fields are
/// populated per [`MoveKind`]: `cell` for the four grid kinds, `digit` for
/// set and the note kinds, `hint_type` for hints, and `token` for
/// completion idempotency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The device that recorded this fact.
    pub device_id: String,
    /// Monotonically increasing per-device counter.
    pub rev: u64,
    /// Milliseconds since the epoch the host assigned to the fact.
    pub timestamp: u64,
    /// What happened.
    pub kind: MoveKind,
    /// Row-major cell index (0-80), where the kind needs one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<u8>,
    /// Digit 1-9, where the kind needs one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digit: Option<u8>,
    /// Hint bucket, for hint records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_type: Option<HintType>,
    /// Idempotency token, for completion records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl MoveRecord {
    /// Checks that the optional fields required by `kind` are present and
    /// in range.
    ///
    /// # Errors
    ///
    /// Returns the violated contract as a [`SessionError`].
    pub fn validate(&self) -> Result<(), SessionError> {
        if let Some(cell) = self.cell
            && cell >= 81
        {
            return Err(SessionError::CellOutOfRange { cell });
        }
        if let Some(digit) = self.digit
            && !(1..=9).contains(&digit)
        {
            return Err(SessionError::DigitOutOfRange { digit });
        }
        let needs_cell = matches!(
            self.kind,
            MoveKind::Set | MoveKind::Clear | MoveKind::NoteAdd | MoveKind::NoteRemove
        );
        if needs_cell && self.cell.is_none() {
            return Err(SessionError::MissingCell {
                kind: self.kind,
                device_id: self.device_id.clone(),
                rev: self.rev,
            });
        }
        let needs_digit = matches!(
            self.kind,
            MoveKind::Set | MoveKind::NoteAdd | MoveKind::NoteRemove
        );
        if needs_digit && self.digit.is_none() {
            return Err(SessionError::MissingDigit {
                kind: self.kind,
                device_id: self.device_id.clone(),
                rev: self.rev,
            });
        }
        if self.kind == MoveKind::Hint && self.hint_type.is_none() {
            return Err(SessionError::MissingHintType {
                device_id: self.device_id.clone(),
                rev: self.rev,
            });
        }
        Ok(())
    }
}
