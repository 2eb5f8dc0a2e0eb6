//! Replay of a move log into session state.

use dailydoku_core::{Digit, DigitGrid, DigitSet, Position};

use crate::{HintType, MoveKind, MoveRecord, RunTimer, SessionError};

/// Whether the run is live, paused, or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    /// The timer is counting.
    #[default]
    Running,
    /// The timer is stopped on an open pause.
    Paused,
    /// The session is over; later records are ignored.
    Completed,
}

/// The replay result of a move log.
///
/// Derived state, recomputed on demand; the move log itself stays the
/// source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Player-entered cell values.
    pub grid: DigitGrid,
    /// Pencil marks, per cell.
    pub notes: [DigitSet; 81],
    /// Pause-aware elapsed-time accounting.
    pub timer: RunTimer,
    /// Current run status.
    pub status: RunStatus,
    /// When the completion record arrived, if any.
    pub completed_at: Option<u64>,
    /// Idempotency token carried by the completion record, if any.
    pub completion_token: Option<String>,
    /// Count of mistake records.
    pub mistakes: u32,
    /// Count of hint records.
    pub hints_used: u32,
    /// Hint counts bucketed by [`HintType::index`].
    pub hint_breakdown: [u32; 3],
}

impl SessionState {
    /// Creates the blank state of a run started at the given instant.
    #[must_use]
    pub fn new(started_at: u64) -> Self {
        Self {
            grid: DigitGrid::new(),
            notes: [DigitSet::EMPTY; 81],
            timer: RunTimer::new(started_at),
            status: RunStatus::Running,
            completed_at: None,
            completion_token: None,
            mistakes: 0,
            hints_used: 0,
            hint_breakdown: [0; 3],
        }
    }

    /// Returns `true` once a completion record has been folded in.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }
}

/// Replays a move log, in the order given, on top of an initial state.
///
/// Cell writes are last-write-wins in log order, notes are set unions and
/// differences, and pause/resume/complete drive the [`RunTimer`] state
/// machine. Once a completion record is folded, every later record is
/// ignored, so a stray late-arriving fact cannot corrupt a finished
/// session's stats. Folding is pure: the same inputs always produce the
/// same state.
///
/// Callers reconciling multiple devices should pass a
/// [`merge`](crate::merge())d log, whose canonical
/// `(timestamp, device_id, rev)` order makes every device compute the same
/// state.
///
/// # Errors
///
/// Returns the first record's [`SessionError`] if the log contains a
/// malformed record.
pub fn fold(initial: &SessionState, log: &[MoveRecord]) -> Result<SessionState, SessionError> {
    let mut state = initial.clone();
    for record in log {
        record.validate()?;
        if state.is_completed() {
            continue;
        }
        apply(&mut state, record);
    }
    Ok(state)
}

fn apply(state: &mut SessionState, record: &MoveRecord) {
    // `validate` has run, so the fields each kind needs are present and in
    // range; absent ones here mean a kind that does not use them.
    let pos = record
        .cell
        .filter(|&cell| cell < 81)
        .map(Position::from_index);
    let digit = record.digit.and_then(Digit::try_from_value);
    match record.kind {
        MoveKind::Set => {
            if let (Some(pos), Some(digit)) = (pos, digit) {
                state.grid.set(pos, Some(digit));
            }
        }
        MoveKind::Clear => {
            if let Some(pos) = pos {
                state.grid.set(pos, None);
            }
        }
        MoveKind::NoteAdd => {
            if let (Some(pos), Some(digit)) = (pos, digit) {
                state.notes[pos.index()].insert(digit);
            }
        }
        MoveKind::NoteRemove => {
            if let (Some(pos), Some(digit)) = (pos, digit) {
                state.notes[pos.index()].remove(digit);
            }
        }
        MoveKind::Pause => {
            state.timer.pause(record.timestamp);
            state.status = RunStatus::Paused;
        }
        MoveKind::Resume => {
            state.timer.resume(record.timestamp);
            state.status = RunStatus::Running;
        }
        MoveKind::Complete => {
            // An open pause ends at completion so its interval stays
            // excluded from the final elapsed time.
            state.timer.resume(record.timestamp);
            state.status = RunStatus::Completed;
            state.completed_at = Some(record.timestamp);
            state.completion_token = record.token.clone();
        }
        MoveKind::Mistake => state.mistakes += 1,
        MoveKind::Hint => {
            if let Some(hint_type) = record.hint_type {
                state.hints_used += 1;
                state.hint_breakdown[hint_type.index()] += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge;

    fn record(device_id: &str, rev: u64, timestamp: u64, kind: MoveKind) -> MoveRecord {
        MoveRecord {
            device_id: device_id.to_owned(),
            rev,
            timestamp,
            kind,
            cell: None,
            digit: None,
            hint_type: None,
            token: None,
        }
    }

    fn set(device_id: &str, rev: u64, timestamp: u64, cell: u8, digit: u8) -> MoveRecord {
        MoveRecord {
            cell: Some(cell),
            digit: Some(digit),
            ..record(device_id, rev, timestamp, MoveKind::Set)
        }
    }

    fn note(device_id: &str, rev: u64, timestamp: u64, kind: MoveKind, cell: u8, digit: u8) -> MoveRecord {
        MoveRecord {
            cell: Some(cell),
            digit: Some(digit),
            ..record(device_id, rev, timestamp, kind)
        }
    }

    #[test]
    fn test_later_timestamp_wins_across_devices() {
        let log_a = vec![set("a", 0, 20, 0, 2)];
        let log_b = vec![set("b", 0, 40, 0, 9)];
        let state = fold(&SessionState::new(0), &merge(&log_a, &log_b)).unwrap();
        assert_eq!(state.grid.get(Position::from_index(0)), Some(Digit::D9));
        // Whichever log arrives first, both devices converge.
        assert_eq!(state, fold(&SessionState::new(0), &merge(&log_b, &log_a)).unwrap());
    }

    #[test]
    fn test_pause_interval_is_excluded() {
        let log = vec![
            record("a", 0, 1_000, MoveKind::Pause),
            record("a", 1, 2_000, MoveKind::Resume),
        ];
        let state = fold(&SessionState::new(0), &log).unwrap();
        assert_eq!(state.status, RunStatus::Running);
        assert_eq!(state.timer.elapsed_ms(3_000), 2_000);
    }

    #[test]
    fn test_notes_are_set_union_and_difference() {
        let log = vec![
            note("a", 0, 10, MoveKind::NoteAdd, 4, 5),
            note("a", 1, 20, MoveKind::NoteAdd, 4, 5),
            note("a", 2, 30, MoveKind::NoteAdd, 4, 7),
            note("a", 3, 40, MoveKind::NoteRemove, 4, 5),
            note("a", 4, 50, MoveKind::NoteRemove, 4, 9),
        ];
        let state = fold(&SessionState::new(0), &log).unwrap();
        assert_eq!(state.notes[4], DigitSet::from_digit(Digit::D7));
        assert!(state.notes.iter().enumerate().all(|(i, s)| i == 4 || s.is_empty()));
    }

    #[test]
    fn test_clear_empties_a_set_cell() {
        let log = vec![
            set("a", 0, 10, 80, 3),
            MoveRecord {
                cell: Some(80),
                ..record("a", 1, 20, MoveKind::Clear)
            },
        ];
        let state = fold(&SessionState::new(0), &log).unwrap();
        assert_eq!(state.grid.get(Position::from_index(80)), None);
    }

    #[test]
    fn test_counters_and_hint_breakdown() {
        let hint = |rev, timestamp, hint_type| MoveRecord {
            hint_type: Some(hint_type),
            ..record("a", rev, timestamp, MoveKind::Hint)
        };
        let log = vec![
            record("a", 0, 10, MoveKind::Mistake),
            hint(1, 20, HintType::RevealCell),
            record("a", 2, 30, MoveKind::Mistake),
            hint(3, 40, HintType::RevealCell),
            hint(4, 50, HintType::Technique),
        ];
        let state = fold(&SessionState::new(0), &log).unwrap();
        assert_eq!(state.mistakes, 2);
        assert_eq!(state.hints_used, 3);
        assert_eq!(state.hint_breakdown, [2, 0, 1]);
    }

    #[test]
    fn test_completion_guards_later_records() {
        let complete = MoveRecord {
            token: Some("once".to_owned()),
            ..record("a", 0, 100, MoveKind::Complete)
        };
        let log = vec![
            complete,
            set("b", 0, 150, 0, 5),
            record("b", 1, 160, MoveKind::Mistake),
        ];
        let state = fold(&SessionState::new(0), &log).unwrap();
        assert!(state.is_completed());
        assert_eq!(state.completed_at, Some(100));
        assert_eq!(state.completion_token.as_deref(), Some("once"));
        assert_eq!(state.grid.get(Position::from_index(0)), None);
        assert_eq!(state.mistakes, 0);
    }

    #[test]
    fn test_completion_closes_an_open_pause() {
        let log = vec![
            record("a", 0, 1_000, MoveKind::Pause),
            record("a", 1, 1_500, MoveKind::Complete),
        ];
        let state = fold(&SessionState::new(0), &log).unwrap();
        assert_eq!(state.timer.elapsed_ms(1_500), 1_000);
        assert!(!state.timer.is_paused());
    }

    #[test]
    fn test_fold_is_replay_stable() {
        let log = vec![
            set("a", 0, 10, 3, 4),
            record("a", 1, 20, MoveKind::Pause),
            set("b", 0, 30, 3, 6),
            record("a", 2, 40, MoveKind::Resume),
        ];
        let initial = SessionState::new(0);
        assert_eq!(fold(&initial, &log).unwrap(), fold(&initial, &log).unwrap());
    }

    #[test]
    fn test_malformed_record_is_rejected() {
        let mut bad = record("a", 0, 10, MoveKind::Set);
        bad.cell = Some(2);
        assert_eq!(
            fold(&SessionState::new(0), &[bad]),
            Err(SessionError::MissingDigit {
                kind: MoveKind::Set,
                device_id: "a".to_owned(),
                rev: 0,
            })
        );
    }
}
