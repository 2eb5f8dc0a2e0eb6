//! Pause-aware elapsed-time accounting.

use serde::{Deserialize, Serialize};

/// Run timer for one play session.
///
/// Tracks when the run started, how long it has spent paused, and whether a
/// pause is currently open. Elapsed time excludes every paused interval,
/// the open one included. All instants are caller-supplied millisecond
/// timestamps; the timer never reads a clock.
///
/// # Examples
///
/// ```
/// use dailydoku_session::RunTimer;
///
/// let mut timer = RunTimer::new(0);
/// timer.pause(1_000);
/// timer.resume(2_000);
/// assert_eq!(timer.elapsed_ms(3_000), 2_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTimer {
    /// When the run started.
    pub started_at: u64,
    /// Total length of all closed paused intervals.
    pub total_paused_ms: u64,
    /// Start of the currently open pause, if any.
    pub paused_at: Option<u64>,
}

impl RunTimer {
    /// Creates a running timer started at the given instant.
    #[must_use]
    pub const fn new(started_at: u64) -> Self {
        Self {
            started_at,
            total_paused_ms: 0,
            paused_at: None,
        }
    }

    /// Returns `true` while a pause is open.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Opens a pause at the given instant. A no-op if already paused.
    pub const fn pause(&mut self, now: u64) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Closes the open pause at the given instant. A no-op if not paused.
    pub fn resume(&mut self, now: u64) {
        if let Some(paused_at) = self.paused_at.take() {
            self.total_paused_ms += now.saturating_sub(paused_at);
        }
    }

    /// Returns the elapsed play time at `now`, paused intervals excluded.
    #[must_use]
    pub fn elapsed_ms(&self, now: u64) -> u64 {
        let open_pause = self
            .paused_at
            .map_or(0, |paused_at| now.saturating_sub(paused_at));
        now.saturating_sub(self.started_at)
            .saturating_sub(self.total_paused_ms)
            .saturating_sub(open_pause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_excludes_closed_pauses() {
        let mut timer = RunTimer::new(0);
        timer.pause(1_000);
        timer.resume(2_000);
        assert_eq!(timer.elapsed_ms(3_000), 2_000);

        timer.pause(3_000);
        timer.resume(3_500);
        assert_eq!(timer.elapsed_ms(4_000), 2_500);
    }

    #[test]
    fn test_elapsed_excludes_open_pause() {
        let mut timer = RunTimer::new(100);
        timer.pause(600);
        assert_eq!(timer.elapsed_ms(10_000), 500);
    }

    #[test]
    fn test_pause_and_resume_are_idempotent() {
        let mut timer = RunTimer::new(0);
        timer.pause(1_000);
        timer.pause(1_500);
        timer.resume(2_000);
        timer.resume(2_500);
        assert_eq!(timer.elapsed_ms(3_000), 2_000);
        assert!(!timer.is_paused());
    }

    #[test]
    fn test_elapsed_never_underflows() {
        let timer = RunTimer::new(5_000);
        assert_eq!(timer.elapsed_ms(4_000), 0);
    }
}
