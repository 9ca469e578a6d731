//! Session lifecycle and solve timer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// The route game never reaches `Exhausted`; it has no attempt cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    InProgress,
    Won,
    Exhausted,
}

impl SessionState {
    /// Returns true once no more guesses are accepted.
    pub fn is_over(self) -> bool {
        matches!(self, SessionState::Won | SessionState::Exhausted)
    }
}

/// Wall-clock timer that freezes when the game ends.
#[derive(Debug, Clone, Default)]
pub(crate) struct Timer {
    started_at: Option<DateTime<Utc>>,
    frozen: Option<u64>,
}

impl Timer {
    /// A timer that has already run for `elapsed` seconds as of `now`.
    pub(crate) fn resumed(now: DateTime<Utc>, elapsed: u64) -> Self {
        let elapsed = Duration::seconds(elapsed.min(u32::MAX as u64) as i64);
        Self {
            started_at: Some(now - elapsed),
            frozen: None,
        }
    }

    /// A stopped timer showing `elapsed` seconds.
    pub(crate) fn finished(elapsed: u64) -> Self {
        Self {
            started_at: None,
            frozen: Some(elapsed),
        }
    }

    /// Start counting, unless already started.
    pub(crate) fn start(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() && self.frozen.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Freeze the timer and return the final elapsed seconds.
    pub(crate) fn stop(&mut self, now: DateTime<Utc>) -> u64 {
        let elapsed = self.elapsed(now);
        self.frozen = Some(elapsed);
        elapsed
    }

    /// Seconds elapsed as of `now`; 0 before the first guess.
    pub(crate) fn elapsed(&self, now: DateTime<Utc>) -> u64 {
        if let Some(frozen) = self.frozen {
            return frozen;
        }
        self.started_at
            .map(|start| now.signed_duration_since(start).num_seconds().max(0) as u64)
            .unwrap_or(0)
    }

    /// Final time, once stopped.
    pub(crate) fn solve_seconds(&self) -> Option<u64> {
        self.frozen
    }
}
