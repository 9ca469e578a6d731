//! Aggregate player statistics.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::StoreError;
use super::store::GameMode;

/// How a finished session went.
///
/// `attempts` is the guess count in the station game and the error count
/// in the route game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub won: bool,
    pub attempts: u32,
}

/// Running totals for one player in one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub played: u32,
    pub wins: u32,
    pub streak: u32,
    pub best_streak: u32,
    /// Wins by bucket. In the station game index 0 is a first-guess win;
    /// in the route game index 0 is a route with no errors and the last
    /// bucket also holds every higher error count.
    pub distribution: Vec<u32>,
}

impl Stats {
    /// Empty stats with a distribution of `buckets` attempt counts.
    pub fn new(buckets: usize) -> Self {
        Self {
            played: 0,
            wins: 0,
            streak: 0,
            best_streak: 0,
            distribution: vec![0; buckets],
        }
    }

    /// Fold one finished game of `mode` into the totals.
    pub fn record(&mut self, mode: GameMode, outcome: GameOutcome) {
        self.played += 1;
        if outcome.won {
            self.wins += 1;
            self.streak += 1;
            let attempts = outcome.attempts as usize;
            let bucket = match mode {
                GameMode::Metrodle => attempts.checked_sub(1),
                GameMode::Route => Some(attempts.min(self.distribution.len().saturating_sub(1))),
            };
            if let Some(slot) = bucket.and_then(|b| self.distribution.get_mut(b)) {
                *slot += 1;
            }
        } else {
            self.streak = 0;
        }
        self.best_streak = self.best_streak.max(self.streak);
    }

    /// Percentage of games won, rounded down. 0 when nothing was played.
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        self.wins * 100 / self.played
    }
}

/// Receives finished-game outcomes.
pub trait StatsSink {
    /// Report a finished game for `user`.
    fn report(&self, user: &str, mode: GameMode, outcome: GameOutcome) -> Result<(), StoreError>;
}

/// Report and log failure instead of propagating it.
///
/// Returns true if the report succeeded.
pub fn report_or_log<S: StatsSink + ?Sized>(
    sink: &S,
    user: &str,
    mode: GameMode,
    outcome: GameOutcome,
) -> bool {
    match sink.report(user, mode, outcome) {
        Ok(()) => true,
        Err(e) => {
            warn!(user, %mode, error = %e, "failed to report stats");
            false
        }
    }
}

/// In-memory stats keyed by player and mode.
#[derive(Debug)]
pub struct MemoryStats {
    buckets: usize,
    stats: Mutex<HashMap<(String, GameMode), Stats>>,
}

impl MemoryStats {
    /// Create an empty sink whose distributions have `buckets` slots.
    pub fn new(buckets: usize) -> Self {
        Self {
            buckets,
            stats: Mutex::new(HashMap::new()),
        }
    }

    /// Current stats for a player, or empty stats if they never finished a game.
    pub fn get(&self, user: &str, mode: GameMode) -> Stats {
        self.stats
            .lock()
            .ok()
            .and_then(|s| s.get(&(user.to_string(), mode)).cloned())
            .unwrap_or_else(|| Stats::new(self.buckets))
    }
}

impl StatsSink for MemoryStats {
    fn report(&self, user: &str, mode: GameMode, outcome: GameOutcome) -> Result<(), StoreError> {
        let mut stats = self
            .stats
            .lock()
            .map_err(|_| StoreError::Unavailable("stats poisoned".to_string()))?;
        stats
            .entry((user.to_string(), mode))
            .or_insert_with(|| Stats::new(self.buckets))
            .record(mode, outcome);
        Ok(())
    }
}
