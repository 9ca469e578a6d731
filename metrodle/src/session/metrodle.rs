//! The station-guessing game.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::config::SessionConfig;
use super::error::SessionError;
use super::state::{SessionState, Timer};
use super::stats::{GameOutcome, StatsSink, report_or_log};
use super::store::{MetrodleRecord, SessionKey, SessionRecord, SessionStore, save_or_log};
use crate::catalog::Catalog;
use crate::domain::{Station, StationId};
use crate::scoring::{GuessResult, score};

/// One player's attempt at one day's station.
///
/// The session owns its target, attempt history and timer. The catalog is
/// shared read-only.
#[derive(Debug, Clone)]
pub struct MetrodleSession {
    key: SessionKey,
    catalog: Arc<Catalog>,
    target: Station,
    config: SessionConfig,
    guesses: Vec<GuessResult>,
    state: SessionState,
    timer: Timer,
    stats_reported: bool,
}

impl MetrodleSession {
    /// Create a fresh session for `target`.
    pub fn new(
        key: SessionKey,
        catalog: Arc<Catalog>,
        target: &StationId,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let target = catalog
            .get(target)
            .cloned()
            .ok_or_else(|| SessionError::UnknownStation(target.clone()))?;

        Ok(Self {
            key,
            catalog,
            target,
            config,
            guesses: Vec::new(),
            state: SessionState::NotStarted,
            timer: Timer::default(),
            stats_reported: false,
        })
    }

    /// Rebuild a session from a persisted record.
    ///
    /// Attempts are rescored against `target`, so feedback reflects the
    /// current catalog. Ids that are no longer in the catalog, and repeats,
    /// are skipped.
    pub fn resume(
        key: SessionKey,
        catalog: Arc<Catalog>,
        target: &StationId,
        config: SessionConfig,
        record: &MetrodleRecord,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new(key, catalog, target, config)?;
        if record.target != *target {
            warn!(
                session = %session.key,
                recorded = %record.target,
                %target,
                "record was for a different target, replaying against current"
            );
        }

        for id in &record.attempts {
            if session.state.is_over() {
                break;
            }
            if let Err(e) = session.apply(id) {
                warn!(session = %session.key, station = %id, error = %e, "skipping attempt");
            }
        }

        session.timer = if session.state.is_over() {
            Timer::finished(record.elapsed_seconds)
        } else if session.guesses.is_empty() {
            Timer::default()
        } else {
            Timer::resumed(now, record.elapsed_seconds)
        };
        session.stats_reported = record.stats_reported && session.state.is_over();

        debug!(
            session = %session.key,
            attempts = session.guesses.len(),
            state = ?session.state,
            "resumed session"
        );
        Ok(session)
    }

    /// Score a guess and advance the game.
    pub fn guess(
        &mut self,
        id: &StationId,
        now: DateTime<Utc>,
    ) -> Result<&GuessResult, SessionError> {
        self.apply(id)?;
        self.timer.start(now);
        if self.state.is_over() {
            let seconds = self.timer.stop(now);
            info!(
                session = %self.key,
                won = self.is_won(),
                attempts = self.guesses.len(),
                seconds,
                "game finished"
            );
        }
        let index = self.guesses.len() - 1;
        Ok(&self.guesses[index])
    }

    /// Guess, then hand the new state to `store`.
    ///
    /// A failed write is logged and the in-memory state is kept.
    pub fn submit<S: SessionStore + ?Sized>(
        &mut self,
        id: &StationId,
        now: DateTime<Utc>,
        store: &S,
    ) -> Result<GuessResult, SessionError> {
        let result = self.guess(id, now)?.clone();
        self.save(store, now);
        Ok(result)
    }

    fn apply(&mut self, id: &StationId) -> Result<(), SessionError> {
        if self.state.is_over() {
            return Err(SessionError::GameOver);
        }
        let guessed = self
            .catalog
            .get(id)
            .ok_or_else(|| SessionError::UnknownStation(id.clone()))?;
        if self.guesses.iter().any(|g| g.station.id == *id) {
            return Err(SessionError::AlreadyGuessed(id.clone()));
        }

        let result = score(guessed, &self.target, self.catalog.network());
        let won = result.is_win();
        self.guesses.push(result);

        self.state = if won {
            SessionState::Won
        } else if self.guesses.len() >= self.config.max_attempts {
            SessionState::Exhausted
        } else {
            SessionState::InProgress
        };
        debug!(session = %self.key, station = %id, state = ?self.state, "applied guess");
        Ok(())
    }

    /// Snapshot for persistence.
    pub fn record(&self, now: DateTime<Utc>) -> MetrodleRecord {
        MetrodleRecord {
            target: self.target.id.clone(),
            attempts: self.guesses.iter().map(|g| g.station.id.clone()).collect(),
            won: self.is_won(),
            completed: self.state.is_over(),
            elapsed_seconds: self.timer.elapsed(now),
            stats_reported: self.stats_reported,
        }
    }

    /// Persist the current state. Returns true if the write succeeded.
    pub fn save<S: SessionStore + ?Sized>(&self, store: &S, now: DateTime<Utc>) -> bool {
        save_or_log(store, &self.key, &SessionRecord::Metrodle(self.record(now)))
    }

    /// Result to report once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.is_over().then(|| GameOutcome {
            won: self.is_won(),
            attempts: self.guesses.len() as u32,
        })
    }

    /// Report a finished game to `sink` and persist that it was counted.
    ///
    /// A game is reported at most once, including across resumes. Returns
    /// true only when this call delivered the report.
    pub fn report_stats<K, S>(&mut self, sink: &K, store: &S, now: DateTime<Utc>) -> bool
    where
        K: StatsSink + ?Sized,
        S: SessionStore + ?Sized,
    {
        if self.stats_reported {
            return false;
        }
        let Some(outcome) = self.outcome() else {
            return false;
        };
        if !report_or_log(sink, &self.key.user, self.key.mode, outcome) {
            return false;
        }
        self.stats_reported = true;
        self.save(store, now);
        true
    }

    /// Whether the finished game has been counted in the player's stats.
    pub fn stats_reported(&self) -> bool {
        self.stats_reported
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn target(&self) -> &Station {
        &self.target
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Feedback for every attempt so far, oldest first.
    pub fn guesses(&self) -> &[GuessResult] {
        &self.guesses
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == SessionState::Won
    }

    /// Guesses left before the game is lost.
    pub fn attempts_left(&self) -> usize {
        if self.state.is_over() {
            return 0;
        }
        self.config.max_attempts.saturating_sub(self.guesses.len())
    }

    /// Ids already guessed, for filtering suggestions.
    pub fn guessed_ids(&self) -> Vec<StationId> {
        self.guesses.iter().map(|g| g.station.id.clone()).collect()
    }

    /// Seconds played as of `now`.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        self.timer.elapsed(now)
    }

    /// Final time, once the game is over.
    pub fn solve_seconds(&self) -> Option<u64> {
        self.timer.solve_seconds()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::catalog::fixtures::{catalog, id};
    use crate::session::store::GameMode;
    use chrono::{NaiveDate, TimeZone};
    use proptest::prelude::*;

    const IDS: [&str; 10] = ["a1", "a2", "a3", "x", "a5", "b1", "b3", "y", "c1", "c3"];

    proptest! {
        /// Replaying a record rebuilds identical feedback
        #[test]
        fn replay_is_idempotent(
            target in 0usize..10,
            picks in prop::collection::vec(0usize..10, 0..10),
        ) {
            let cat = Arc::new(catalog());
            let key = SessionKey::new(
                "p",
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                GameMode::Metrodle,
            );
            let now = Utc.timestamp_opt(1_767_225_600, 0).unwrap();
            let mut live = MetrodleSession::new(
                key.clone(),
                cat.clone(),
                &id(IDS[target]),
                SessionConfig::default(),
            )
            .unwrap();
            for p in picks {
                let _ = live.guess(&id(IDS[p]), now);
            }

            let resumed = MetrodleSession::resume(
                key,
                cat,
                &id(IDS[target]),
                SessionConfig::default(),
                &live.record(now),
                now,
            )
            .unwrap();
            prop_assert_eq!(resumed.guesses(), live.guesses());
            prop_assert_eq!(resumed.state(), live.state());
            prop_assert!(live.guesses().len() <= 6);
        }
    }
}
