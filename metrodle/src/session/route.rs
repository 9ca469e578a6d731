//! The route game: find every station on the shortest path between two
//! stations that share no line.
//!
//! There is no attempt cap. Wrong guesses only add to an error counter.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::config::{RouteOrdering, SessionConfig};
use super::error::SessionError;
use super::state::{SessionState, Timer};
use super::stats::{GameOutcome, StatsSink, report_or_log};
use super::store::{RouteRecord, SessionKey, SessionRecord, SessionStore, save_or_log};
use crate::catalog::Catalog;
use crate::domain::{Station, StationId};

/// What a route guess did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteGuess {
    /// The station was on the path and is now confirmed.
    Confirmed { won: bool },
    /// The station was confirmed earlier; nothing changed.
    AlreadyConfirmed,
    /// The station was not accepted; the error counter went up.
    Wrong,
}

/// One player's attempt at one day's route.
#[derive(Debug, Clone)]
pub struct RouteSession {
    key: SessionKey,
    catalog: Arc<Catalog>,
    origin: Station,
    destination: Station,
    config: SessionConfig,
    path: Vec<StationId>,
    confirmed: Vec<StationId>,
    errors: u32,
    error_log: Vec<StationId>,
    last_error: Option<StationId>,
    state: SessionState,
    timer: Timer,
    stats_reported: bool,
}

impl RouteSession {
    /// Start a route session.
    ///
    /// Computes the canonical path and credits the origin as the first
    /// confirmed station. The timer starts immediately.
    pub fn start(
        key: SessionKey,
        catalog: Arc<Catalog>,
        origin: &StationId,
        destination: &StationId,
        config: SessionConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let lookup = |id: &StationId| {
            catalog
                .get(id)
                .cloned()
                .ok_or_else(|| SessionError::UnknownStation(id.clone()))
        };
        let origin = lookup(origin)?;
        let destination = lookup(destination)?;
        let path = catalog
            .network()
            .path(&origin.id, &destination.id)
            .ok_or_else(|| SessionError::NoPath {
                from: origin.id.clone(),
                to: destination.id.clone(),
            })?;

        let mut timer = Timer::default();
        timer.start(now);
        let mut session = Self {
            key,
            catalog,
            confirmed: vec![origin.id.clone()],
            origin,
            destination,
            config,
            path,
            errors: 0,
            error_log: Vec::new(),
            last_error: None,
            state: SessionState::InProgress,
            timer,
            stats_reported: false,
        };
        if session.is_complete() {
            session.finish(now);
        }

        debug!(
            session = %session.key,
            origin = %session.origin.id,
            destination = %session.destination.id,
            hops = session.path.len() - 1,
            "started route"
        );
        Ok(session)
    }

    /// Rebuild a session from a persisted record.
    ///
    /// Confirmed ids that are not on the current path are dropped.
    pub fn resume(
        key: SessionKey,
        catalog: Arc<Catalog>,
        origin: &StationId,
        destination: &StationId,
        config: SessionConfig,
        record: &RouteRecord,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let mut session = Self::start(key, catalog, origin, destination, config, now)?;

        for id in &record.confirmed {
            if !session.path.contains(id) {
                warn!(
                    session = %session.key,
                    station = %id,
                    "confirmed station not on path, dropping"
                );
            } else if !session.confirmed.contains(id) {
                session.confirmed.push(id.clone());
            }
        }
        session.errors = record.errors;
        session.error_log = record.error_log.clone();

        session.timer = if session.is_complete() {
            session.state = SessionState::Won;
            Timer::finished(record.elapsed_seconds)
        } else {
            Timer::resumed(now, record.elapsed_seconds)
        };
        session.stats_reported = record.stats_reported && session.is_won();

        debug!(
            session = %session.key,
            confirmed = session.confirmed.len(),
            errors = session.errors,
            state = ?session.state,
            "resumed route"
        );
        Ok(session)
    }

    /// Check a guessed station against the path.
    pub fn guess(
        &mut self,
        id: &StationId,
        now: DateTime<Utc>,
    ) -> Result<RouteGuess, SessionError> {
        if self.state.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.catalog.get(id).is_none() {
            return Err(SessionError::UnknownStation(id.clone()));
        }
        if self.confirmed.contains(id) {
            return Ok(RouteGuess::AlreadyConfirmed);
        }

        let accepted = match self.config.route_ordering {
            RouteOrdering::PathMembership => self.path.contains(id),
            RouteOrdering::StrictOrder => self.next_expected() == Some(id),
        };

        if !accepted {
            self.errors += 1;
            self.error_log.push(id.clone());
            self.last_error = Some(id.clone());
            debug!(
                session = %self.key,
                station = %id,
                errors = self.errors,
                "wrong station"
            );
            return Ok(RouteGuess::Wrong);
        }

        self.confirmed.push(id.clone());
        self.last_error = None;
        let won = self.is_complete();
        if won {
            self.finish(now);
        }
        debug!(
            session = %self.key,
            station = %id,
            confirmed = self.confirmed.len(),
            "confirmed station"
        );
        Ok(RouteGuess::Confirmed { won })
    }

    /// Guess, then hand the new state to `store`.
    pub fn submit<S: SessionStore + ?Sized>(
        &mut self,
        id: &StationId,
        now: DateTime<Utc>,
        store: &S,
    ) -> Result<RouteGuess, SessionError> {
        let outcome = self.guess(id, now)?;
        if outcome != RouteGuess::AlreadyConfirmed {
            self.save(store, now);
        }
        Ok(outcome)
    }

    fn is_complete(&self) -> bool {
        self.confirmed.len() == self.path.len()
    }

    fn finish(&mut self, now: DateTime<Utc>) {
        self.state = SessionState::Won;
        let seconds = self.timer.stop(now);
        info!(session = %self.key, errors = self.errors, seconds, "route completed");
    }

    /// Snapshot for persistence.
    pub fn record(&self, now: DateTime<Utc>) -> RouteRecord {
        RouteRecord {
            origin: self.origin.id.clone(),
            destination: self.destination.id.clone(),
            confirmed: self.confirmed.clone(),
            won: self.is_won(),
            completed: self.state.is_over(),
            errors: self.errors,
            error_log: self.error_log.clone(),
            elapsed_seconds: self.timer.elapsed(now),
            stats_reported: self.stats_reported,
        }
    }

    /// Persist the current state. Returns true if the write succeeded.
    pub fn save<S: SessionStore + ?Sized>(&self, store: &S, now: DateTime<Utc>) -> bool {
        save_or_log(store, &self.key, &SessionRecord::Route(self.record(now)))
    }

    /// Result to report once the route is complete; attempts are errors.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.is_won().then_some(GameOutcome {
            won: true,
            attempts: self.errors,
        })
    }

    /// Report a completed route to `sink` once and persist that it was
    /// counted. Returns true only when this call delivered the report.
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

    pub fn stats_reported(&self) -> bool {
        self.stats_reported
    }

    /// The first path station not yet confirmed.
    pub fn next_expected(&self) -> Option<&StationId> {
        self.path.iter().find(|id| !self.confirmed.contains(id))
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn origin(&self) -> &Station {
        &self.origin
    }

    pub fn destination(&self) -> &Station {
        &self.destination
    }

    /// Canonical shortest path, origin and destination included.
    pub fn path(&self) -> &[StationId] {
        &self.path
    }

    /// Confirmed stations in the order they were found.
    pub fn confirmed(&self) -> &[StationId] {
        &self.confirmed
    }

    pub fn is_confirmed(&self, id: &StationId) -> bool {
        self.confirmed.contains(id)
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn error_log(&self) -> &[StationId] {
        &self.error_log
    }

    /// The last rejected station, cleared by the next confirmation.
    pub fn last_error(&self) -> Option<&StationId> {
        self.last_error.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == SessionState::Won
    }

    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        self.timer.elapsed(now)
    }

    pub fn solve_seconds(&self) -> Option<u64> {
        self.timer.solve_seconds()
    }
}
