//! Session persistence boundary.
//!
//! Sessions hand their state to a [`SessionStore`] after every attempt.
//! The store is a collaborator: a failed write is logged and play goes on
//! with the in-memory state.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::StoreError;
use crate::domain::StationId;

/// Which game a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Metrodle,
    Route,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Metrodle => f.write_str("metrodle"),
            GameMode::Route => f.write_str("route"),
        }
    }
}

/// Identifies one player's session for one date and mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub user: String,
    pub date: NaiveDate,
    pub mode: GameMode,
}

impl SessionKey {
    /// Create a new key.
    pub fn new(user: impl Into<String>, date: NaiveDate, mode: GameMode) -> Self {
        Self {
            user: user.into(),
            date,
            mode,
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.user, self.date, self.mode)
    }
}

/// Persisted state of a station-guessing session.
///
/// Only attempt ids are stored; feedback is recomputed on resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetrodleRecord {
    pub target: StationId,
    pub attempts: Vec<StationId>,
    pub won: bool,
    pub completed: bool,
    pub elapsed_seconds: u64,
    /// The finished game has been counted in the player's stats.
    #[serde(default)]
    pub stats_reported: bool,
}

/// Persisted state of a route session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin: StationId,
    pub destination: StationId,
    pub confirmed: Vec<StationId>,
    pub won: bool,
    pub completed: bool,
    pub errors: u32,
    pub error_log: Vec<StationId>,
    pub elapsed_seconds: u64,
    #[serde(default)]
    pub stats_reported: bool,
}

/// A persisted session of either mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SessionRecord {
    Metrodle(MetrodleRecord),
    Route(RouteRecord),
}

/// Key-value storage for session records.
pub trait SessionStore {
    /// Load the record for `key`, if one was saved.
    fn load(&self, key: &SessionKey) -> Result<Option<SessionRecord>, StoreError>;

    /// Save (replace) the record for `key`.
    fn save(&self, key: &SessionKey, record: &SessionRecord) -> Result<(), StoreError>;
}

/// Save and log failure instead of propagating it.
///
/// Returns true if the write succeeded.
pub fn save_or_log<S: SessionStore + ?Sized>(
    store: &S,
    key: &SessionKey,
    record: &SessionRecord,
) -> bool {
    match store.save(key, record) {
        Ok(()) => true,
        Err(e) => {
            warn!(session = %key, error = %e, "failed to persist session, continuing");
            false
        }
    }
}

/// In-memory store, for tests and offline play.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<SessionKey, SessionRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &SessionKey) -> Result<Option<SessionRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store poisoned".to_string()))?;
        Ok(records.get(key).cloned())
    }

    fn save(&self, key: &SessionKey, record: &SessionRecord) -> Result<(), StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store poisoned".to_string()))?;
        records.insert(key.clone(), record.clone());
        Ok(())
    }
}
