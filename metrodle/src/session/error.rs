//! Session and store error types.

use crate::domain::StationId;

/// Errors from session operations.
///
/// These are the guards the scoring engine itself does not apply: a pure
/// score can be computed for anything, but a session only accepts fresh
/// guesses of known stations while it is still running.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The session is already won or out of attempts
    #[error("game is already over")]
    GameOver,

    /// The station was guessed earlier in this session
    #[error("station {0} was already guessed")]
    AlreadyGuessed(StationId),

    /// The station is not in the catalog
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// Origin and destination are not connected
    #[error("no path from {from} to {to}")]
    NoPath { from: StationId, to: StationId },
}

/// Errors from session persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be encoded or decoded
    #[error("JSON error: {message}")]
    Json { message: String },

    /// Backing store is not reachable
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json {
            message: e.to_string(),
        }
    }
}
