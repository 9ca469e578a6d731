//! Game sessions.
//!
//! A session owns one player's state for one day: the target, the attempt
//! history and a solve timer. Sessions read the shared [`Catalog`] and hand
//! snapshots to a [`SessionStore`] after each attempt. Store failures are
//! logged and never interrupt play.
//!
//! [`Catalog`]: crate::catalog::Catalog

mod config;
mod error;
mod file_store;
mod metrodle;
mod route;
mod state;
mod stats;
mod store;

pub use config::{RouteOrdering, SessionConfig};
pub use error::{SessionError, StoreError};
pub use file_store::JsonFileStore;
pub use metrodle::MetrodleSession;
pub use route::{RouteGuess, RouteSession};
pub use state::SessionState;
pub use stats::{GameOutcome, MemoryStats, Stats, StatsSink, report_or_log};
pub use store::{
    GameMode, MemoryStore, MetrodleRecord, RouteRecord, SessionKey, SessionRecord, SessionStore,
    save_or_log,
};
