//! Session rules.

use serde::{Deserialize, Serialize};

/// How route guesses are checked against the canonical path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOrdering {
    /// Any unconfirmed station on the path is accepted, in any order.
    #[default]
    PathMembership,
    /// Only the next unconfirmed station in path order is accepted.
    StrictOrder,
}

/// Configuration shared by game sessions.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Guesses allowed in the station game before it is lost.
    pub max_attempts: usize,

    /// Acceptance rule for the route game.
    pub route_ordering: RouteOrdering,
}

impl SessionConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_attempts: usize, route_ordering: RouteOrdering) -> Self {
        Self {
            max_attempts,
            route_ordering,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            route_ordering: RouteOrdering::PathMembership,
        }
    }
}
