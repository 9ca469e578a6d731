//! Per-attempt feedback types.

use serde::{Deserialize, Serialize};

use crate::domain::{LinePosition, Station};

/// Tri-valued feedback for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Correct,
    Partial,
    Wrong,
}

/// Which way along the first shared line the target lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Target has a higher order on the line than the guess.
    Up,
    /// Target has a lower order on the line than the guess.
    Down,
    /// Same order, or no shared line to compare on.
    None,
}

/// Feedback for one guess against the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    pub station: Station,
    pub name_match: bool,
    pub line_match: MatchType,
    pub position_match: MatchType,
    /// Position value shown next to the position feedback.
    pub displayed_position: Option<LinePosition>,
    pub type_match: MatchType,
    pub connections_match: MatchType,
    /// Hops between guess and target.
    pub distance: u32,
    pub direction: Direction,
}

impl GuessResult {
    /// Returns true if this guess found the target.
    pub fn is_win(&self) -> bool {
        self.name_match
    }
}
