//! Guess comparison.
//!
//! Every attribute is compared independently; none of them short-circuits
//! another. Scoring is pure: the same two stations over the same network
//! always produce the same [`GuessResult`].

use std::collections::BTreeSet;

use tracing::trace;

use super::result::{Direction, GuessResult, MatchType};
use crate::domain::{LinePosition, Station};
use crate::network::Network;

/// Score `guessed` against `target`.
pub fn score(guessed: &Station, target: &Station, network: &Network) -> GuessResult {
    let (position_match, displayed_position) = position_match(guessed, target);
    let distance = network.distance(&guessed.id, &target.id);
    let direction = direction(guessed, target);

    let result = GuessResult {
        station: guessed.clone(),
        name_match: guessed.id == target.id,
        line_match: compare_sets(&guessed.line_set(), &target.line_set()),
        position_match,
        displayed_position,
        type_match: if guessed.station_type == target.station_type {
            MatchType::Correct
        } else {
            MatchType::Wrong
        },
        connections_match: compare_sets(&guessed.connection_set(), &target.connection_set()),
        distance,
        direction,
    };

    trace!(
        guessed = %guessed.id,
        distance,
        line = ?result.line_match,
        position = ?result.position_match,
        "scored guess"
    );
    result
}

/// Correct for identical sets, Partial for any overlap, Wrong otherwise.
fn compare_sets<T: Ord>(guessed: &BTreeSet<T>, target: &BTreeSet<T>) -> MatchType {
    if guessed == target {
        MatchType::Correct
    } else if !guessed.is_disjoint(target) {
        MatchType::Partial
    } else {
        MatchType::Wrong
    }
}

/// Position feedback and the position value to display with it.
///
/// With shared lines, a position that agrees on any shared line is Correct
/// and anything else is Wrong. Without shared lines, any position value the
/// two stations have in common, on whatever line, earns a Partial.
fn position_match(guessed: &Station, target: &Station) -> (MatchType, Option<LinePosition>) {
    let shared = guessed.shared_lines(target);

    if let Some(first) = shared.first() {
        let agreeing = shared
            .iter()
            .find(|l| guessed.position_on(l) == target.position_on(l));
        return match agreeing {
            Some(line) => (MatchType::Correct, guessed.position_on(line)),
            None => (MatchType::Wrong, guessed.position_on(first)),
        };
    }

    let guessed_values = guessed.position_values();
    let target_values = target.position_values();
    let overlap = guessed_values.iter().any(|v| target_values.contains(v));
    let shown = guessed_values.first().copied();
    if overlap {
        (MatchType::Partial, shown)
    } else {
        (MatchType::Wrong, shown)
    }
}

/// Direction along the first shared line, comparing line orders.
fn direction(guessed: &Station, target: &Station) -> Direction {
    let Some(line) = guessed.shared_lines(target).into_iter().next() else {
        return Direction::None;
    };
    match (guessed.order_on(line), target.order_on(line)) {
        (Some(g), Some(t)) if g < t => Direction::Up,
        (Some(g), Some(t)) if g > t => Direction::Down,
        _ => Direction::None,
    }
}
