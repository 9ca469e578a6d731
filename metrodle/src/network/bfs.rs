//! Breadth-first shortest paths.
//!
//! Every edge costs one hop, so BFS discovers minimal hop counts. Among
//! equal-length paths the one discovered first wins; neighbour iteration is
//! ordered, so a given network always yields the same path.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use super::graph::Network;
use crate::domain::StationId;

/// Distance reported when two stations are not connected.
///
/// Well above any hop count a real network produces; the UI shows it as-is.
pub const UNREACHABLE: u32 = 99;

impl Network {
    /// Hop count between two stations.
    ///
    /// Returns 0 for `a == b` and [`UNREACHABLE`] when no path exists,
    /// including when either station is unknown.
    pub fn distance(&self, from: &StationId, to: &StationId) -> u32 {
        match self.path(from, to) {
            Some(path) => (path.len() - 1) as u32,
            None => UNREACHABLE,
        }
    }

    /// Shortest sequence of stations from `from` to `to`, both included.
    ///
    /// Returns `None` when the stations are disconnected or unknown.
    pub fn path(&self, from: &StationId, to: &StationId) -> Option<Vec<StationId>> {
        if !self.contains(from) || !self.contains(to) {
            debug!(from = %from, to = %to, "path requested for unknown station");
            return None;
        }
        if from == to {
            return Some(vec![from.clone()]);
        }

        let mut parents: HashMap<&StationId, &StationId> = HashMap::new();
        let mut queue: VecDeque<&StationId> = VecDeque::new();
        parents.insert(from, from);
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            for next in self.neighbors(current) {
                if parents.contains_key(next) {
                    continue;
                }
                parents.insert(next, current);
                if next == to {
                    return Some(reconstruct(&parents, from, to));
                }
                queue.push_back(next);
            }
        }

        trace!(from = %from, to = %to, visited = parents.len(), "no path");
        None
    }
}

/// Walk parent links back from `to`, then reverse.
fn reconstruct(
    parents: &HashMap<&StationId, &StationId>,
    from: &StationId,
    to: &StationId,
) -> Vec<StationId> {
    let mut path = vec![to.clone()];
    let mut current = to;
    while current != from {
        match parents.get(current) {
            Some(prev) => {
                current = *prev;
                path.push(current.clone());
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{id, station, stations};

    fn network() -> Network {
        Network::build(&stations())
    }

    #[test]
    fn distance_to_self_is_zero() {
        let net = network();
        assert_eq!(net.distance(&id("a1"), &id("a1")), 0);
        assert_eq!(net.path(&id("a1"), &id("a1")), Some(vec![id("a1")]));
    }

    #[test]
    fn distance_along_one_line() {
        let net = network();
        assert_eq!(net.distance(&id("a1"), &id("a3")), 2);
        assert_eq!(net.distance(&id("a1"), &id("a5")), 4);
    }

    #[test]
    fn distance_across_interchange() {
        // a1 a2 a3 x | b3 y | c3
        let net = network();
        assert_eq!(net.distance(&id("a1"), &id("c3")), 6);
    }

    #[test]
    fn path_includes_both_endpoints() {
        let net = network();
        let path = net.path(&id("a1"), &id("c3")).unwrap();
        assert_eq!(
            path,
            vec![
                id("a1"),
                id("a2"),
                id("a3"),
                id("x"),
                id("b3"),
                id("y"),
                id("c3")
            ]
        );
    }

    #[test]
    fn disconnected_stations_are_unreachable() {
        let mut all = stations();
        all.push(station("island", &[("L9", 1)]));
        let net = Network::build(&all);
        assert_eq!(net.distance(&id("a1"), &id("island")), UNREACHABLE);
        assert!(net.path(&id("a1"), &id("island")).is_none());
    }

    #[test]
    fn unknown_station_is_unreachable() {
        let net = network();
        assert_eq!(net.distance(&id("a1"), &id("ghost")), UNREACHABLE);
        assert_eq!(net.distance(&id("ghost"), &id("ghost")), UNREACHABLE);
        assert!(net.path(&id("ghost"), &id("a1")).is_none());
    }

    #[test]
    fn path_is_deterministic() {
        let net = network();
        let first = net.path(&id("b1"), &id("c1"));
        for _ in 0..10 {
            assert_eq!(net.path(&id("b1"), &id("c1")), first);
        }
    }

    #[test]
    fn consecutive_path_entries_are_adjacent() {
        let net = network();
        let path = net.path(&id("a5"), &id("c1")).unwrap();
        for pair in path.windows(2) {
            assert!(net.is_adjacent(&pair[0], &pair[1]));
        }
    }
}
