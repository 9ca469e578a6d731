//! Adjacency between stations.
//!
//! Two stations are adjacent when they are consecutive in line order on a
//! line they both serve. The structure is built once per catalog and never
//! mutated afterwards.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::domain::{LineId, Station, StationId};

/// Undirected, unweighted station graph.
///
/// Neighbour sets are ordered so that traversal order, and therefore BFS
/// tie-breaking, is deterministic for a given catalog.
#[derive(Debug, Clone, Default)]
pub struct Network {
    neighbors: HashMap<StationId, BTreeSet<StationId>>,
}

impl Network {
    /// Build the adjacency structure from a station list.
    ///
    /// Stations are grouped by line and sorted by their order on that line;
    /// every consecutive pair is linked in both directions. A station that
    /// serves a line without an order on it contributes no edge for that
    /// line. Stations sharing several lines get a single edge.
    pub fn build(stations: &[Station]) -> Self {
        let mut by_line: BTreeMap<&LineId, Vec<(u32, &StationId)>> = BTreeMap::new();
        let mut neighbors: HashMap<StationId, BTreeSet<StationId>> = HashMap::new();

        for station in stations {
            neighbors.entry(station.id.clone()).or_default();
            for line in &station.lines {
                if let Some(order) = station.order_on(line) {
                    by_line.entry(line).or_default().push((order, &station.id));
                }
            }
        }

        for (line, members) in &mut by_line {
            members.sort();
            for pair in members.windows(2) {
                let (a, b) = (pair[0].1, pair[1].1);
                if a == b {
                    continue;
                }
                neighbors.entry(a.clone()).or_default().insert(b.clone());
                neighbors.entry(b.clone()).or_default().insert(a.clone());
            }
            debug!(line = %line, stations = members.len(), "linked line");
        }

        Self { neighbors }
    }

    /// Neighbours of a station. Unknown stations have none.
    pub fn neighbors(&self, id: &StationId) -> impl Iterator<Item = &StationId> {
        self.neighbors.get(id).into_iter().flatten()
    }

    /// Returns true if the two stations are directly linked.
    pub fn is_adjacent(&self, a: &StationId, b: &StationId) -> bool {
        self.neighbors.get(a).is_some_and(|n| n.contains(b))
    }

    /// Returns true if the station is part of the graph.
    pub fn contains(&self, id: &StationId) -> bool {
        self.neighbors.contains_key(id)
    }

    /// Number of stations in the graph.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{id, station, stations};

    #[test]
    fn consecutive_stations_are_adjacent() {
        let net = Network::build(&stations());
        assert!(net.is_adjacent(&id("a1"), &id("a2")));
        assert!(net.is_adjacent(&id("a2"), &id("a1")));
        assert!(!net.is_adjacent(&id("a1"), &id("a3")));
    }

    #[test]
    fn order_gaps_still_link() {
        // b-line orders are 10, 20, 30...
        let net = Network::build(&stations());
        assert!(net.is_adjacent(&id("b1"), &id("x")));
    }

    #[test]
    fn shared_lines_do_not_duplicate_edges() {
        let twin_a = station("p", &[("L1", 1), ("L2", 1)]);
        let twin_b = station("q", &[("L1", 2), ("L2", 2)]);
        let net = Network::build(&[twin_a, twin_b]);
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.neighbors(&id("p")).count(), 1);
    }

    #[test]
    fn station_without_lines_is_isolated() {
        let mut lonely = station("z", &[]);
        lonely.lines.clear();
        let net = Network::build(&[lonely, station("a", &[("L1", 1)])]);
        assert!(net.contains(&id("z")));
        assert_eq!(net.neighbors(&id("z")).count(), 0);
        assert_eq!(net.edge_count(), 0);
    }

    #[test]
    fn missing_order_contributes_no_edge() {
        let a = station("a", &[("L1", 1)]);
        let mut b = station("b", &[("L1", 2)]);
        b.line_orders.clear();
        let c = station("c", &[("L1", 3)]);
        let net = Network::build(&[a, b, c]);
        assert!(net.is_adjacent(&id("a"), &id("c")));
        assert_eq!(net.neighbors(&id("b")).count(), 0);
    }

    #[test]
    fn unknown_station_has_no_neighbors() {
        let net = Network::build(&stations());
        assert!(!net.contains(&id("nope")));
        assert_eq!(net.neighbors(&id("nope")).count(), 0);
    }

    #[test]
    fn empty_catalog() {
        let net = Network::build(&[]);
        assert!(net.is_empty());
        assert_eq!(net.edge_count(), 0);
    }
}
