//! Immutable station catalog.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::CatalogError;
use crate::domain::{Line, LineId, Station, StationId};
use crate::network::Network;

/// On-disk catalog document.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    lines: Vec<Line>,
    stations: Vec<Station>,
}

/// A validated snapshot of the station catalog.
///
/// Built once per session and shared read-only (typically behind an
/// `Arc`). The adjacency graph is derived at construction and never
/// updated; a changed catalog means building a new `Catalog`.
#[derive(Debug, Clone)]
pub struct Catalog {
    stations: Vec<Station>,
    lines: Vec<Line>,
    index: HashMap<StationId, usize>,
    network: Network,
}

impl Catalog {
    /// Validate stations and lines and build the network.
    ///
    /// When `lines` is empty, line references are not checked against it.
    pub fn new(stations: Vec<Station>, lines: Vec<Line>) -> Result<Self, CatalogError> {
        if stations.is_empty() {
            return Err(CatalogError::Empty);
        }

        let known_lines: HashSet<&LineId> = lines.iter().map(|l| &l.id).collect();
        let mut index = HashMap::with_capacity(stations.len());

        for (i, station) in stations.iter().enumerate() {
            if index.insert(station.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateStation(station.id.clone()));
            }
            validate_station(station, &known_lines)?;
        }

        let network = Network::build(&stations);
        info!(
            stations = stations.len(),
            lines = lines.len(),
            edges = network.edge_count(),
            "catalog loaded"
        );

        Ok(Self {
            stations,
            lines,
            index,
            network,
        })
    }

    /// Parse and validate a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.stations, file.lines)
    }

    /// Read and validate a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize the catalog back to its JSON document form.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            lines: self.lines.clone(),
            stations: self.stations.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Look up a station by id.
    pub fn get(&self, id: &StationId) -> Option<&Station> {
        self.index.get(id).map(|&i| &self.stations[i])
    }

    /// All stations, in catalog order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All lines, in catalog order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Look up a line by id.
    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// The adjacency graph derived from this catalog.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Canonical shortest route between two stations, as catalog entries.
    pub fn route(&self, from: &StationId, to: &StationId) -> Option<Vec<&Station>> {
        let ids = self.network.path(from, to)?;
        ids.iter().map(|id| self.get(id)).collect()
    }
}

fn validate_station(station: &Station, known_lines: &HashSet<&LineId>) -> Result<(), CatalogError> {
    if station.lines.is_empty() {
        return Err(CatalogError::NoLines(station.id.clone()));
    }

    let mut seen = HashSet::new();
    for line in &station.lines {
        if !seen.insert(line) {
            return Err(CatalogError::DuplicateLine {
                station: station.id.clone(),
                line: line.clone(),
            });
        }
        if !known_lines.is_empty() && !known_lines.contains(line) {
            return Err(CatalogError::UnknownLine {
                station: station.id.clone(),
                line: line.clone(),
            });
        }
    }

    for line in station.line_orders.keys() {
        if !station.serves(line) {
            return Err(CatalogError::OrderWithoutLine {
                station: station.id.clone(),
                line: line.clone(),
            });
        }
        if station.position_on(line).is_none() {
            return Err(CatalogError::MissingPosition {
                station: station.id.clone(),
                line: line.clone(),
            });
        }
    }

    Ok(())
}
