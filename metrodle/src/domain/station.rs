//! Station reference data.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LineId, StationId};

/// How a station is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationType {
    #[serde(alias = "Subterrània")]
    Underground,
    #[serde(alias = "Superfície")]
    Surface,
    #[serde(alias = "Elevada")]
    Elevated,
}

/// A station's structural position on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinePosition {
    #[serde(alias = "Extrem")]
    Terminus,
    #[serde(alias = "Central")]
    Central,
}

impl fmt::Display for LinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinePosition::Terminus => f.write_str("terminus"),
            LinePosition::Central => f.write_str("central"),
        }
    }
}

/// External interchange available at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// Suburban rail (FGC).
    #[serde(alias = "FGC")]
    Fgc,
    /// Commuter rail (Rodalies).
    #[serde(alias = "Rodalies")]
    Commuter,
    #[serde(alias = "Regional")]
    Regional,
    #[serde(alias = "AVE")]
    HighSpeed,
    #[serde(alias = "Tram")]
    Tram,
    #[serde(alias = "Bus")]
    Bus,
    #[serde(alias = "Aeropuerto")]
    Airport,
    #[serde(alias = "Funicular de Montjuïc")]
    Funicular,
    #[serde(alias = "Montjuïc")]
    CableCar,
    #[serde(alias = "Info")]
    Information,
}

/// A station in the catalog.
///
/// `lines` keeps catalog order: "first shared line" and "first position"
/// are defined relative to it. The catalog enforces that every key of
/// `line_orders` also appears in `lines` and `positions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub lines: Vec<LineId>,
    #[serde(rename = "type")]
    pub station_type: StationType,
    #[serde(default)]
    pub positions: BTreeMap<LineId, LinePosition>,
    #[serde(default)]
    pub connections: Vec<ConnectionKind>,
    #[serde(default, alias = "line_orders")]
    pub line_orders: BTreeMap<LineId, u32>,
}

impl Station {
    /// Returns true if the station is on the given line.
    pub fn serves(&self, line: &LineId) -> bool {
        self.lines.contains(line)
    }

    /// Lines shared with `other`, in this station's line order.
    pub fn shared_lines<'a>(&'a self, other: &Station) -> Vec<&'a LineId> {
        self.lines.iter().filter(|l| other.serves(l)).collect()
    }

    /// The station's order on `line`, if it has one.
    pub fn order_on(&self, line: &LineId) -> Option<u32> {
        self.line_orders.get(line).copied()
    }

    /// The station's position on `line`, if it has one.
    pub fn position_on(&self, line: &LineId) -> Option<LinePosition> {
        self.positions.get(line).copied()
    }

    /// Position values in line order, followed by any positions recorded
    /// for lines not listed in `lines`.
    pub fn position_values(&self) -> Vec<LinePosition> {
        let mut values: Vec<LinePosition> = self
            .lines
            .iter()
            .filter_map(|l| self.positions.get(l).copied())
            .collect();
        values.extend(
            self.positions
                .iter()
                .filter(|(l, _)| !self.serves(l))
                .map(|(_, p)| *p),
        );
        values
    }

    /// Connections as a set.
    pub fn connection_set(&self) -> BTreeSet<ConnectionKind> {
        self.connections.iter().copied().collect()
    }

    /// Lines as a set.
    pub fn line_set(&self) -> BTreeSet<&LineId> {
        self.lines.iter().collect()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
