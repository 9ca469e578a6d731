//! Shared test catalog.
//!
//! ```text
//! L1:  a1 - a2 - a3 - x - a5
//! L2:            b1 - x - b3 - y
//! L3:                     c1 - y - c3
//! ```

use crate::domain::{ConnectionKind, Line, LineId, LinePosition, Station, StationId, StationType};

use super::Catalog;

pub fn id(s: &str) -> StationId {
    StationId::parse(s).unwrap()
}

pub fn line(s: &str) -> LineId {
    LineId::parse(s).unwrap()
}

/// Underground station, central on every line, no connections.
pub fn station(station_id: &str, orders: &[(&str, u32)]) -> Station {
    Station {
        id: id(station_id),
        name: format!("Station {station_id}"),
        lines: orders.iter().map(|(l, _)| line(l)).collect(),
        station_type: StationType::Underground,
        positions: orders
            .iter()
            .map(|(l, _)| (line(l), LinePosition::Central))
            .collect(),
        connections: vec![],
        line_orders: orders.iter().map(|(l, o)| (line(l), *o)).collect(),
    }
}

fn with(
    mut s: Station,
    positions: &[(&str, LinePosition)],
    station_type: StationType,
    connections: &[ConnectionKind],
) -> Station {
    for (l, p) in positions {
        s.positions.insert(line(l), *p);
    }
    s.station_type = station_type;
    s.connections = connections.to_vec();
    s
}

pub fn stations() -> Vec<Station> {
    use ConnectionKind::*;
    use LinePosition::*;
    use StationType::*;

    vec![
        with(
            station("a1", &[("L1", 1)]),
            &[("L1", Terminus)],
            Surface,
            &[Commuter],
        ),
        station("a2", &[("L1", 2)]),
        with(station("a3", &[("L1", 3)]), &[], Underground, &[Tram]),
        with(
            station("x", &[("L1", 4), ("L2", 20)]),
            &[],
            Underground,
            &[Commuter, Fgc],
        ),
        with(
            station("a5", &[("L1", 5)]),
            &[("L1", Terminus)],
            Underground,
            &[Bus],
        ),
        with(
            station("b1", &[("L2", 10)]),
            &[("L2", Terminus)],
            Underground,
            &[],
        ),
        with(station("b3", &[("L2", 30)]), &[], Underground, &[Commuter]),
        with(
            station("y", &[("L2", 40), ("L3", 2)]),
            &[("L2", Terminus)],
            Underground,
            &[Fgc],
        ),
        with(
            station("c1", &[("L3", 1)]),
            &[("L3", Terminus)],
            Elevated,
            &[],
        ),
        with(
            station("c3", &[("L3", 3)]),
            &[("L3", Terminus)],
            Underground,
            &[Airport],
        ),
    ]
}

pub fn lines() -> Vec<Line> {
    vec![
        Line::new(line("L1")).with_style("#DF2937", "#8D1B24", "#FFFFFF"),
        Line::new(line("L2")).with_style("#993C8C", "#4D1E45", "#FFFFFF"),
        Line::new(line("L3")).with_style("#3AA83E", "#216C24", "#FFFFFF"),
    ]
}

pub fn catalog() -> Catalog {
    Catalog::new(stations(), lines()).unwrap()
}
