//! Domain types for the station guessing game.
//!
//! This module contains the reference data model: stations, lines and
//! their identifiers. Identifiers enforce their invariants at construction
//! time, so code that receives them can trust their validity.

mod line;
mod station;
mod station_id;

pub use line::{Line, LineStyle};
pub use station::{ConnectionKind, LinePosition, Station, StationType};
pub use station_id::{InvalidLineId, InvalidStationId, LineId, StationId};
