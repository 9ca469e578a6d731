//! Catalog validation and loading errors.

use crate::domain::{LineId, StationId};

/// Errors raised while loading or validating a station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no stations
    #[error("catalog has no stations")]
    Empty,

    /// Two stations share an id
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// A station serves no line
    #[error("station {0} serves no line")]
    NoLines(StationId),

    /// A station lists the same line twice
    #[error("station {station} lists line {line} more than once")]
    DuplicateLine { station: StationId, line: LineId },

    /// A station references a line the catalog does not define
    #[error("station {station} references unknown line {line}")]
    UnknownLine { station: StationId, line: LineId },

    /// A station has an order on a line it does not serve
    #[error("station {station} has an order on line {line} it does not serve")]
    OrderWithoutLine { station: StationId, line: LineId },

    /// A station has an order on a line but no position on it
    #[error("station {station} has an order on line {line} but no position")]
    MissingPosition { station: StationId, line: LineId },

    /// Reading the catalog file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document is malformed
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json {
            message: e.to_string(),
        }
    }
}
