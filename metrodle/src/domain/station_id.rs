//! Station and line identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// Rejects empty ids and ids with surrounding whitespace.
fn check_id(s: &str) -> Result<(), &'static str> {
    if s.is_empty() {
        return Err("cannot be empty");
    }
    if s.trim() != s {
        return Err("cannot have leading or trailing whitespace");
    }
    Ok(())
}

/// A stable station identifier from the catalog.
///
/// Identifiers are opaque strings. The only validation is that they are
/// non-empty and carry no surrounding whitespace.
///
/// # Examples
///
/// ```
/// use metrodle::domain::StationId;
///
/// let id = StationId::parse("204").unwrap();
/// assert_eq!(id.as_str(), "204");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse(" 204").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        check_id(s).map_err(|reason| InvalidStationId { reason })?;
        Ok(StationId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        check_id(&s).map_err(|reason| InvalidStationId { reason })?;
        Ok(StationId(s))
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit line identifier (e.g. `L1`, `L9S`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineId(String);

impl LineId {
    /// Parse a line id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        check_id(s).map_err(|reason| InvalidLineId { reason })?;
        Ok(LineId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineId {
    type Error = InvalidLineId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        check_id(&s).map_err(|reason| InvalidLineId { reason })?;
        Ok(LineId(s))
    }
}

impl From<LineId> for String {
    fn from(id: LineId) -> Self {
        id.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the input
        #[test]
        fn roundtrip(s in "[A-Za-z0-9][A-Za-z0-9 _-]{0,10}[A-Za-z0-9]") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Leading whitespace is always rejected
        #[test]
        fn leading_whitespace_rejected(s in "[ \t][A-Za-z0-9]{1,8}") {
            prop_assert!(StationId::parse(&s).is_err());
            prop_assert!(LineId::parse(&s).is_err());
        }
    }
}
