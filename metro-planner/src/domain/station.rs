//! Station identifiers and station records.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::line::LineId;
use crate::geo::Coord;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A station identifier from the network data.
///
/// Identifiers are opaque strings (e.g. `"MG_ROAD"`). They must be non-blank
/// and carry no surrounding whitespace. Ordering is plain lexicographic byte
/// order, which the route search relies on for tie-breaking.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationId;
///
/// let id = StationId::parse("MG_ROAD").unwrap();
/// assert_eq!(id.as_str(), "MG_ROAD");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse(" MG_ROAD").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        Self::try_from(s.to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.trim().is_empty() {
            return Err(InvalidStationId {
                reason: "must not be blank",
            });
        }
        if s.trim() != s {
            return Err(InvalidStationId {
                reason: "must not have leading or trailing whitespace",
            });
        }
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

/// A station in the network.
///
/// Every station belongs to at least one line. Stations serving more than
/// one line are interchanges when they appear in the middle of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    id: StationId,
    name: String,
    coord: Coord,
    lines: BTreeSet<LineId>,
}

impl Station {
    /// Create a station, rejecting one that belongs to no line.
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        coord: Coord,
        lines: BTreeSet<LineId>,
    ) -> Result<Self, DomainError> {
        if lines.is_empty() {
            return Err(DomainError::NoLines(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            coord,
            lines,
        })
    }

    pub fn id(&self) -> &StationId {
        &self.id
    }

    /// Display name, e.g. "Mahatma Gandhi Road".
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Lines serving this station, in line-id order.
    pub fn lines(&self) -> &BTreeSet<LineId> {
        &self.lines
    }

    /// Whether the station is served by the given line.
    pub fn serves(&self, line: &LineId) -> bool {
        self.lines.contains(line)
    }

    /// Whether more than one line calls here.
    pub fn is_multi_line(&self) -> bool {
        self.lines.len() > 1
    }
}
