//! Loading station records and line orderings from JSON files.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::StationError;
use super::set::{LineOrderings, StationSet};
use crate::domain::{LineId, Station, StationId};
use crate::geo::Coord;

/// A station record as it appears in the stations file.
///
/// ```json
/// {"id": "MG_ROAD", "name": "Mahatma Gandhi Road", "lat": 12.9755, "lon": 77.6068, "lines": ["Purple"]}
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub lines: Vec<String>,
}

impl StationDto {
    fn into_station(self) -> Result<Station, StationError> {
        let id = StationId::parse(&self.id)?;
        let lines: BTreeSet<LineId> = self
            .lines
            .iter()
            .map(|l| LineId::parse(l))
            .collect::<Result<_, _>>()?;
        Ok(Station::new(
            id,
            self.name,
            Coord::new(self.lat, self.lon),
            lines,
        )?)
    }
}

/// Parse the stations file contents: a JSON array of [`StationDto`].
pub fn parse_stations(json: &str) -> Result<StationSet, StationError> {
    let records: Vec<StationDto> = serde_json::from_str(json)?;
    let stations = records
        .into_iter()
        .map(StationDto::into_station)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StationSet::new(stations)?)
}

/// Load and validate the stations file.
pub fn load_stations(path: impl AsRef<Path>) -> Result<StationSet, StationError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| StationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let stations = parse_stations(&contents)?;
    info!(path = %path.display(), stations = stations.len(), "loaded stations");
    Ok(stations)
}

/// Parse the line sequences file: a JSON object of line id to station ids.
///
/// Entries with a blank line or station id are dropped, since they can never
/// match a station record.
pub fn parse_line_orderings(json: &str) -> Result<LineOrderings, StationError> {
    let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;

    let mut orderings = LineOrderings::new();
    for (line, ids) in raw {
        let Ok(line_id) = LineId::parse(&line) else {
            debug!(line = %line, "skipping ordering with blank line id");
            continue;
        };
        let ids = ids
            .iter()
            .filter_map(|id| StationId::parse(id).ok())
            .collect();
        orderings.insert(line_id, ids);
    }
    Ok(orderings)
}

/// Load the line sequences file.
///
/// The file is optional: if it is missing or unreadable, every line falls
/// back to the order of the station records, so failures are logged and an
/// empty mapping is returned.
pub fn load_line_orderings(path: impl AsRef<Path>) -> LineOrderings {
    let path = path.as_ref();
    let parsed = std::fs::read_to_string(path)
        .map_err(|source| StationError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|contents| parse_line_orderings(&contents));

    match parsed {
        Ok(orderings) => {
            info!(path = %path.display(), lines = orderings.len(), "loaded line sequences");
            orderings
        }
        Err(e) => {
            warn!("error loading line sequences: {e}");
            LineOrderings::new()
        }
    }
}
