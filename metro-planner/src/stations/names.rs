//! Station lookup by display name and browsing by line.

use std::sync::Arc;

use strsim::normalized_levenshtein;

use super::set::{LineMemberships, StationSet};
use crate::domain::{LineId, Station};

/// Maximum number of suggestions returned by the fuzzy fallback.
const MAX_FUZZY_MATCHES: usize = 3;

/// Minimum similarity (0.0 to 1.0) for a name to be suggested.
const FUZZY_CUTOFF: f64 = 0.5;

/// A station matching a name query.
#[derive(Debug, Clone, PartialEq)]
pub struct StationMatch<'a> {
    pub station: &'a Station,

    /// True when the match is a spelling suggestion rather than a
    /// substring hit.
    pub fuzzy: bool,
}

/// Name search and line listings over a station set.
#[derive(Debug, Clone)]
pub struct StationLookup {
    stations: Arc<StationSet>,
    memberships: LineMemberships,
    lowercase_names: Vec<String>,
}

impl StationLookup {
    /// Create a lookup over the given stations.
    pub fn new(stations: Arc<StationSet>) -> Self {
        let memberships = stations.line_memberships();
        let lowercase_names = stations.iter().map(|s| s.name().to_lowercase()).collect();
        Self {
            stations,
            memberships,
            lowercase_names,
        }
    }

    /// Find stations whose display name contains `query`, ignoring case.
    ///
    /// Results are in station file order. When nothing contains the query,
    /// up to three similarly spelled names are suggested instead, closest
    /// first. A blank query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<StationMatch<'_>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let exact: Vec<StationMatch<'_>> = self
            .stations
            .iter()
            .zip(&self.lowercase_names)
            .filter(|(_, name)| name.contains(&query))
            .map(|(station, _)| StationMatch {
                station,
                fuzzy: false,
            })
            .take(limit)
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        let mut scored: Vec<(f64, &Station)> = self
            .stations
            .iter()
            .zip(&self.lowercase_names)
            .map(|(station, name)| (normalized_levenshtein(&query, name), station))
            .filter(|(score, _)| *score >= FUZZY_CUTOFF)
            .collect();
        // Stable sort keeps file order among equal scores
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored
            .into_iter()
            .take(MAX_FUZZY_MATCHES.min(limit))
            .map(|(_, station)| StationMatch {
                station,
                fuzzy: true,
            })
            .collect()
    }

    /// All line ids, sorted.
    pub fn lines(&self) -> impl Iterator<Item = &LineId> {
        self.memberships.keys()
    }

    /// Stations on a line, in station file order. Unknown lines have none.
    pub fn stations_on(&self, line: &LineId) -> Vec<&Station> {
        self.memberships
            .get(line)
            .map(|ids| ids.iter().filter_map(|id| self.stations.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn stations(&self) -> &StationSet {
        &self.stations
    }
}
