//! Trip statistics for a resolved path.

use crate::domain::{DomainError, StationId};
use crate::stations::StationSet;

/// Physical and passenger-facing figures for a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripSummary {
    /// Sum of great-circle distances between consecutive stations.
    pub distance_km: f64,

    /// Number of hops (stations after the origin).
    pub stops: usize,

    /// Intermediate stations served by more than one line.
    pub interchanges: usize,
}

impl TripSummary {
    /// Summary of a trip that never leaves its origin.
    pub fn empty() -> Self {
        Self {
            distance_km: 0.0,
            stops: 0,
            interchanges: 0,
        }
    }
}

/// Compute distance, stop count and interchange count for `path`.
///
/// Distances are recomputed from station coordinates rather than read from
/// the graph. The first and last stations are never counted as
/// interchanges, even when several lines serve them.
///
/// Fails only if `path` names a station missing from `stations`, which
/// cannot happen for a path found on a graph built from the same set.
pub fn analyze(path: &[StationId], stations: &StationSet) -> Result<TripSummary, DomainError> {
    let resolved = path
        .iter()
        .map(|id| stations.require(id))
        .collect::<Result<Vec<_>, _>>()?;

    let distance_km = resolved
        .windows(2)
        .map(|pair| pair[0].coord().distance_km(&pair[1].coord()))
        .sum::<f64>();

    let interchanges = match resolved.len() {
        0..=2 => 0,
        n => resolved[1..n - 1]
            .iter()
            .filter(|s| s.is_multi_line())
            .count(),
    };

    Ok(TripSummary {
        distance_km,
        stops: resolved.len().saturating_sub(1),
        interchanges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, Station};
    use crate::geo::{Coord, haversine_km};

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn station(id: &str, lon: f64, lines: &[&str]) -> Station {
        Station::new(
            sid(id),
            id,
            Coord::new(0.0, lon),
            lines.iter().map(|l| LineId::parse(l).unwrap()).collect(),
        )
        .unwrap()
    }

    fn path(ids: &[&str]) -> Vec<StationId> {
        ids.iter().map(|s| sid(s)).collect()
    }

    fn network() -> StationSet {
        StationSet::new(vec![
            station("A", 0.0, &["P", "G"]),
            station("B", 0.1, &["P"]),
            station("X", 0.2, &["P", "G"]),
            station("C", 0.3, &["G"]),
            station("D", 0.4, &["G", "Y"]),
        ])
        .unwrap()
    }

    #[test]
    fn single_station_trip() {
        let summary = analyze(&path(&["A"]), &network()).unwrap();
        assert_eq!(summary, TripSummary::empty());
    }

    #[test]
    fn empty_path() {
        let summary = analyze(&[], &network()).unwrap();
        assert_eq!(summary, TripSummary::empty());
    }

    #[test]
    fn stops_and_distance() {
        let summary = analyze(&path(&["B", "X", "C"]), &network()).unwrap();

        let hop = haversine_km(0.0, 0.1, 0.0, 0.2);
        let hop2 = haversine_km(0.0, 0.2, 0.0, 0.3);
        assert_eq!(summary.stops, 2);
        assert!((summary.distance_km - (hop + hop2)).abs() < 1e-12);
        assert_eq!(summary.interchanges, 1);
    }

    #[test]
    fn endpoints_are_not_interchanges() {
        // A and D both serve two lines but sit at the ends
        let summary = analyze(&path(&["A", "B"]), &network()).unwrap();
        assert_eq!(summary.interchanges, 0);

        let summary = analyze(&path(&["C", "D"]), &network()).unwrap();
        assert_eq!(summary.interchanges, 0);
    }

    #[test]
    fn only_intermediate_multi_line_stations_count() {
        let summary = analyze(&path(&["A", "B", "X", "C", "D"]), &network()).unwrap();
        assert_eq!(summary.stops, 4);
        assert_eq!(summary.interchanges, 1);
    }

    #[test]
    fn unknown_station_is_reported() {
        let err = analyze(&path(&["A", "Q"]), &network()).unwrap_err();
        assert_eq!(err, DomainError::UnknownStation(sid("Q")));
    }
}
