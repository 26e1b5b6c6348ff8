//! Data transfer objects for web requests and responses.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::planner::RouteResult;
use crate::stations::StationSet;

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Part of a station name
    pub q: String,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResult {
    /// Station details
    #[serde(flatten)]
    pub station: StationInfo,

    /// Whether this is a spelling suggestion
    pub fuzzy: bool,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationSearchResult>,
}

/// A line and its stations.
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// Line id
    pub id: String,

    /// Stations in station file order
    pub stations: Vec<StationInfo>,
}

/// Response listing all lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Origin station id
    pub from: String,

    /// Destination station id
    pub to: String,
}

/// Station information for display.
#[derive(Debug, Clone, Serialize)]
pub struct StationInfo {
    /// Station id
    pub id: String,

    /// Display name
    pub name: String,

    /// Lines serving the station
    pub lines: Vec<String>,
}

impl StationInfo {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().to_string(),
            name: station.name().to_string(),
            lines: station.lines().iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// A planned route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDetail {
    /// Stations in travel order
    pub stations: Vec<StationInfo>,

    /// Number of hops
    pub stops: usize,

    /// Intermediate stations where lines meet
    pub interchanges: usize,

    /// Total great-circle distance
    pub distance_km: f64,

    /// Estimated in-train time in seconds
    pub duration_secs: f64,

    /// Whole minutes of in-train time
    pub duration_mins: u64,

    /// Remaining whole seconds after `duration_mins`
    pub duration_rem_secs: u64,

    /// Departure clock time (HH:MM)
    pub departure_time: String,

    /// Estimated arrival clock time (HH:MM)
    pub arrival_time: String,

    /// Stations finalized during the search
    pub settled: usize,
}

impl RouteDetail {
    /// Build from a planned route, leaving at `departure`.
    pub fn from_result(result: &RouteResult, stations: &StationSet, departure: NaiveTime) -> Self {
        let (duration_mins, duration_rem_secs) = result.minutes_and_seconds();
        let arrival = departure + result.in_train_time();

        Self {
            stations: result
                .path
                .iter()
                .filter_map(|id| stations.get(id))
                .map(StationInfo::from_station)
                .collect(),
            stops: result.trip.stops,
            interchanges: result.trip.interchanges,
            distance_km: result.trip.distance_km,
            duration_secs: result.total_secs,
            duration_mins,
            duration_rem_secs,
            departure_time: departure.format("%H:%M").to_string(),
            arrival_time: arrival.format("%H:%M").to_string(),
            settled: result.settled,
        }
    }
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    pub origin: StationInfo,
    pub destination: StationInfo,

    /// False when the stations are not connected
    pub found: bool,

    /// The route, when one exists
    pub route: Option<RouteDetail>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId};
    use crate::geo::Coord;
    use crate::planner::TripSummary;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn stations() -> StationSet {
        let station = |id: &str, name: &str, lines: &[&str]| {
            Station::new(
                sid(id),
                name,
                Coord::new(0.0, 0.0),
                lines.iter().map(|l| LineId::parse(l).unwrap()).collect(),
            )
            .unwrap()
        };
        StationSet::new(vec![
            station("A", "Alpha", &["Purple"]),
            station("B", "Beta", &["Purple", "Green"]),
        ])
        .unwrap()
    }

    fn result(total_secs: f64) -> RouteResult {
        RouteResult {
            path: vec![sid("A"), sid("B")],
            total_secs,
            trip: TripSummary {
                distance_km: 1.25,
                stops: 1,
                interchanges: 0,
            },
            settled: 2,
        }
    }

    #[test]
    fn station_info_lists_lines_sorted() {
        let set = stations();
        let info = StationInfo::from_station(set.get(&sid("B")).unwrap());

        assert_eq!(info.id, "B");
        assert_eq!(info.name, "Beta");
        assert_eq!(info.lines, vec!["Green", "Purple"]);
    }

    #[test]
    fn route_detail_times() {
        let departure = NaiveTime::from_hms_opt(9, 58, 0).unwrap();
        let detail = RouteDetail::from_result(&result(185.7), &stations(), departure);

        assert_eq!(detail.duration_mins, 3);
        assert_eq!(detail.duration_rem_secs, 5);
        assert_eq!(detail.departure_time, "09:58");
        assert_eq!(detail.arrival_time, "10:01");
        assert_eq!(detail.stations.len(), 2);
        assert_eq!(detail.stops, 1);
    }

    #[test]
    fn arrival_wraps_past_midnight() {
        let departure = NaiveTime::from_hms_opt(23, 55, 0).unwrap();
        let detail = RouteDetail::from_result(&result(600.0), &stations(), departure);

        assert_eq!(detail.arrival_time, "00:05");
    }

    #[test]
    fn search_result_flattens_station() {
        let set = stations();
        let result = StationSearchResult {
            station: StationInfo::from_station(set.get(&sid("A")).unwrap()),
            fuzzy: false,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["id"], "A");
        assert_eq!(json["name"], "Alpha");
        assert_eq!(json["fuzzy"], false);
    }
}
