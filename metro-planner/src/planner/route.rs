//! Route planning: search plus trip statistics.

use chrono::Duration;

use super::search::{SearchError, shortest_path};
use super::trip::{TripSummary, analyze};
use crate::domain::StationId;
use crate::network::Graph;
use crate::stations::StationSet;

/// A planned route with its derived statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Stations visited, origin first.
    pub path: Vec<StationId>,

    /// Estimated in-train time in seconds.
    pub total_secs: f64,

    /// Distance, stop count and interchanges.
    pub trip: TripSummary,

    /// Stations finalized while searching.
    pub settled: usize,
}

impl RouteResult {
    /// In-train time, truncated to whole seconds.
    pub fn in_train_time(&self) -> Duration {
        Duration::seconds(self.total_secs as i64)
    }

    /// In-train time split into whole minutes and the remaining whole seconds.
    pub fn minutes_and_seconds(&self) -> (u64, u64) {
        let secs = self.total_secs.max(0.0);
        ((secs / 60.0) as u64, (secs % 60.0) as u64)
    }
}

/// Plans routes over a network built from a station set.
///
/// Both references must come from the same data: the graph is expected to
/// have been built from `stations`.
pub struct RoutePlanner<'a> {
    graph: &'a Graph,
    stations: &'a StationSet,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a Graph, stations: &'a StationSet) -> Self {
        Self { graph, stations }
    }

    /// Plan the fastest route from `origin` to `destination`.
    ///
    /// `Ok(None)` means the stations are not connected.
    pub fn plan(
        &self,
        origin: &StationId,
        destination: &StationId,
    ) -> Result<Option<RouteResult>, SearchError> {
        let Some(route) = shortest_path(self.graph, origin, destination)? else {
            return Ok(None);
        };

        let trip = analyze(&route.path, self.stations)?;

        Ok(Some(RouteResult {
            path: route.path,
            total_secs: route.total_secs,
            trip,
            settled: route.settled,
        }))
    }
}
