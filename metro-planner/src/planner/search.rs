//! Minimum-time route search.
//!
//! Dijkstra over the network graph. Edge costs are never negative, so the
//! first time the destination leaves the frontier its path is optimal.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::domain::{DomainError, StationId};
use crate::network::Graph;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination is not a station of the graph
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// Graph and station set disagree about the stations on a path
    #[error("inconsistent network data: {0}")]
    InconsistentData(#[from] DomainError),
}

/// A minimum-time path between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Stations visited, origin first and destination last.
    pub path: Vec<StationId>,

    /// Sum of edge costs along the path, in seconds.
    pub total_secs: f64,

    /// Number of stations finalized during the search.
    pub settled: usize,
}

impl Route {
    pub fn origin(&self) -> &StationId {
        &self.path[0]
    }

    pub fn destination(&self) -> &StationId {
        &self.path[self.path.len() - 1]
    }
}

/// A candidate on the search frontier.
///
/// `via` holds the stations visited before `station`, origin first.
#[derive(Debug, Clone)]
struct FrontierEntry {
    cost: f64,
    station: StationId,
    via: Vec<StationId>,
}

/// Total order used both to pick the next candidate and to break ties.
///
/// 1. cumulative cost, ascending (`f64::total_cmp`, so the order is total)
/// 2. station id, ascending
/// 3. the preceding path, compared element-wise; a proper prefix sorts first
///
/// Among several equal-cost shortest paths this always selects the same one.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.station.cmp(&other.station))
            .then_with(|| self.via.cmp(&other.via))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Find the minimum-time route from `origin` to `destination`.
///
/// Returns `Ok(None)` when the two stations lie in disconnected parts of the
/// network. Asking for a route from a station to itself yields a
/// single-station path with zero cost.
///
/// A neighbour is queued whenever the new cost ties or beats its best known
/// cost, so every equal-cost alternative competes on the frontier and the
/// winner depends only on the [`FrontierEntry`] order, not on edge order.
pub fn shortest_path(
    graph: &Graph,
    origin: &StationId,
    destination: &StationId,
) -> Result<Option<Route>, SearchError> {
    for id in [origin, destination] {
        if !graph.contains(id) {
            return Err(SearchError::UnknownStation(id.clone()));
        }
    }

    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    let mut finalized: HashSet<StationId> = HashSet::new();
    let mut best: HashMap<StationId, f64> = HashMap::new();

    best.insert(origin.clone(), 0.0);
    frontier.push(Reverse(FrontierEntry {
        cost: 0.0,
        station: origin.clone(),
        via: Vec::new(),
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        // Stale entry for a station already settled at a lower cost
        if finalized.contains(&entry.station) {
            continue;
        }
        finalized.insert(entry.station.clone());

        let FrontierEntry {
            cost,
            station,
            via: mut path,
        } = entry;
        path.push(station.clone());

        if &station == destination {
            debug!(
                origin = %origin,
                destination = %destination,
                cost_secs = cost,
                settled = finalized.len(),
                "route found"
            );
            return Ok(Some(Route {
                path,
                total_secs: cost,
                settled: finalized.len(),
            }));
        }

        for edge in graph.edges_from(&station) {
            if finalized.contains(&edge.to) {
                continue;
            }
            let next_cost = cost + edge.time_cost;
            let competitive = best
                .get(&edge.to)
                .is_none_or(|&known| next_cost <= known);
            if competitive {
                best.insert(edge.to.clone(), next_cost);
                frontier.push(Reverse(FrontierEntry {
                    cost: next_cost,
                    station: edge.to.clone(),
                    via: path.clone(),
                }));
            }
        }
    }

    debug!(
        origin = %origin,
        destination = %destination,
        settled = finalized.len(),
        "no route"
    );
    Ok(None)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
