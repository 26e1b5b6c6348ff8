//! Cost-weighted adjacency between consecutive stations of each line.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use super::config::CostModel;
use crate::domain::{Station, StationId};
use crate::stations::{LineMemberships, LineOrderings, StationSet};

/// A directed hop from one station to the next on some line.
///
/// Every edge has a mirror in the opposite direction carrying the same cost
/// and distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub to: StationId,

    /// Ride time plus dwell, in seconds. Never negative.
    pub time_cost: f64,

    /// Great-circle distance between the two stations.
    pub distance_km: f64,
}

/// The travel network.
///
/// Built once from station data and never mutated afterwards. Every station
/// of the source [`StationSet`] is present; stations not adjacent to any
/// other on some line simply have no outgoing edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<StationId, Vec<Edge>>,
}

impl Graph {
    /// Build the graph from stations grouped by line.
    ///
    /// For each line, the explicit ordering is used when one exists (keeping
    /// only ids that are actually members of the line), otherwise the
    /// membership order. Each consecutive pair is joined in both directions.
    /// Lines left with fewer than two stations contribute nothing.
    pub fn build(
        stations: &StationSet,
        memberships: &LineMemberships,
        orderings: &LineOrderings,
        cost: &CostModel,
    ) -> Self {
        let mut adjacency: HashMap<StationId, Vec<Edge>> = stations
            .iter()
            .map(|s| (s.id().clone(), Vec::new()))
            .collect();

        for (line, members) in memberships {
            let member_set: HashSet<&StationId> = members.iter().collect();
            let sequence: Vec<&StationId> = match orderings.get(line) {
                Some(explicit) => explicit
                    .iter()
                    .filter(|id| member_set.contains(id))
                    .collect(),
                None => members.iter().collect(),
            };
            let ordered: Vec<&Station> = sequence
                .into_iter()
                .filter_map(|id| stations.get(id))
                .collect();

            if ordered.len() < 2 {
                debug!(line = %line, stations = ordered.len(), "line has no hops");
                continue;
            }

            for pair in ordered.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let distance_km = a.coord().distance_km(&b.coord());
                let time_cost = cost.time_cost(distance_km);

                adjacency.entry(a.id().clone()).or_default().push(Edge {
                    to: b.id().clone(),
                    time_cost,
                    distance_km,
                });
                adjacency.entry(b.id().clone()).or_default().push(Edge {
                    to: a.id().clone(),
                    time_cost,
                    distance_km,
                });
            }
            debug!(line = %line, hops = ordered.len() - 1, "linked line");
        }

        let graph = Self { adjacency };
        info!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "built network graph"
        );
        graph
    }

    /// Outgoing edges of a station. Unknown stations have none.
    pub fn edges_from(&self, id: &StationId) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the station is part of the graph (possibly isolated).
    pub fn contains(&self, id: &StationId) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges (each physical hop counts twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over every station and its outgoing edges.
    pub fn iter(&self) -> impl Iterator<Item = (&StationId, &[Edge])> {
        self.adjacency.iter().map(|(id, edges)| (id, edges.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineId;
    use crate::geo::{Coord, haversine_km};

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn line(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    fn station(id: &str, lat: f64, lon: f64, lines: &[&str]) -> Station {
        Station::new(
            sid(id),
            id,
            Coord::new(lat, lon),
            lines.iter().map(|l| line(l)).collect(),
        )
        .unwrap()
    }

    fn build(stations: Vec<Station>, orderings: LineOrderings) -> Graph {
        let set = StationSet::new(stations).unwrap();
        Graph::build(
            &set,
            &set.line_memberships(),
            &orderings,
            &CostModel::default(),
        )
    }

    fn neighbours(graph: &Graph, id: &str) -> Vec<String> {
        let mut n: Vec<String> = graph
            .edges_from(&sid(id))
            .iter()
            .map(|e| e.to.to_string())
            .collect();
        n.sort();
        n
    }

    #[test]
    fn empty_input_gives_empty_graph() {
        let graph = build(Vec::new(), LineOrderings::new());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn consecutive_stations_only() {
        let graph = build(
            vec![
                station("A", 0.0, 0.0, &["P"]),
                station("B", 0.0, 0.1, &["P"]),
                station("C", 0.0, 0.2, &["P"]),
            ],
            LineOrderings::new(),
        );

        assert_eq!(neighbours(&graph, "A"), vec!["B"]);
        assert_eq!(neighbours(&graph, "B"), vec!["A", "C"]);
        assert_eq!(neighbours(&graph, "C"), vec!["B"]);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn edge_cost_from_distance() {
        let graph = build(
            vec![
                station("A", 0.0, 0.0, &["P"]),
                station("B", 0.0, 0.1, &["P"]),
            ],
            LineOrderings::new(),
        );

        let d = haversine_km(0.0, 0.0, 0.0, 0.1);
        let edge = &graph.edges_from(&sid("A"))[0];
        assert_eq!(edge.to, sid("B"));
        assert_eq!(edge.distance_km, d);
        assert_eq!(edge.time_cost, (d / 35.0) * 3600.0 + 30.0);
    }

    #[test]
    fn explicit_ordering_wins_over_encounter_order() {
        let mut orderings = LineOrderings::new();
        orderings.insert(line("P"), vec![sid("A"), sid("C"), sid("B")]);

        let graph = build(
            vec![
                station("A", 0.0, 0.0, &["P"]),
                station("B", 0.0, 0.1, &["P"]),
                station("C", 0.0, 0.2, &["P"]),
            ],
            orderings,
        );

        assert_eq!(neighbours(&graph, "A"), vec!["C"]);
        assert_eq!(neighbours(&graph, "C"), vec!["A", "B"]);
        assert_eq!(neighbours(&graph, "B"), vec!["C"]);
    }

    #[test]
    fn ordering_filters_non_members_and_unknown_ids() {
        let mut orderings = LineOrderings::new();
        // G is on another line, X does not exist at all
        orderings.insert(line("P"), vec![sid("A"), sid("G"), sid("X"), sid("B")]);

        let graph = build(
            vec![
                station("A", 0.0, 0.0, &["P"]),
                station("B", 0.0, 0.1, &["P"]),
                station("G", 1.0, 1.0, &["Green"]),
            ],
            orderings,
        );

        assert_eq!(neighbours(&graph, "A"), vec!["B"]);
        assert!(neighbours(&graph, "G").is_empty());
        assert!(!graph.contains(&sid("X")));
    }

    #[test]
    fn ordering_that_omits_members_leaves_them_isolated() {
        let mut orderings = LineOrderings::new();
        orderings.insert(line("P"), vec![sid("A"), sid("B")]);

        let graph = build(
            vec![
                station("A", 0.0, 0.0, &["P"]),
                station("B", 0.0, 0.1, &["P"]),
                station("C", 0.0, 0.2, &["P"]),
            ],
            orderings,
        );

        assert!(graph.contains(&sid("C")));
        assert!(graph.edges_from(&sid("C")).is_empty());
    }

    #[test]
    fn single_station_lines_are_isolated() {
        let graph = build(
            vec![
                station("A", 0.0, 0.0, &["P"]),
                station("Z", 5.0, 5.0, &["Solo"]),
            ],
            LineOrderings::new(),
        );

        assert_eq!(graph.station_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.contains(&sid("Z")));
    }

    #[test]
    fn interchange_joins_two_lines() {
        let graph = build(
            vec![
                station("A", 0.0, 0.0, &["P"]),
                station("X", 0.0, 0.1, &["P", "G"]),
                station("B", 0.0, 0.2, &["P"]),
                station("C", 0.1, 0.1, &["G"]),
            ],
            LineOrderings::new(),
        );

        assert_eq!(neighbours(&graph, "X"), vec!["A", "B", "C"]);
    }

    #[test]
    fn unknown_station_has_no_edges() {
        let graph = build(vec![station("A", 0.0, 0.0, &["P"])], LineOrderings::new());
        assert!(graph.edges_from(&sid("nope")).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::LineId;
    use crate::geo::Coord;
    use proptest::prelude::*;

    /// Up to 8 stations, each on 1-2 of three lines, at random coordinates.
    fn arb_stations() -> impl Strategy<Value = Vec<Station>> {
        prop::collection::vec(
            (
                -1.0f64..1.0,
                -1.0f64..1.0,
                prop::sample::subsequence(vec!["P", "G", "Y"], 1..=2),
            ),
            0..8,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (lat, lon, lines))| {
                    Station::new(
                        StationId::parse(&format!("S{i}")).unwrap(),
                        format!("Station {i}"),
                        Coord::new(lat, lon),
                        lines.into_iter().map(|l| LineId::parse(l).unwrap()).collect(),
                    )
                    .unwrap()
                })
                .collect()
        })
    }

    proptest! {
        /// Every edge has a mirror with the same cost and distance
        #[test]
        fn edges_are_symmetric(stations in arb_stations()) {
            let set = StationSet::new(stations).unwrap();
            let graph = Graph::build(
                &set,
                &set.line_memberships(),
                &LineOrderings::new(),
                &CostModel::default(),
            );

            for (from, edges) in graph.iter() {
                for edge in edges {
                    let mirrored = graph.edges_from(&edge.to).iter().any(|back| {
                        &back.to == from
                            && back.time_cost == edge.time_cost
                            && back.distance_km == edge.distance_km
                    });
                    prop_assert!(mirrored, "no mirror for {} -> {}", from, edge.to);
                }
            }
        }

        /// Every station is present and costs are at least the dwell time
        #[test]
        fn covers_all_stations(stations in arb_stations()) {
            let set = StationSet::new(stations).unwrap();
            let model = CostModel::default();
            let graph = Graph::build(&set, &set.line_memberships(), &LineOrderings::new(), &model);

            prop_assert_eq!(graph.station_count(), set.len());
            for (_, edges) in graph.iter() {
                for edge in edges {
                    prop_assert!(edge.time_cost >= model.dwell_secs);
                }
            }
        }
    }
}
