//! Askama templates for the web frontend.

use askama::Template;

use super::dto::{RouteDetail, StationInfo};
use crate::stations::StationLookup;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route form and line listings.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub lines: Vec<LineView>,
}

impl IndexTemplate {
    /// Build the page from every line of the network.
    pub fn from_lookup(lookup: &StationLookup) -> Self {
        let lines = lookup
            .lines()
            .map(|line| LineView {
                id: line.to_string(),
                stations: lookup
                    .stations_on(line)
                    .into_iter()
                    .map(StationInfo::from_station)
                    .collect(),
            })
            .collect();
        Self { lines }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route result fragment.
#[derive(Template)]
#[template(path = "route_result.html")]
pub struct RouteResultTemplate {
    pub origin_name: String,
    pub destination_name: String,
    pub route: Option<RouteView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A line with its stations.
#[derive(Debug, Clone)]
pub struct LineView {
    pub id: String,
    pub stations: Vec<StationInfo>,
}

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub stops: Vec<StopView>,
    pub stop_count: usize,
    pub interchanges: usize,
    pub distance_display: String,
    pub duration_display: String,
    pub departure_time: String,
    pub arrival_time: String,
}

impl RouteView {
    /// Create from a route detail.
    pub fn from_detail(detail: &RouteDetail) -> Self {
        let last = detail.stations.len().saturating_sub(1);
        let stops = detail
            .stations
            .iter()
            .enumerate()
            .map(|(i, s)| StopView {
                number: i + 1,
                name: s.name.clone(),
                lines_display: s.lines.join(","),
                is_interchange: i > 0 && i < last && s.lines.len() > 1,
            })
            .collect();

        Self {
            stops,
            stop_count: detail.stops,
            interchanges: detail.interchanges,
            distance_display: format!("{:.2} km", detail.distance_km),
            duration_display: format!(
                "{} min {} sec",
                detail.duration_mins, detail.duration_rem_secs
            ),
            departure_time: detail.departure_time.clone(),
            arrival_time: detail.arrival_time.clone(),
        }
    }
}

/// One station along a route.
#[derive(Debug, Clone)]
pub struct StopView {
    pub number: usize,
    pub name: String,
    pub lines_display: String,
    pub is_interchange: bool,
}
