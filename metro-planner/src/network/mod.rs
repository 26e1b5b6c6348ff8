//! The travel network graph.
//!
//! Stations become nodes; consecutive stations on a line are joined by a
//! pair of edges whose cost is the estimated travel time between them.

mod config;
mod graph;

pub use config::{CostModel, DEFAULT_AVG_SPEED_KMH, DEFAULT_DWELL_SECS};
pub use graph::{Edge, Graph};
