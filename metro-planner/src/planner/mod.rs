//! Route planner using Dijkstra search.
//!
//! This module implements the core route planning algorithm that answers:
//! "What is the fastest way from this station to that one?"
//!
//! The search runs over the immutable network graph and is followed by a
//! trip analysis that counts stops and interchanges and measures distance.

mod route;
mod search;
mod trip;

pub use route::{RoutePlanner, RouteResult};
pub use search::{Route, SearchError, shortest_path};
pub use trip::{TripSummary, analyze};
