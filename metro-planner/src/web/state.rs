//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Graph;
use crate::stations::{StationLookup, StationSet};

/// Shared application state.
///
/// Everything here is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// All stations of the network
    pub stations: Arc<StationSet>,

    /// Travel network built from `stations`
    pub graph: Arc<Graph>,

    /// Name search and line listings
    pub lookup: Arc<StationLookup>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationSet, graph: Graph) -> Self {
        let stations = Arc::new(stations);
        let lookup = StationLookup::new(stations.clone());
        Self {
            stations,
            graph: Arc::new(graph),
            lookup: Arc::new(lookup),
        }
    }
}
