//! Great-circle distance between coordinates.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for all distance calculations, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// Coordinates are not validated. Out-of-range values produce a meaningless
/// distance rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    /// Create a coordinate from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another coordinate, in kilometres.
    pub fn distance_km(&self, other: &Coord) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Great-circle distance between two points, in kilometres.
///
/// Uses the haversine formula with a fixed radius of [`EARTH_RADIUS_KM`].
/// Edge costs are derived from this value, so the arithmetic must stay
/// exactly as written for results to be reproducible.
///
/// # Examples
///
/// ```
/// use metro_planner::geo::haversine_km;
///
/// assert_eq!(haversine_km(12.97, 77.59, 12.97, 77.59), 0.0);
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
