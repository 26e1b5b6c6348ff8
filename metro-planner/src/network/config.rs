//! Travel-time cost model for graph edges.

/// Default average train speed between stations (km/h).
pub const DEFAULT_AVG_SPEED_KMH: f64 = 35.0;

/// Default time spent stopped at each station (seconds).
pub const DEFAULT_DWELL_SECS: f64 = 30.0;

/// Parameters that turn a physical distance into a travel-time cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    /// Average speed of a train between stations (km/h). Must be positive.
    pub avg_speed_kmh: f64,

    /// Fixed stop time added to every hop (seconds). Must be non-negative.
    pub dwell_secs: f64,
}

impl CostModel {
    /// Create a new cost model with the given parameters.
    pub fn new(avg_speed_kmh: f64, dwell_secs: f64) -> Self {
        Self {
            avg_speed_kmh,
            dwell_secs,
        }
    }

    /// Seconds spent riding over `distance_km`, excluding dwell.
    pub fn ride_secs(&self, distance_km: f64) -> f64 {
        (distance_km / self.avg_speed_kmh) * 3600.0
    }

    /// Total cost of one hop: ride time plus dwell.
    pub fn time_cost(&self, distance_km: f64) -> f64 {
        self.ride_secs(distance_km) + self.dwell_secs
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            avg_speed_kmh: DEFAULT_AVG_SPEED_KMH,
            dwell_secs: DEFAULT_DWELL_SECS,
        }
    }
}
