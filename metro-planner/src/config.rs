//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::network::{CostModel, DEFAULT_AVG_SPEED_KMH, DEFAULT_DWELL_SECS};

pub const ENV_STATIONS_FILE: &str = "METRO_STATIONS_FILE";
pub const ENV_LINE_SEQUENCES_FILE: &str = "METRO_LINE_SEQUENCES_FILE";
pub const ENV_BIND_ADDR: &str = "METRO_BIND_ADDR";
pub const ENV_STATIC_DIR: &str = "METRO_STATIC_DIR";
pub const ENV_AVG_SPEED_KMH: &str = "METRO_AVG_SPEED_KMH";
pub const ENV_DWELL_SECS: &str = "METRO_DWELL_SECS";

/// Error returned when a configuration value cannot be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Value could not be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    /// Value parsed but is outside the allowed range
    #[error("{name} must be {requirement}, got {value}")]
    OutOfRange {
        name: &'static str,
        requirement: &'static str,
        value: f64,
    },
}

/// Settings for the route planner server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// JSON array of station records.
    pub stations_file: PathBuf,

    /// Optional JSON object of explicit per-line station orders.
    pub line_sequences_file: PathBuf,

    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// Directory of static assets served under `/static`.
    pub static_dir: PathBuf,

    /// Travel-time parameters for graph edges.
    pub cost: CostModel,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, using defaults for unset names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let avg_speed_kmh = parse_or(&lookup, ENV_AVG_SPEED_KMH, defaults.cost.avg_speed_kmh)?;
        if !(avg_speed_kmh.is_finite() && avg_speed_kmh > 0.0) {
            return Err(ConfigError::OutOfRange {
                name: ENV_AVG_SPEED_KMH,
                requirement: "a positive number",
                value: avg_speed_kmh,
            });
        }

        let dwell_secs = parse_or(&lookup, ENV_DWELL_SECS, defaults.cost.dwell_secs)?;
        if !(dwell_secs.is_finite() && dwell_secs >= 0.0) {
            return Err(ConfigError::OutOfRange {
                name: ENV_DWELL_SECS,
                requirement: "zero or more",
                value: dwell_secs,
            });
        }

        Ok(Self {
            stations_file: lookup(ENV_STATIONS_FILE)
                .map(PathBuf::from)
                .unwrap_or(defaults.stations_file),
            line_sequences_file: lookup(ENV_LINE_SEQUENCES_FILE)
                .map(PathBuf::from)
                .unwrap_or(defaults.line_sequences_file),
            bind_addr: parse_or(&lookup, ENV_BIND_ADDR, defaults.bind_addr)?,
            static_dir: lookup(ENV_STATIC_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cost: CostModel::new(avg_speed_kmh, dwell_secs),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            stations_file: PathBuf::from("data/stations.json"),
            line_sequences_file: PathBuf::from("data/line_sequences.json"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            cost: CostModel::new(DEFAULT_AVG_SPEED_KMH, DEFAULT_DWELL_SECS),
        }
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
