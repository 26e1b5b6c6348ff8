//! Station data: loading, the station set, and name lookup.
//!
//! Station records and optional line orderings are read from JSON files at
//! startup. Everything here is read-only once loaded.

mod error;
mod loader;
mod names;
mod set;

pub use error::StationError;
pub use loader::{
    StationDto, load_line_orderings, load_stations, parse_line_orderings, parse_stations,
};
pub use names::{StationLookup, StationMatch};
pub use set::{LineMemberships, LineOrderings, StationSet};
