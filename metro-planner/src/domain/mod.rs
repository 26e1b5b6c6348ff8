//! Domain types for the metro route planner.
//!
//! This module contains the validated station and line types. All types
//! enforce their invariants at construction time, so code that receives
//! them can trust their validity.

mod error;
mod line;
mod station;

pub use error::DomainError;
pub use line::{InvalidLineId, LineId};
pub use station::{InvalidStationId, Station, StationId};
