//! Station data loading error types.

use std::path::PathBuf;

use crate::domain::{DomainError, InvalidLineId, InvalidStationId};

/// Errors that can occur when loading station data.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Reading the data file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record carries a malformed station id
    #[error(transparent)]
    StationId(#[from] InvalidStationId),

    /// A record carries a malformed line id
    #[error(transparent)]
    LineId(#[from] InvalidLineId),

    /// Records are individually valid but inconsistent
    #[error(transparent)]
    Domain(#[from] DomainError),
}
