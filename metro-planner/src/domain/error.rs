//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from file and JSON errors.

use super::StationId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Station record lists no lines
    #[error("station {0} belongs to no line")]
    NoLines(StationId),

    /// Station id not present in the station set
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// Two station records share an id
    #[error("duplicate station id: {0}")]
    DuplicateStation(StationId),
}
