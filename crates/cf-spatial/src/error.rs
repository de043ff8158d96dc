//! Spatial-subsystem error type.

use thiserror::Error;

use cf_core::Cell;

/// Errors produced by `cf-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// The frontier emptied (within the search radius) without reaching
    /// the destination, or the destination itself is occupied.
    #[error("no route from {from} to {to}")]
    NoRoute { from: Cell, to: Cell },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
