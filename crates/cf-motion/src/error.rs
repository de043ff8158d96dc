use cf_core::{Cell, CfError, UnitId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("cells {from} and {to} are not one step apart")]
    NotAdjacent { from: Cell, to: Cell },

    #[error("playback for {0} was cancelled")]
    Cancelled(UnitId),

    #[error("{unit} stopped at {at}, expected {destination}")]
    OffTarget { unit: UnitId, at: Cell, destination: Cell },

    #[error(transparent)]
    Unit(#[from] CfError),
}

pub type MotionResult<T> = Result<T, MotionError>;
