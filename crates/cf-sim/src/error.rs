use cf_core::{Cell, CfError};
use cf_motion::MotionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CfError),

    #[error("more than one unit has destination {0}")]
    DuplicateDestination(Cell),

    #[error("motion failed: {0}")]
    Motion(#[from] MotionError),
}

impl SimError {
    /// `true` if the run stopped because its cancel token fired.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SimError::Motion(MotionError::Cancelled(_)))
    }
}

pub type SimResult<T> = Result<T, SimError>;
