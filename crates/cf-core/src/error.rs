//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CfError` as one
//! variant through `#[from]`.

use thiserror::Error;

use crate::UnitId;

/// The top-level error type for `cf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CfError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("unit {0} not found")]
    UnitNotFound(UnitId),

    #[error("unit {unit} cannot move from phase {from} to {to}")]
    PhaseTransition {
        unit: UnitId,
        from: &'static str,
        to:   &'static str,
    },

    #[error("stage effect failed: {0}")]
    Stage(String),
}

/// Shorthand result type for all `cf-*` crates.
pub type CfResult<T> = Result<T, CfError>;
