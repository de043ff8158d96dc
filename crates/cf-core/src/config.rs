//! Run configuration.

use crate::{CfError, CfResult};

/// Largest grid edge whose cube still fits in a `UnitId`.
pub const MAX_GRID_SIZE: u32 = 1625;

/// Top-level simulation configuration.
///
/// Typically built from CLI flags or loaded from a JSON file by the
/// application crate and passed to `SimBuilder`.  A reset re-creates every
/// piece of run state from the same `SimConfig`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Edge length of the cubic grid; the run places `grid_size³` units.
    pub grid_size: u32,

    /// Seconds one motion segment (a single-cell roll) takes.
    pub segment_secs: f32,

    /// Animation tick used by fixed-step animators.
    pub frame_secs: f32,

    /// Master RNG seed for spawn cells and tie shuffling.  `None` draws
    /// from OS entropy, so every run differs.
    pub seed: Option<u64>,

    /// Forward each computed route to `Stage::show_waypoints`.  Purely
    /// cosmetic; search results are unaffected.
    pub show_waypoints: bool,

    /// Shuffle units whose destinations share a height when the placement
    /// queue is built.
    pub shuffle_ties: bool,

    /// Manhattan radius (from the spawn cell) beyond which the path search
    /// never wanders.
    pub search_radius: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size:      4,
            segment_secs:   0.25,
            frame_secs:     1.0 / 60.0,
            seed:           None,
            show_waypoints: false,
            shuffle_ties:   true,
            search_radius:  40,
        }
    }
}

impl SimConfig {
    /// Total number of units a run will place.
    #[inline]
    pub fn unit_count(&self) -> usize {
        (self.grid_size as usize).pow(3)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CfResult<()> {
        if !(2..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(CfError::Config(format!(
                "grid_size must be in 2..={MAX_GRID_SIZE}, got {}",
                self.grid_size
            )));
        }
        if !self.segment_secs.is_finite() || self.segment_secs < 0.0 {
            return Err(CfError::Config(format!(
                "segment_secs must be finite and non-negative, got {}",
                self.segment_secs
            )));
        }
        if !self.frame_secs.is_finite() || self.frame_secs <= 0.0 {
            return Err(CfError::Config(format!(
                "frame_secs must be finite and positive, got {}",
                self.frame_secs
            )));
        }
        if self.search_radius == 0 {
            return Err(CfError::Config("search_radius must be positive".into()));
        }
        Ok(())
    }
}
