//! The render/effect boundary.
//!
//! The core never draws or plays audio itself.  Everything it needs from the
//! scene is captured by the [`Stage`] trait: "render unit `id` at pose `p`"
//! and "play cue `e`".  Both are called from the single driver thread.

use std::fmt;

use crate::{Cell, CfError, Pose, UnitId};

/// Named audio cues fired at fixed lifecycle points.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Effect {
    /// A unit appears at its spawn cell.
    Pop,
    /// One motion segment finished.
    Roll,
    /// Spawn squash begins.
    SqueakIn,
    /// Spawn squash releases.
    SqueakOut,
}

impl Effect {
    pub const ALL: [Effect; 4] = [Effect::Pop, Effect::Roll, Effect::SqueakIn, Effect::SqueakOut];

    pub fn name(self) -> &'static str {
        match self {
            Effect::Pop       => "pop",
            Effect::Roll      => "roll",
            Effect::SqueakIn  => "squeak_in",
            Effect::SqueakOut => "squeak_out",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scene collaborator consumed by the motion layer and the driver.
///
/// Only [`render_pose`](Self::render_pose) is required.  It is called on
/// every animation tick, so implementations must be cheap and idempotent.
pub trait Stage {
    /// Place instance `unit` at `pose`.
    fn render_pose(&mut self, unit: UnitId, pose: Pose);

    /// Fire-and-forget cue.  An `Err` is logged by the caller and otherwise
    /// ignored; it never blocks motion.
    fn play_effect(&mut self, _effect: Effect) -> Result<(), CfError> {
        Ok(())
    }

    /// Cosmetic: show the waypoints of a freshly computed route.
    fn show_waypoints(&mut self, _unit: UnitId, _cells: &[Cell]) {}

    /// Drop every waypoint marker.  Called when a run is reset.
    fn clear_waypoints(&mut self) {}
}

/// A [`Stage`] that discards everything.
pub struct NullStage;

impl Stage for NullStage {
    fn render_pose(&mut self, _unit: UnitId, _pose: Pose) {}
}
