//! Plays a route one segment at a time and commits the unit at the end.

use cf_core::{Cell, CfError, Effect, Pose, Stage};
use cf_spatial::Occupancy;
use cf_units::{Unit, UnitPhase};

use crate::{Animator, Easing, MotionError, MotionResult, Playback, Segment, Tween};

/// Drives a unit along its route.
///
/// Per segment: the target cell is marked in flight, the roll is played
/// through the animator (position and rotation share one eased progress),
/// `unit.current` advances, and a `Roll` cue fires.  After the last segment
/// the unit is settled and its destination committed.
#[derive(Copy, Clone, Debug)]
pub struct MotionSequencer {
    /// Seconds per segment.
    pub segment_secs: f32,
    pub easing:       Easing,
}

impl MotionSequencer {
    pub fn new(segment_secs: f32) -> Self {
        Self { segment_secs, easing: Easing::PowerTwoInOut }
    }

    /// Move `unit` along `cells` (start cell excluded) and settle it.
    ///
    /// The unit must be in `Routing`.  The whole route is validated before
    /// anything moves, so a malformed route leaves both the unit and the
    /// occupancy untouched.  Returns the number of segments played.
    ///
    /// On cancellation the unit stays where its last completed segment left
    /// it, nothing is committed, and [`MotionError::Cancelled`] is returned.
    pub fn travel(
        &self,
        unit:      &mut Unit,
        cells:     &[Cell],
        animator:  &mut dyn Animator,
        stage:     &mut dyn Stage,
        occupancy: &mut Occupancy,
    ) -> MotionResult<usize> {
        if unit.phase() != UnitPhase::Routing {
            return Err(CfError::PhaseTransition {
                unit: unit.id,
                from: unit.phase().name(),
                to:   UnitPhase::Settled.name(),
            }
            .into());
        }

        let segments = Segment::chain(unit.current, cells)?;
        let end = segments.last().map_or(unit.current, |s| s.to);
        if end != unit.destination {
            return Err(MotionError::OffTarget {
                unit:        unit.id,
                at:          end,
                destination: unit.destination,
            });
        }

        let tween = Tween::new(self.segment_secs, self.easing);
        for segment in &segments {
            occupancy.begin_flight(segment.to);

            let id = unit.id;
            let playback = animator.play(tween, &mut |t| stage.render_pose(id, segment.pose(t)));
            if playback == Playback::Cancelled {
                occupancy.end_flight();
                return Err(MotionError::Cancelled(id));
            }

            unit.current = segment.to;
            if let Err(e) = stage.play_effect(Effect::Roll) {
                log::debug!("{id}: roll cue failed: {e}");
            }
        }

        // Trivial routes never render; make sure the unit is visible at rest.
        if segments.is_empty() {
            stage.render_pose(unit.id, Pose::at(unit.current));
        }

        unit.advance(UnitPhase::Settled)?;
        occupancy.commit(unit.destination);
        Ok(segments.len())
    }
}
