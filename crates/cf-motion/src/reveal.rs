//! Spawn reveal effects.

use glam::Vec3;

use cf_core::{Effect, Pose, Stage, UnitId};
use cf_units::Unit;

use crate::{Animator, Easing, MotionError, MotionResult, Playback, Tween};

/// Plays whatever makes a unit appear at its spawn cell.
///
/// Called once per unit, after it leaves the queue and before its route is
/// searched.  The unit is hidden (zero scale) when this starts and must be
/// rendered at [`Pose::at`] its spawn when this returns `Ok`.
pub trait SpawnEffect {
    fn reveal(
        &mut self,
        unit:     &Unit,
        animator: &mut dyn Animator,
        stage:    &mut dyn Stage,
    ) -> MotionResult<()>;
}

/// Scale at the bottom of the landing squash.
pub const SQUASH: Vec3 = Vec3::new(1.25, 0.5, 1.25);

/// How far the unit sinks (world units) while squashed.
pub const DIP: f32 = 0.5;

/// Grow in, squash on landing, spring back.
///
/// ```text
/// Pop        grow 0 → 1            1.5 × segment   power2.out
/// SqueakIn   squash 1 → SQUASH     0.5 × segment   power2.inOut, sinking by DIP
///            rise back             0.25 × segment  power2.inOut
/// SqueakOut  unsquash SQUASH → 1   0.5 × segment   power2.inOut
/// ```
#[derive(Copy, Clone, Debug)]
pub struct DropIn {
    pub segment_secs: f32,
}

impl DropIn {
    pub fn new(segment_secs: f32) -> Self {
        Self { segment_secs }
    }

    fn cue(stage: &mut dyn Stage, effect: Effect) {
        if let Err(e) = stage.play_effect(effect) {
            log::debug!("{effect} cue failed: {e}");
        }
    }
}

impl SpawnEffect for DropIn {
    fn reveal(
        &mut self,
        unit:     &Unit,
        animator: &mut dyn Animator,
        stage:    &mut dyn Stage,
    ) -> MotionResult<()> {
        let id = unit.id;
        let rest = Pose::at(unit.spawn);
        let sunk = |depth: f32| Pose {
            position: rest.position - Vec3::Y * depth,
            ..rest
        };
        let seg = self.segment_secs;

        Self::cue(stage, Effect::Pop);
        play_phase(animator, stage, id, Tween::new(seg * 1.5, Easing::PowerTwoOut), |t| {
            rest.with_scale(Vec3::splat(t))
        })?;

        Self::cue(stage, Effect::SqueakIn);
        play_phase(animator, stage, id, Tween::new(seg * 0.5, Easing::PowerTwoInOut), |t| {
            sunk(DIP * t).with_scale(Vec3::ONE.lerp(SQUASH, t))
        })?;
        play_phase(animator, stage, id, Tween::new(seg * 0.25, Easing::PowerTwoInOut), |t| {
            sunk(DIP * (1.0 - t)).with_scale(SQUASH)
        })?;

        Self::cue(stage, Effect::SqueakOut);
        play_phase(animator, stage, id, Tween::new(seg * 0.5, Easing::PowerTwoInOut), |t| {
            rest.with_scale(SQUASH.lerp(Vec3::ONE, t))
        })?;

        stage.render_pose(id, rest);
        Ok(())
    }
}

fn play_phase(
    animator: &mut dyn Animator,
    stage:    &mut dyn Stage,
    id:       UnitId,
    tween:    Tween,
    pose_at:  impl Fn(f32) -> Pose,
) -> MotionResult<()> {
    match animator.play(tween, &mut |t| stage.render_pose(id, pose_at(t))) {
        Playback::Completed => Ok(()),
        Playback::Cancelled => Err(MotionError::Cancelled(id)),
    }
}
