//! Unit tests for cf-motion.
//!
//! Stages are recorders; animators are either instant or a fixed-step clock
//! with binary-exact frame lengths so frame counts are deterministic.

use cf_core::{Cell, CfError, Effect, Pose, Stage, UnitId};
use cf_units::{Unit, UnitPhase};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Records every call made through the [`Stage`] contract.
#[derive(Default)]
struct Recorder {
    poses:        Vec<(UnitId, Pose)>,
    effects:      Vec<Effect>,
    fail_effects: bool,
}

impl Stage for Recorder {
    fn render_pose(&mut self, unit: UnitId, pose: Pose) {
        self.poses.push((unit, pose));
    }

    fn play_effect(&mut self, effect: Effect) -> Result<(), CfError> {
        self.effects.push(effect);
        if self.fail_effects {
            return Err(CfError::Stage(format!("{effect} unavailable")));
        }
        Ok(())
    }
}

/// A unit already dequeued, revealed and about to move.
fn routing_unit(spawn: Cell, destination: Cell) -> Unit {
    let mut unit = Unit::new(UnitId(0), spawn, destination);
    for phase in [UnitPhase::Queued, UnitPhase::Spawning, UnitPhase::Routing] {
        unit.advance(phase).unwrap();
    }
    unit
}

// ── Tweens ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tween {
    use crate::{Easing, Tween};

    #[test]
    fn curves_hit_both_ends() {
        for easing in [Easing::Linear, Easing::PowerTwoOut, Easing::PowerTwoInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn known_midpoints() {
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        assert_eq!(Easing::PowerTwoOut.apply(0.5), 0.75);
        assert_eq!(Easing::PowerTwoInOut.apply(0.5), 0.5);
        assert_eq!(Easing::PowerTwoInOut.apply(0.25), 0.125);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::PowerTwoOut.apply(-1.0), 0.0);
        assert_eq!(Easing::PowerTwoInOut.apply(3.0), 1.0);
    }

    #[test]
    fn zero_duration_is_complete() {
        let t = Tween::new(0.0, Easing::PowerTwoInOut);
        assert!(t.is_instant());
        assert_eq!(t.progress(0.0), 1.0);
    }

    #[test]
    fn negative_duration_is_clamped() {
        assert_eq!(Tween::new(-2.0, Easing::Linear).duration, 0.0);
    }
}

// ── Animators ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod animator {
    use crate::{Animator, Easing, FixedStepAnimator, InstantAnimator, Playback, Tween};

    #[test]
    fn fixed_step_frame_count() {
        let mut anim = FixedStepAnimator::new(0.125);
        let mut seen = Vec::new();
        let out = anim.play(Tween::new(0.5, Easing::Linear), &mut |t| seen.push(t));

        assert_eq!(out, Playback::Completed);
        assert_eq!(seen, vec![0.25, 0.5, 0.75, 1.0]);
        assert_eq!(anim.frames(), 4);
        assert_eq!(anim.elapsed_secs(), 0.5);
    }

    #[test]
    fn fixed_step_progress_is_monotonic_and_ends_at_one() {
        let mut anim = FixedStepAnimator::new(1.0 / 60.0);
        let mut seen = Vec::new();
        anim.play(Tween::new(0.3, Easing::PowerTwoInOut), &mut |t| seen.push(t));

        assert!(seen.len() >= 18);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*seen.last().unwrap(), 1.0);
    }

    #[test]
    fn instant_tween_is_one_frame() {
        let mut anim = FixedStepAnimator::new(0.125);
        let mut seen = Vec::new();
        anim.play(Tween::new(0.0, Easing::Linear), &mut |t| seen.push(t));
        assert_eq!(seen, vec![1.0]);
    }

    #[test]
    fn cancelled_before_play() {
        let mut anim = FixedStepAnimator::new(0.125);
        anim.cancel_token().cancel();
        let mut calls = 0;
        let out = anim.play(Tween::new(0.5, Easing::Linear), &mut |_| calls += 1);
        assert_eq!(out, Playback::Cancelled);
        assert_eq!(calls, 0);
    }

    #[test]
    fn cancelled_mid_play() {
        let mut anim = FixedStepAnimator::new(0.125);
        let token = anim.cancel_token();
        let mut calls = 0;
        let out = anim.play(Tween::new(0.5, Easing::Linear), &mut |_| {
            calls += 1;
            token.cancel();
        });
        assert_eq!(out, Playback::Cancelled);
        assert_eq!(calls, 1);
    }

    #[test]
    fn reset_rearms_token() {
        let mut anim = InstantAnimator::new();
        let token = anim.cancel_token();
        token.cancel();
        assert_eq!(anim.play(Tween::new(1.0, Easing::Linear), &mut |_| {}), Playback::Cancelled);

        token.reset();
        let mut last = 0.0;
        assert_eq!(anim.play(Tween::new(1.0, Easing::Linear), &mut |t| last = t), Playback::Completed);
        assert_eq!(last, 1.0);
        assert_eq!(anim.plays(), 1);
    }
}

// ── Segments ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod segment {
    use std::f32::consts::FRAC_PI_2;

    use glam::Quat;

    use cf_core::{Axis, Cell};

    use crate::{MotionError, Segment};

    #[test]
    fn roll_table() {
        let o = Cell::new(0, 0, 0);
        let cases = [
            (Cell::new(1, 0, 0), Axis::X, Axis::Z, -FRAC_PI_2),
            (Cell::new(-1, 0, 0), Axis::X, Axis::Z, FRAC_PI_2),
            (Cell::new(0, 0, 1), Axis::Z, Axis::X, FRAC_PI_2),
            (Cell::new(0, 0, -1), Axis::Z, Axis::X, -FRAC_PI_2),
            (Cell::new(0, 1, 0), Axis::Y, Axis::Z, FRAC_PI_2),
        ];
        for (to, axis, roll_axis, angle) in cases {
            let s = Segment::between(o, to).unwrap();
            assert_eq!(s.axis, axis, "{to:?}");
            assert_eq!(s.roll_axis, roll_axis, "{to:?}");
            assert_eq!(s.roll_angle, angle, "{to:?}");
        }
    }

    #[test]
    fn rejects_non_adjacent() {
        let err = Segment::between(Cell::new(0, 0, 0), Cell::new(1, 0, 1)).unwrap_err();
        assert!(matches!(err, MotionError::NotAdjacent { .. }));
        assert!(Segment::between(Cell::new(0, 0, 0), Cell::new(0, 0, 0)).is_err());
    }

    #[test]
    fn pose_interpolates_between_centres() {
        let s = Segment::between(Cell::new(0, 0, 0), Cell::new(1, 0, 0)).unwrap();

        let start = s.pose(0.0);
        assert_eq!(start.position, Cell::new(0, 0, 0).to_world());
        assert_eq!(start.orientation, Quat::IDENTITY);

        let end = s.pose(1.0);
        assert_eq!(end.position, Cell::new(1, 0, 0).to_world());
        assert!(end.orientation.abs_diff_eq(Quat::from_rotation_z(-FRAC_PI_2), 1e-6));
        assert!(end.is_visible());
    }

    #[test]
    fn chain_stops_at_first_gap() {
        let start = Cell::new(0, 0, 0);
        let ok = Segment::chain(start, &[Cell::new(1, 0, 0), Cell::new(1, 1, 0)]).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok[1].axis, Axis::Y);

        let gap = Segment::chain(start, &[Cell::new(1, 0, 0), Cell::new(3, 0, 0)]);
        assert!(gap.is_err());
    }
}

// ── Sequencer ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sequencer {
    use cf_core::{Cell, CfError, Effect, UnitId};
    use cf_spatial::Occupancy;
    use cf_units::{Unit, UnitPhase};

    use super::{Recorder, routing_unit};
    use crate::{Animator, FixedStepAnimator, InstantAnimator, MotionError, MotionSequencer};

    fn route() -> Vec<Cell> {
        vec![Cell::new(-1, 1, 0), Cell::new(0, 1, 0)]
    }

    #[test]
    fn settles_and_commits() {
        let mut unit = routing_unit(Cell::new(-1, 0, 0), Cell::new(0, 1, 0));
        let mut occ = Occupancy::from_cells([Cell::new(0, 0, 0)]);
        let mut stage = Recorder::default();
        let mut anim = InstantAnimator::new();

        let n = MotionSequencer::new(0.25)
            .travel(&mut unit, &route(), &mut anim, &mut stage, &mut occ)
            .unwrap();

        assert_eq!(n, 2);
        assert!(unit.is_settled());
        assert_eq!(unit.current, Cell::new(0, 1, 0));
        assert!(occ.is_settled(Cell::new(0, 1, 0)));
        assert_eq!(occ.in_flight(), None);
        assert_eq!(stage.effects, vec![Effect::Roll, Effect::Roll]);
        let (id, last) = *stage.poses.last().unwrap();
        assert_eq!(id, UnitId(0));
        assert_eq!(last.position, Cell::new(0, 1, 0).to_world());
    }

    #[test]
    fn renders_every_frame() {
        let mut unit = routing_unit(Cell::new(-1, 0, 0), Cell::new(0, 1, 0));
        let mut occ = Occupancy::from_cells([Cell::new(0, 0, 0)]);
        let mut stage = Recorder::default();
        let mut anim = FixedStepAnimator::new(0.125);

        MotionSequencer::new(0.5)
            .travel(&mut unit, &route(), &mut anim, &mut stage, &mut occ)
            .unwrap();

        assert_eq!(anim.frames(), 8);
        assert_eq!(stage.poses.len(), 8);
    }

    #[test]
    fn failing_cues_do_not_block_motion() {
        let mut unit = routing_unit(Cell::new(-2, 0, 0), Cell::new(0, 0, 0));
        let mut occ = Occupancy::new();
        let mut stage = Recorder { fail_effects: true, ..Recorder::default() };

        let cells = [Cell::new(-1, 0, 0), Cell::new(0, 0, 0)];
        MotionSequencer::new(0.25)
            .travel(&mut unit, &cells, &mut InstantAnimator::new(), &mut stage, &mut occ)
            .unwrap();

        assert!(unit.is_settled());
        assert_eq!(stage.effects.len(), 2);
    }

    #[test]
    fn empty_route_settles_in_place() {
        let c = Cell::new(0, 0, 0);
        let mut unit = routing_unit(c, c);
        let mut occ = Occupancy::new();
        let mut stage = Recorder::default();

        let n = MotionSequencer::new(0.25)
            .travel(&mut unit, &[], &mut InstantAnimator::new(), &mut stage, &mut occ)
            .unwrap();

        assert_eq!(n, 0);
        assert!(unit.is_settled());
        assert!(occ.is_settled(c));
        assert!(stage.effects.is_empty());
        assert_eq!(stage.poses.len(), 1);
    }

    #[test]
    fn malformed_route_moves_nothing() {
        let mut unit = routing_unit(Cell::new(-2, 0, 0), Cell::new(0, 0, 0));
        let mut occ = Occupancy::new();
        let mut stage = Recorder::default();

        let cells = [Cell::new(-1, 0, 0), Cell::new(0, 0, 1), Cell::new(0, 0, 0)];
        let err = MotionSequencer::new(0.25)
            .travel(&mut unit, &cells, &mut InstantAnimator::new(), &mut stage, &mut occ)
            .unwrap_err();

        assert!(matches!(err, MotionError::NotAdjacent { .. }));
        assert_eq!(unit.current, Cell::new(-2, 0, 0));
        assert_eq!(unit.phase(), UnitPhase::Routing);
        assert!(occ.is_empty());
        assert!(stage.poses.is_empty());
    }

    #[test]
    fn route_ending_elsewhere_is_rejected() {
        let mut unit = routing_unit(Cell::new(-2, 0, 0), Cell::new(0, 0, 0));
        let err = MotionSequencer::new(0.25)
            .travel(
                &mut unit,
                &[Cell::new(-1, 0, 0)],
                &mut InstantAnimator::new(),
                &mut Recorder::default(),
                &mut Occupancy::new(),
            )
            .unwrap_err();
        assert!(matches!(err, MotionError::OffTarget { at, .. } if at == Cell::new(-1, 0, 0)));
    }

    #[test]
    fn unit_must_be_routing() {
        let mut unit = Unit::new(UnitId(0), Cell::new(-1, 0, 0), Cell::new(0, 0, 0));
        let err = MotionSequencer::new(0.25)
            .travel(
                &mut unit,
                &[Cell::new(0, 0, 0)],
                &mut InstantAnimator::new(),
                &mut Recorder::default(),
                &mut Occupancy::new(),
            )
            .unwrap_err();
        assert!(matches!(err, MotionError::Unit(CfError::PhaseTransition { .. })));
        assert_eq!(unit.current, Cell::new(-1, 0, 0));
    }

    #[test]
    fn cancellation_commits_nothing() {
        let mut unit = routing_unit(Cell::new(-2, 0, 0), Cell::new(0, 0, 0));
        let mut occ = Occupancy::new();
        let mut anim = InstantAnimator::new();
        anim.cancel_token().cancel();

        let cells = [Cell::new(-1, 0, 0), Cell::new(0, 0, 0)];
        let err = MotionSequencer::new(0.25)
            .travel(&mut unit, &cells, &mut anim, &mut Recorder::default(), &mut occ)
            .unwrap_err();

        assert!(matches!(err, MotionError::Cancelled(UnitId(0))));
        assert_eq!(unit.current, Cell::new(-2, 0, 0));
        assert!(!unit.is_settled());
        assert!(occ.is_empty());
        assert_eq!(occ.in_flight(), None);
    }
}

// ── Reveal ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reveal {
    use glam::Vec3;

    use cf_core::{Cell, Effect, Pose, UnitId};
    use cf_units::Unit;

    use super::Recorder;
    use crate::reveal::SQUASH;
    use crate::{Animator, DropIn, FixedStepAnimator, InstantAnimator, MotionError, SpawnEffect};

    fn unit() -> Unit {
        Unit::new(UnitId(3), Cell::new(-2, 0, 1), Cell::new(0, 0, 0))
    }

    #[test]
    fn cue_order_and_final_pose() {
        let mut stage = Recorder::default();
        let mut anim = InstantAnimator::new();
        DropIn::new(0.25).reveal(&unit(), &mut anim, &mut stage).unwrap();

        assert_eq!(stage.effects, vec![Effect::Pop, Effect::SqueakIn, Effect::SqueakOut]);
        assert_eq!(anim.plays(), 4);
        assert_eq!(stage.poses.last().unwrap().1, Pose::at(Cell::new(-2, 0, 1)));
        assert!(stage.poses.iter().all(|(id, _)| *id == UnitId(3)));
    }

    #[test]
    fn grows_squashes_and_dips() {
        let mut stage = Recorder::default();
        let mut anim = FixedStepAnimator::new(0.125);
        DropIn::new(0.5).reveal(&unit(), &mut anim, &mut stage).unwrap();

        let first = stage.poses[0].1;
        assert!(first.scale.x > 0.0 && first.scale.x < 1.0, "grows from nothing");

        let flattest = stage.poses.iter().map(|(_, p)| p.scale.y).fold(f32::MAX, f32::min);
        assert_eq!(flattest, SQUASH.y);

        let lowest = stage.poses.iter().map(|(_, p)| p.position.y).fold(f32::MAX, f32::min);
        assert_eq!(lowest, 0.0);

        assert_eq!(stage.poses.last().unwrap().1.scale, Vec3::ONE);
    }

    #[test]
    fn cancelled_reveal_errors() {
        let mut anim = InstantAnimator::new();
        anim.cancel_token().cancel();
        let err = DropIn::new(0.25)
            .reveal(&unit(), &mut anim, &mut Recorder::default())
            .unwrap_err();
        assert!(matches!(err, MotionError::Cancelled(UnitId(3))));
    }
}
