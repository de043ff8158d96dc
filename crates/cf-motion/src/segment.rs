//! A single roll between two adjacent cells.

use std::f32::consts::FRAC_PI_2;

use glam::Quat;

use cf_core::{Axis, Cell, Pose};

use crate::{MotionError, MotionResult};

/// One step of a route, with the rotation that makes it look like the
/// unit tips over its leading edge.
///
/// | Travel axis | Roll axis |
/// |-------------|-----------|
/// | x           | z         |
/// | y           | z         |
/// | z           | x         |
///
/// The roll angle is `-π/2` for `+x` or `-z` travel and `+π/2` otherwise.
/// Each segment starts from an unrotated orientation; a quarter turn of a
/// cube is indistinguishable from no turn, so nothing accumulates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub from:       Cell,
    pub to:         Cell,
    /// Axis of travel.
    pub axis:       Axis,
    /// `+1` or `-1` along `axis`.
    pub step:       i32,
    pub roll_axis:  Axis,
    /// Radians.
    pub roll_angle: f32,
}

impl Segment {
    /// The segment from `from` to `to`, which must differ by exactly one
    /// step on exactly one axis.
    pub fn between(from: Cell, to: Cell) -> MotionResult<Self> {
        let (axis, step) = from
            .step_to(to)
            .ok_or(MotionError::NotAdjacent { from, to })?;

        let roll_axis = match axis {
            Axis::X | Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        };
        let roll_angle = if (axis == Axis::X && step > 0) || (axis == Axis::Z && step < 0) {
            -FRAC_PI_2
        } else {
            FRAC_PI_2
        };

        Ok(Self { from, to, axis, step, roll_axis, roll_angle })
    }

    /// Split a route into segments, starting at `start`.
    ///
    /// Fails on the first pair of consecutive cells that are not adjacent,
    /// before anything has moved.
    pub fn chain(start: Cell, cells: &[Cell]) -> MotionResult<Vec<Segment>> {
        let mut prev = start;
        let mut out = Vec::with_capacity(cells.len());
        for &cell in cells {
            out.push(Segment::between(prev, cell)?);
            prev = cell;
        }
        Ok(out)
    }

    /// Pose at eased progress `t`; `0.0` is at `from`, `1.0` at `to`.
    pub fn pose(&self, t: f32) -> Pose {
        let position = self.from.to_world().lerp(self.to.to_world(), t);
        let orientation = Quat::from_axis_angle(self.roll_axis.unit(), self.roll_angle * t);
        Pose { position, orientation, ..Pose::at(self.to) }
    }
}
