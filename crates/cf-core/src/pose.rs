//! Render pose handed across the render boundary.

use glam::{Quat, Vec3};

use crate::Cell;

/// Position, orientation and scale of one unit instance.
///
/// This is the only shape in which unit state leaves the core: the render
/// collaborator composes it into whatever transform representation it uses.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub position:    Vec3,
    pub orientation: Quat,
    pub scale:       Vec3,
}

impl Pose {
    /// Unrotated, unit-scale pose centred on `cell`.
    #[inline]
    pub fn at(cell: Cell) -> Self {
        Self {
            position:    cell.to_world(),
            orientation: Quat::IDENTITY,
            scale:       Vec3::ONE,
        }
    }

    /// Zero-scale pose at `cell`; the instance exists but is not visible.
    #[inline]
    pub fn hidden(cell: Cell) -> Self {
        Self { scale: Vec3::ZERO, ..Self::at(cell) }
    }

    #[inline]
    pub fn with_scale(self, scale: Vec3) -> Self {
        Self { scale, ..self }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.scale != Vec3::ZERO
    }
}
