//! Lattice cell coordinates.
//!
//! The grid is addressed by integer `Cell`s.  World space places cell
//! centres on half-integers (`n + 0.5`), so a cell at lattice `(0, 0, 0)`
//! is rendered at world `(0.5, 0.5, 0.5)`.  All search and occupancy
//! arithmetic stays on integers; conversion to world space happens only at
//! the render boundary via [`Cell::to_world`].

use std::fmt;

use glam::Vec3;

/// Lattice `y` of the ground layer.  Cells at this height are always
/// supported.
pub const GROUND_LEVEL: i32 = 0;

/// One of the three lattice axes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// An integer lattice address.
///
/// Ordering is lexicographic on `(x, y, z)`; it carries no spatial meaning
/// and exists only so cells can serve as deterministic tie-breakers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Sum of absolute per-axis differences.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// The cell directly beneath this one.
    #[inline]
    pub fn below(self) -> Cell {
        Cell::new(self.x, self.y - 1, self.z)
    }

    /// The cell directly above this one.
    #[inline]
    pub fn above(self) -> Cell {
        Cell::new(self.x, self.y + 1, self.z)
    }

    #[inline]
    pub fn is_ground(self) -> bool {
        self.y == GROUND_LEVEL
    }

    /// Shift by `delta` along `axis`.
    #[inline]
    pub fn offset(self, axis: Axis, delta: i32) -> Cell {
        match axis {
            Axis::X => Cell::new(self.x + delta, self.y, self.z),
            Axis::Y => Cell::new(self.x, self.y + delta, self.z),
            Axis::Z => Cell::new(self.x, self.y, self.z + delta),
        }
    }

    /// Coordinate along `axis`.
    #[inline]
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// If `other` is exactly one step away along exactly one axis, return
    /// that axis and the signed step (`±1`).
    pub fn step_to(self, other: Cell) -> Option<(Axis, i32)> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        match (dx, dy, dz) {
            (1 | -1, 0, 0) => Some((Axis::X, dx)),
            (0, 1 | -1, 0) => Some((Axis::Y, dy)),
            (0, 0, 1 | -1) => Some((Axis::Z, dz)),
            _ => None,
        }
    }

    /// World-space centre of this cell.
    #[inline]
    pub fn to_world(self) -> Vec3 {
        Vec3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }

    /// Inverse of [`to_world`](Self::to_world).
    ///
    /// Returns `None` unless every component sits exactly on a half-integer
    /// centre.
    pub fn from_world(p: Vec3) -> Option<Cell> {
        fn lattice(v: f32) -> Option<i32> {
            let n = v - 0.5;
            (n.fract() == 0.0 && n.is_finite()).then_some(n as i32)
        }
        Some(Cell::new(lattice(p.x)?, lattice(p.y)?, lattice(p.z)?))
    }
}

impl fmt::Display for Cell {
    /// Formats as world-space centres, e.g. `(0.5, 1.5, -0.5)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.to_world();
        write!(f, "({}, {}, {})", w.x, w.y, w.z)
    }
}
