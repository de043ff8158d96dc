//! Strongly typed unit identifier.
//!
//! A `UnitId` is the unit's creation index and doubles as its slot in the
//! external render-instance table, so it is assigned once and never reused.

use std::fmt;

/// Index of a unit in the unit store and the render-instance table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Slot in a `Vec` indexed by unit.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}
