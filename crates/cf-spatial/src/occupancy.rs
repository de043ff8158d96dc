//! Grid occupancy model.
//!
//! The set of cells held by settled units, keyed by coordinate hash, plus the
//! cell of the unit currently in motion (if any).  The settled set only ever
//! grows: units are never unplaced.

use rustc_hash::FxHashSet;

use cf_core::{Cell, GROUND_LEVEL};

/// Which lattice cells are blocked.
///
/// `occupied` answers for settled cells **and** the in-flight cell, so a
/// moving unit is treated as a momentary obstacle.  `supported` is the
/// gravity rule used by the path search.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    settled:   FxHashSet<Cell>,
    in_flight: Option<Cell>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupancy pre-filled with `cells` as settled.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        Self {
            settled:   cells.into_iter().collect(),
            in_flight: None,
        }
    }

    /// `true` if a settled unit or the moving unit holds `cell`.
    #[inline]
    pub fn occupied(&self, cell: Cell) -> bool {
        self.in_flight == Some(cell) || self.settled.contains(&cell)
    }

    /// `true` if a settled unit holds `cell`.
    #[inline]
    pub fn is_settled(&self, cell: Cell) -> bool {
        self.settled.contains(&cell)
    }

    /// `true` iff `cell` is on the ground or sits directly on an occupied
    /// cell.
    #[inline]
    pub fn supported(&self, cell: Cell) -> bool {
        cell.y == GROUND_LEVEL || self.occupied(cell.below())
    }

    /// Register `cell` as permanently occupied.
    ///
    /// Set semantics: committing an already-settled cell is a no-op and
    /// returns `false`.  Clears the in-flight marker if it was on `cell`.
    pub fn commit(&mut self, cell: Cell) -> bool {
        if self.in_flight == Some(cell) {
            self.in_flight = None;
        }
        self.settled.insert(cell)
    }

    /// Mark `cell` as held by the unit currently moving.  Replaces any
    /// previous in-flight cell.
    #[inline]
    pub fn begin_flight(&mut self, cell: Cell) {
        self.in_flight = Some(cell);
    }

    #[inline]
    pub fn end_flight(&mut self) {
        self.in_flight = None;
    }

    #[inline]
    pub fn in_flight(&self) -> Option<Cell> {
        self.in_flight
    }

    /// Number of settled cells.
    pub fn len(&self) -> usize {
        self.settled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }

    /// Settled cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.settled.iter().copied()
    }

    /// Drop everything.  Only used when a run is reset.
    pub fn clear(&mut self) {
        self.settled.clear();
        self.in_flight = None;
    }
}
