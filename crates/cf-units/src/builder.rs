//! Fluent builder for a run's `UnitStore`.
//!
//! # Usage
//!
//! ```rust
//! use cf_core::SimRng;
//! use cf_units::UnitStoreBuilder;
//!
//! let mut rng = SimRng::new(42);
//! let store = UnitStoreBuilder::new(3).build(&mut rng);
//! assert_eq!(store.len(), 27);
//! ```

use cf_core::{Cell, SimRng, UnitId};

use crate::{Unit, UnitStore, random_spawn};

/// Creates one unit per grid cell.
///
/// Destinations are laid out `z`-major, `x` descending, `y` ascending; the
/// creation index becomes the `UnitId`.  Spawn cells are drawn from the
/// supplied RNG in id order, so a seeded RNG gives a reproducible layout.
pub struct UnitStoreBuilder {
    grid_size: u32,
    spawn:     Option<Cell>,
}

impl UnitStoreBuilder {
    pub fn new(grid_size: u32) -> Self {
        Self { grid_size, spawn: None }
    }

    /// Spawn every unit on `cell` instead of drawing random spawns.
    pub fn spawn_at(mut self, cell: Cell) -> Self {
        self.spawn = Some(cell);
        self
    }

    /// Destination cells in layout order.
    pub fn destinations(&self) -> Vec<Cell> {
        let n = self.grid_size as i32;
        let mut cells = Vec::with_capacity((self.grid_size as usize).pow(3));
        for z in 0..n {
            for x in (0..n).rev() {
                for y in 0..n {
                    cells.push(Cell::new(x, y, z));
                }
            }
        }
        cells
    }

    pub fn build(self, rng: &mut SimRng) -> UnitStore {
        let units = self
            .destinations()
            .into_iter()
            .enumerate()
            .map(|(i, destination)| {
                let spawn = match self.spawn {
                    Some(cell) => cell,
                    None       => random_spawn(self.grid_size, rng),
                };
                Unit::new(UnitId(i as u32), spawn, destination)
            })
            .collect();
        UnitStore::new(units)
    }
}
