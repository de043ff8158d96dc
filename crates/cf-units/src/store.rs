//! `UnitStore` — every unit of a run, indexed by `UnitId`.

use cf_core::{CfError, CfResult, UnitId};

use crate::{Unit, UnitPhase};

/// Dense unit storage.  `units[i].id == UnitId(i)` always holds.
#[derive(Clone, Debug, Default)]
pub struct UnitStore {
    units: Vec<Unit>,
}

impl UnitStore {
    /// Wrap `units`, re-numbering ids to match their slots.
    pub fn new(mut units: Vec<Unit>) -> Self {
        for (i, unit) in units.iter_mut().enumerate() {
            unit.id = UnitId(i as u32);
        }
        Self { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, id: UnitId) -> CfResult<&Unit> {
        self.units.get(id.index()).ok_or(CfError::UnitNotFound(id))
    }

    pub fn get_mut(&mut self, id: UnitId) -> CfResult<&mut Unit> {
        self.units.get_mut(id.index()).ok_or(CfError::UnitNotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.iter_mut()
    }

    /// Number of units currently in `phase`.
    pub fn count_in(&self, phase: UnitPhase) -> usize {
        self.units.iter().filter(|u| u.phase() == phase).count()
    }

    /// `(id, destination height)` for every unit, in id order.  This is the
    /// input the placement queue is built from.
    pub fn heights(&self) -> Vec<(UnitId, i32)> {
        self.units.iter().map(|u| (u.id, u.destination.y)).collect()
    }
}
