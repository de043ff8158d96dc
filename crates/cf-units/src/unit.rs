//! A single unit and its lifecycle phase.

use cf_core::{Cell, CfError, CfResult, UnitId};

/// Lifecycle of a unit.
///
/// ```text
/// Pending → Queued → Spawning → Routing → Settled
///                                  │  ▲
///                                  ▼  │ (explicit retry only)
///                               Stranded
/// ```
///
/// `Settled` is terminal.  `Stranded` marks a unit whose route search
/// failed; it stays un-settled unless the caller re-attempts it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum UnitPhase {
    Pending,
    Queued,
    Spawning,
    Routing,
    Settled,
    Stranded,
}

impl UnitPhase {
    pub fn name(self) -> &'static str {
        match self {
            UnitPhase::Pending  => "pending",
            UnitPhase::Queued   => "queued",
            UnitPhase::Spawning => "spawning",
            UnitPhase::Routing  => "routing",
            UnitPhase::Settled  => "settled",
            UnitPhase::Stranded => "stranded",
        }
    }

    /// Whether `self → next` is a legal edge of the lifecycle.
    pub fn can_advance_to(self, next: UnitPhase) -> bool {
        use UnitPhase::*;
        matches!(
            (self, next),
            (Pending, Queued)
                | (Queued, Spawning)
                | (Spawning, Routing)
                | (Routing, Settled)
                | (Routing, Stranded)
                | (Stranded, Routing)
        )
    }
}

/// One instance to be placed.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    /// Stable index into the store and the render-instance table.
    pub id: UnitId,

    /// Off-grid cell the unit appears at.
    pub spawn: Cell,

    /// Lattice position the unit must end at.
    pub destination: Cell,

    /// Where the unit is now.  Updated after every completed motion segment.
    pub current: Cell,

    phase: UnitPhase,
}

impl Unit {
    /// A pending unit standing on its spawn cell.
    pub fn new(id: UnitId, spawn: Cell, destination: Cell) -> Self {
        Self {
            id,
            spawn,
            destination,
            current: spawn,
            phase: UnitPhase::Pending,
        }
    }

    #[inline]
    pub fn phase(&self) -> UnitPhase {
        self.phase
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.phase == UnitPhase::Settled
    }

    /// Move along the lifecycle.
    ///
    /// Entering `Settled` additionally requires `current == destination`.
    pub fn advance(&mut self, next: UnitPhase) -> CfResult<()> {
        let at_target = next != UnitPhase::Settled || self.current == self.destination;
        if !self.phase.can_advance_to(next) || !at_target {
            return Err(CfError::PhaseTransition {
                unit: self.id,
                from: self.phase.name(),
                to:   next.name(),
            });
        }
        self.phase = next;
        Ok(())
    }
}
