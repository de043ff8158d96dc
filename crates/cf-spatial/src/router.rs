//! Routing trait and the support-aware grid search.
//!
//! # Pluggability
//!
//! `cf-sim` calls routing via the [`Router`] trait, so applications can swap
//! in custom implementations without touching the driver.  The default
//! [`GridRouter`] is described below.
//!
//! # Search order
//!
//! The frontier is a priority queue keyed by `(Manhattan distance from the
//! spawn cell, insertion order)`.  Costs are relaxed as usual: a cell is
//! re-queued whenever a strictly cheaper way to reach it is found, and
//! the predecessor map always points along the cheapest known way.  Stale
//! queue entries are skipped on pop.
//!
//! # Movement rules
//!
//! From a cell `c`:
//!
//! | Move       | Offered when                                             |
//! |------------|----------------------------------------------------------|
//! | N / E / S / W | `c` is unsupported, or the target is supported      |
//! | up         | always                                                   |
//! | down       | `c` is above ground and itself unsupported               |
//!
//! Occupied targets are discarded outright, and so are targets farther than
//! `radius` from the spawn cell.  A mover standing on something never steps
//! off an unsupported ledge; it climbs first.  Once airborne it may cross
//! open cells and drop, which is how it reaches a gap whose neighbours have
//! already settled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use cf_core::Cell;

use crate::{Occupancy, SpatialError, SpatialResult};

/// Default search radius in lattice units.
pub const DEFAULT_RADIUS: u32 = 40;

/// Horizontal neighbour offsets `(dx, dz)`: north, east, south, west.
const HORIZONTAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Cells to move to, in order.  Excludes the start cell, includes the
    /// destination.  Consecutive cells differ by one step on one axis.
    pub cells: Vec<Cell>,
    /// Sum of move costs along `cells`.
    pub cost: u32,
    /// Number of frontier cells expanded to find the route.
    pub expanded: usize,
}

impl Route {
    /// The zero-move route returned when start and destination coincide.
    pub fn trivial() -> Self {
        Self { cells: Vec::new(), cost: 0, expanded: 0 }
    }

    /// Number of single-cell moves.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if no moves are needed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router {
    /// Compute a route from `from` to `to` over `occupancy`.
    ///
    /// `from == to` yields an empty route, not an error.  Returns
    /// [`SpatialError::NoRoute`] when the destination cannot be reached.
    fn route(&self, occupancy: &Occupancy, from: Cell, to: Cell) -> SpatialResult<Route>;
}

// ── GridRouter ────────────────────────────────────────────────────────────────

/// Per-move cost weights.
///
/// Vertical moves must cost at least as much as horizontal ones so that the
/// search prefers ground-level detours over needless climbing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveCosts {
    pub horizontal: u32,
    pub vertical:   u32,
}

impl Default for MoveCosts {
    fn default() -> Self {
        Self { horizontal: 1, vertical: 2 }
    }
}

/// The default [`Router`]: support-aware search bounded by `radius`.
#[derive(Copy, Clone, Debug)]
pub struct GridRouter {
    pub radius: u32,
    pub costs:  MoveCosts,
}

impl Default for GridRouter {
    fn default() -> Self {
        Self { radius: DEFAULT_RADIUS, costs: MoveCosts::default() }
    }
}

impl GridRouter {
    pub fn with_radius(radius: u32) -> Self {
        Self { radius, ..Self::default() }
    }
}

impl Router for GridRouter {
    fn route(&self, occupancy: &Occupancy, from: Cell, to: Cell) -> SpatialResult<Route> {
        search(occupancy, from, to, self.radius, self.costs)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Frontier entry (min-heap via reversed ordering).
struct FrontierEntry {
    /// Manhattan distance from the spawn cell; the primary key.
    distance: u32,
    /// Insertion counter; earlier entries win ties.
    seq:      u64,
    cell:     Cell,
    /// Cost of `cell` when this entry was pushed.  Older, costlier entries
    /// are stale.
    cost:     u32,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap: smallest distance, then oldest, is "greatest".
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Candidate moves out of `cell`, tagged `true` when vertical.
fn candidate_moves(occupancy: &Occupancy, cell: Cell, out: &mut Vec<(Cell, bool)>) {
    out.clear();
    let floating = !cell.is_ground() && !occupancy.supported(cell);

    // Ground-level targets are always supported, so this also offers all
    // four directions at ground level.
    for (dx, dz) in HORIZONTAL {
        let next = Cell::new(cell.x + dx, cell.y, cell.z + dz);
        if floating || occupancy.supported(next) {
            out.push((next, false));
        }
    }

    out.push((cell.above(), true));

    if floating {
        out.push((cell.below(), true));
    }
}

fn search(
    occupancy: &Occupancy,
    from:      Cell,
    to:        Cell,
    radius:    u32,
    costs:     MoveCosts,
) -> SpatialResult<Route> {
    if from == to {
        return Ok(Route::trivial());
    }
    if occupancy.occupied(to) || to.manhattan(from) > radius {
        log::trace!("route {from} -> {to} rejected up front");
        return Err(SpatialError::NoRoute { from, to });
    }

    // cost[c] = cheapest known cost to reach c.
    let mut cost: FxHashMap<Cell, u32> = FxHashMap::default();
    // came_from[c] = predecessor of c on its cheapest known way.
    let mut came_from: FxHashMap<Cell, Cell> = FxHashMap::default();
    let mut frontier = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut expanded = 0usize;
    let mut moves = Vec::with_capacity(6);

    cost.insert(from, 0);
    frontier.push(FrontierEntry { distance: 0, seq, cell: from, cost: 0 });

    while let Some(entry) = frontier.pop() {
        let cell = entry.cell;
        let base = cost[&cell];
        if entry.cost > base {
            continue;
        }

        if cell == to {
            log::trace!("route {from} -> {to}: cost {base}, {expanded} expanded");
            return Ok(reconstruct(&came_from, from, to, costs, expanded));
        }

        expanded += 1;
        candidate_moves(occupancy, cell, &mut moves);

        for &(next, vertical) in &moves {
            let distance = next.manhattan(from);
            if distance > radius || occupancy.occupied(next) {
                continue;
            }

            let step = if vertical { costs.vertical } else { costs.horizontal };
            let new_cost = base.saturating_add(step);

            if cost.get(&next).is_none_or(|&known| new_cost < known) {
                cost.insert(next, new_cost);
                came_from.insert(next, cell);
                seq += 1;
                frontier.push(FrontierEntry { distance, seq, cell: next, cost: new_cost });
            }
        }
    }

    log::trace!("route {from} -> {to}: frontier exhausted after {expanded} expanded");
    Err(SpatialError::NoRoute { from, to })
}

/// Walk predecessors back from `to`.  The cost is summed over the walked
/// cells because a predecessor may have been improved after its successor
/// was recorded.
fn reconstruct(
    came_from: &FxHashMap<Cell, Cell>,
    from:      Cell,
    to:        Cell,
    costs:     MoveCosts,
    expanded:  usize,
) -> Route {
    let mut cells = Vec::new();
    let mut cost = 0u32;
    let mut cur = to;
    while cur != from {
        cells.push(cur);
        let Some(&prev) = came_from.get(&cur) else { break };
        cost += if prev.y == cur.y { costs.horizontal } else { costs.vertical };
        cur = prev;
    }
    cells.reverse();
    Route { cells, cost, expanded }
}
