//! The `Sim` struct and its placement loop.

use cf_core::{Pose, SimConfig, SimRng, Stage, UnitId};
use cf_motion::{Animator, CancelToken, MotionSequencer, SpawnEffect};
use cf_schedule::PlacementQueue;
use cf_spatial::{Occupancy, Router};
use cf_units::{UnitPhase, UnitStore};

use crate::builder::make_units;
use crate::{SimObserver, SimResult};

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Totals reported at the end of a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub units:    usize,
    pub settled:  usize,
    pub stranded: usize,
    /// Single-cell moves played across all settled units.
    pub moves:    usize,
    /// Search cells expanded across all successful route queries.
    pub expanded: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The placement driver.
///
/// Units are handled strictly one at a time, in queue order:
///
/// 1. **Dequeue** the lowest pending destination.
/// 2. **Reveal** it at its spawn cell through the [`SpawnEffect`].
/// 3. **Route** from spawn to destination over the current occupancy.
/// 4. **Roll** along the route; the last segment commits the destination.
///
/// A failed route leaves the unit `Stranded` and the loop moves on; see
/// [`retry_stranded`](Self::retry_stranded).  Because no two units are ever
/// in motion together, the occupancy only grows between route queries and
/// needs no locking.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router, A: Animator> {
    pub config: SimConfig,

    /// Every unit of the current run, indexed by `UnitId`.
    pub units: UnitStore,

    /// Settled cells plus the cell currently being rolled into.
    pub occupancy: Occupancy,

    /// Units not yet dequeued.
    pub queue: PlacementQueue,

    pub router: R,

    pub animator: A,

    pub sequencer: MotionSequencer,

    pub(crate) spawn_effect: Box<dyn SpawnEffect>,
    pub(crate) rng:          SimRng,
    /// Caller-supplied units; `None` means "fill the grid".
    pub(crate) template:     Option<UnitStore>,
    pub(crate) stranded:     Vec<UnitId>,
    /// Whether queued units have been rendered hidden at their spawns.
    pub(crate) staged:       bool,
    pub(crate) moves:        usize,
    pub(crate) expanded:     usize,
}

impl<R: Router, A: Animator> Sim<R, A> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Place every queued unit, then report totals.
    ///
    /// Returns early with an error only for failures that make the run
    /// meaningless (cancellation, a broken lifecycle); an unreachable
    /// destination is not one of them.
    pub fn run<S: Stage, O: SimObserver>(
        &mut self,
        stage:    &mut S,
        observer: &mut O,
    ) -> SimResult<RunSummary> {
        log::info!(
            "run start: {} units queued, grid size {}",
            self.queue.len(),
            self.config.grid_size
        );
        observer.on_run_start(self.queue.len());

        while self.step(stage, observer)?.is_some() {}

        let summary = self.summary();
        log::info!(
            "run end: {}/{} settled, {} stranded, {} moves",
            summary.settled, summary.units, summary.stranded, summary.moves
        );
        observer.on_run_end(&summary);
        Ok(summary)
    }

    /// Process exactly one unit.  Returns `None` once the queue is empty.
    pub fn step<S: Stage, O: SimObserver>(
        &mut self,
        stage:    &mut S,
        observer: &mut O,
    ) -> SimResult<Option<UnitId>> {
        self.stage_hidden(stage);

        let Some((id, height)) = self.queue.dequeue() else {
            return Ok(None);
        };
        observer.on_unit_dequeued(id, height);

        let unit = self.units.get_mut(id)?;
        unit.advance(UnitPhase::Spawning)?;
        self.spawn_effect.reveal(unit, &mut self.animator, stage)?;
        unit.advance(UnitPhase::Routing)?;

        self.place(id, stage, observer)?;
        Ok(Some(id))
    }

    /// Process up to `n` units.  Returns how many were dequeued.
    pub fn run_units<S: Stage, O: SimObserver>(
        &mut self,
        n:        usize,
        stage:    &mut S,
        observer: &mut O,
    ) -> SimResult<usize> {
        let mut done = 0;
        while done < n && self.step(stage, observer)?.is_some() {
            done += 1;
        }
        Ok(done)
    }

    /// Route every stranded unit again, lowest destination first.
    ///
    /// Units that still have no route stay stranded.  Returns how many
    /// settled on this attempt.
    pub fn retry_stranded<S: Stage, O: SimObserver>(
        &mut self,
        stage:    &mut S,
        observer: &mut O,
    ) -> SimResult<usize> {
        let mut pending = std::mem::take(&mut self.stranded);
        pending.sort_by_key(|&id| self.units.get(id).map_or(i32::MAX, |u| u.destination.y));

        let mut settled = 0;
        for id in pending {
            self.units.get_mut(id)?.advance(UnitPhase::Routing)?;
            if self.place(id, stage, observer)? {
                settled += 1;
            }
        }
        log::info!("retry: {settled} settled, {} still stranded", self.stranded.len());
        Ok(settled)
    }

    /// Abort whatever is in progress and start over from the same config.
    ///
    /// Fires the animator's cancel token, clears waypoint markers, and
    /// rebuilds units, occupancy and queue.  A seeded config reproduces the
    /// previous layout; an unseeded one draws a new one.  The token is
    /// re-armed before returning, so the next `run` plays normally.
    pub fn reset<S: Stage>(&mut self, stage: &mut S) -> SimResult<()> {
        let token = self.animator.cancel_token();
        token.cancel();
        stage.clear_waypoints();

        self.rng = SimRng::from_seed_or_entropy(self.config.seed);
        self.lay_out()?;

        token.reset();
        log::info!("run reset: {} units queued", self.queue.len());
        Ok(())
    }

    /// A handle that aborts playback from another thread.  The run in
    /// progress returns an error for which
    /// [`SimError::is_cancelled`][crate::SimError::is_cancelled] holds.
    pub fn cancel_token(&self) -> CancelToken {
        self.animator.cancel_token()
    }

    /// Units whose last route query failed.
    pub fn stranded(&self) -> &[UnitId] {
        &self.stranded
    }

    /// `true` once every unit is settled.
    pub fn is_complete(&self) -> bool {
        self.queue.is_empty() && self.units.count_in(UnitPhase::Settled) == self.units.len()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            units:    self.units.len(),
            settled:  self.units.count_in(UnitPhase::Settled),
            stranded: self.stranded.len(),
            moves:    self.moves,
            expanded: self.expanded,
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Create units, queue them, and clear every piece of run state.
    pub(crate) fn lay_out(&mut self) -> SimResult<()> {
        self.units = make_units(&self.config, self.template.as_ref(), &mut self.rng);
        for unit in self.units.iter_mut() {
            unit.advance(UnitPhase::Queued)?;
        }
        self.queue = PlacementQueue::build(self.units.heights(), self.config.shuffle_ties, &mut self.rng);
        self.occupancy.clear();
        self.stranded.clear();
        self.staged = false;
        self.moves = 0;
        self.expanded = 0;
        Ok(())
    }

    /// Render every queued unit invisible at its spawn, once per run.
    fn stage_hidden<S: Stage>(&mut self, stage: &mut S) {
        if self.staged {
            return;
        }
        for unit in self.units.iter().filter(|u| u.phase() == UnitPhase::Queued) {
            stage.render_pose(unit.id, Pose::hidden(unit.spawn));
        }
        self.staged = true;
    }

    /// Route a unit in `Routing` and roll it home.  Returns `false` if it
    /// ended up stranded.
    fn place<S: Stage, O: SimObserver>(
        &mut self,
        id:       UnitId,
        stage:    &mut S,
        observer: &mut O,
    ) -> SimResult<bool> {
        let unit = self.units.get_mut(id)?;

        let route = match self.router.route(&self.occupancy, unit.current, unit.destination) {
            Ok(route) => route,
            Err(err) => {
                log::warn!("{id}: {err}; leaving it stranded");
                unit.advance(UnitPhase::Stranded)?;
                self.stranded.push(id);
                observer.on_route_failed(id, &err);
                return Ok(false);
            }
        };

        observer.on_route_found(id, &route);
        if self.config.show_waypoints {
            stage.show_waypoints(id, &route.cells);
        }

        let moves = self.sequencer.travel(
            unit,
            &route.cells,
            &mut self.animator,
            stage,
            &mut self.occupancy,
        )?;
        self.moves += moves;
        self.expanded += route.expanded;

        log::debug!(
            "{id} settled at {} after {moves} moves ({} cells expanded)",
            unit.destination, route.expanded
        );
        observer.on_settled(unit, moves);
        Ok(true)
    }
}
