//! Fluent builder for constructing a [`Sim`].

use rustc_hash::FxHashSet;

use cf_core::{SimConfig, SimRng};
use cf_motion::{Animator, DropIn, MotionSequencer, SpawnEffect};
use cf_spatial::{GridRouter, Occupancy, Router};
use cf_units::{UnitStore, UnitStoreBuilder};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<R, A>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — grid size, timing, seed, …
/// - `R: Router` — the path search (e.g. [`GridRouter`])
/// - `A: Animator` — the frame driver (e.g. [`cf_motion::FixedStepAnimator`])
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                          |
/// |----------------------|--------------------------------------------------|
/// | `.units(store)`      | one unit per grid cell, random spawns            |
/// | `.spawn_effect(e)`   | [`DropIn`] timed from `config.segment_secs`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::with_grid_router(config, FixedStepAnimator::new(1.0 / 60.0))
///     .build()?;
/// let summary = sim.run(&mut stage, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: Router, A: Animator> {
    config:       SimConfig,
    router:       R,
    animator:     A,
    units:        Option<UnitStore>,
    spawn_effect: Option<Box<dyn SpawnEffect>>,
}

impl<R: Router, A: Animator> SimBuilder<R, A> {
    pub fn new(config: SimConfig, router: R, animator: A) -> Self {
        Self {
            config,
            router,
            animator,
            units:        None,
            spawn_effect: None,
        }
    }

    /// Place exactly these units instead of filling the grid.
    ///
    /// The store is kept as a template: every reset starts again from it.
    /// Destinations must be distinct and every unit must still be pending.
    pub fn units(mut self, units: UnitStore) -> Self {
        self.units = Some(units);
        self
    }

    /// Replace the default reveal.
    pub fn spawn_effect(mut self, effect: Box<dyn SpawnEffect>) -> Self {
        self.spawn_effect = Some(effect);
        self
    }

    /// Validate inputs, lay out the units, build the placement queue, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<R, A>> {
        self.config.validate()?;

        if let Some(units) = &self.units {
            let mut seen = FxHashSet::default();
            for unit in units.iter() {
                if !seen.insert(unit.destination) {
                    return Err(SimError::DuplicateDestination(unit.destination));
                }
            }
        }

        let spawn_effect = self
            .spawn_effect
            .unwrap_or_else(|| Box::new(DropIn::new(self.config.segment_secs)));

        let mut sim = Sim {
            sequencer:    MotionSequencer::new(self.config.segment_secs),
            rng:          SimRng::from_seed_or_entropy(self.config.seed),
            config:       self.config,
            units:        UnitStore::default(),
            occupancy:    Occupancy::new(),
            queue:        Default::default(),
            router:       self.router,
            animator:     self.animator,
            spawn_effect,
            template:     self.units,
            stranded:     Vec::new(),
            staged:       false,
            moves:        0,
            expanded:     0,
        };
        sim.lay_out()?;
        Ok(sim)
    }
}

impl<A: Animator> SimBuilder<GridRouter, A> {
    /// Builder using the default [`GridRouter`] with `config.search_radius`.
    pub fn with_grid_router(config: SimConfig, animator: A) -> Self {
        let router = GridRouter::with_radius(config.search_radius);
        Self::new(config, router, animator)
    }
}

/// Fresh units for a run: a copy of the template, or a full grid.
pub(crate) fn make_units(
    config:   &SimConfig,
    template: Option<&UnitStore>,
    rng:      &mut SimRng,
) -> UnitStore {
    match template {
        Some(units) => units.clone(),
        None        => UnitStoreBuilder::new(config.grid_size).build(rng),
    }
}
