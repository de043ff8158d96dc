//! Run observer trait for progress reporting.

use cf_core::UnitId;
use cf_spatial::{Route, SpatialError};
use cf_units::Unit;

use crate::RunSummary;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points of a run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — failure counter
///
/// ```rust,ignore
/// struct Failures(usize);
///
/// impl SimObserver for Failures {
///     fn on_route_failed(&mut self, _unit: UnitId, _error: &SpatialError) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first unit of a run is dequeued.
    fn on_run_start(&mut self, _units: usize) {}

    /// A unit left the placement queue.  `height` is its destination `y`.
    fn on_unit_dequeued(&mut self, _unit: UnitId, _height: i32) {}

    /// A route was found and motion is about to start.
    fn on_route_found(&mut self, _unit: UnitId, _route: &Route) {}

    /// No route exists.  The unit is now `Stranded` and the run continues.
    fn on_route_failed(&mut self, _unit: UnitId, _error: &SpatialError) {}

    /// A unit reached its destination and was committed.
    fn on_settled(&mut self, _unit: &Unit, _moves: usize) {}

    /// Called once after the queue has drained.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
