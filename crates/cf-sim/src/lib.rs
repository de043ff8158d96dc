//! `cf-sim` — the placement driver for the cubefill engine.
//!
//! # Placement loop
//!
//! ```text
//! build:  lay out units → mark Queued → PlacementQueue (height order)
//! run:    render every queued unit hidden at its spawn
//!         while let Some(unit) = queue.dequeue():
//!           ① Spawning — SpawnEffect::reveal
//!           ② Routing  — Router::route(occupancy, spawn, destination)
//!                          NoRoute → Stranded, observer notified, continue
//!           ③ Settled  — MotionSequencer::travel, commit destination
//! ```
//!
//! Exactly one unit is in flight at any time.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cf_core::{NullStage, SimConfig};
//! use cf_motion::InstantAnimator;
//! use cf_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { grid_size: 3, seed: Some(7), ..SimConfig::default() };
//! let mut sim = SimBuilder::with_grid_router(config, InstantAnimator::new()).build()?;
//! let summary = sim.run(&mut NullStage, &mut NoopObserver)?;
//! assert_eq!(summary.settled, 27);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunSummary, Sim};
