//! `cf-units` — unit records and their lifecycle.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`unit`]    | `Unit`, `UnitPhase` (one-way lifecycle state machine)      |
//! | [`store`]   | `UnitStore` — `Vec<Unit>` indexed by `UnitId`              |
//! | [`spawn`]   | `random_spawn` — off-footprint ground spawn cells          |
//! | [`builder`] | `UnitStoreBuilder` — one unit per grid cell, in layout order |
//!
//! All units of a run are created up front; the store never grows or
//! shrinks afterwards.

pub mod builder;
pub mod spawn;
pub mod store;
pub mod unit;


pub use builder::UnitStoreBuilder;
pub use spawn::{in_footprint, random_spawn};
pub use store::UnitStore;
pub use unit::{Unit, UnitPhase};
