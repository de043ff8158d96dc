//! `cf-schedule` — the order in which units are placed.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`queue`]   | `PlacementQueue` (`BTreeMap<height, VecDeque<UnitId>>`)  |
//!
//! # Ordering (summary)
//!
//! ```text
//! dequeue order = ascending destination height,
//!                 then insertion order within a height
//! ```
//!
//! A unit can only rest on units placed before it, so draining the queue
//! bottom-up keeps every destination supportable by the time its unit is
//! routed.

pub mod queue;


pub use queue::PlacementQueue;
