//! `cf-spatial` — grid occupancy and path search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`occupancy`] | `Occupancy` — settled cells plus the one in-flight cell   |
//! | [`router`]    | `Router` trait, `Route`, `GridRouter`, `MoveCosts`        |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Single writer
//!
//! Only the simulation driver mutates the occupancy, and it does so strictly
//! between searches: a search for unit `k` always sees exactly the units
//! settled before it.  Nothing here is shared across threads, so there is no
//! locking.

pub mod error;
pub mod occupancy;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use occupancy::Occupancy;
pub use router::{GridRouter, MoveCosts, Route, Router};
