//! `cf-core` — foundational types for the `cubefill` placement engine.
//!
//! This crate is a dependency of every other `cf-*` crate.  It intentionally
//! has no `cf-*` dependencies and minimal external ones (`glam`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `UnitId`                                                 |
//! | [`cell`]   | `Cell`, `Axis`, `GROUND_LEVEL`, world-space conversion   |
//! | [`pose`]   | `Pose` (position, orientation, scale)                    |
//! | [`stage`]  | `Stage` render/effect contract, `Effect`, `NullStage`    |
//! | [`config`] | `SimConfig` and its validation                           |
//! | [`rng`]    | `SimRng` (seeded or entropy-backed)                      |
//! | [`error`]  | `CfError`, `CfResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Cell` and `SimConfig`. |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod pose;
pub mod rng;
pub mod stage;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Axis, Cell, GROUND_LEVEL};
pub use config::{MAX_GRID_SIZE, SimConfig};
pub use error::{CfError, CfResult};
pub use ids::UnitId;
pub use pose::Pose;
pub use rng::SimRng;
pub use stage::{Effect, NullStage, Stage};
