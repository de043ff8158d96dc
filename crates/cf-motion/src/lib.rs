//! `cf-motion` — turning routes into rendered motion.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`tween`]     | `Easing`, `Tween` — duration + easing curve                   |
//! | [`animator`]  | `Animator` trait, `FixedStepAnimator`, `InstantAnimator`, `CancelToken` |
//! | [`segment`]   | `Segment` — one single-axis roll between adjacent cells       |
//! | [`sequencer`] | `MotionSequencer` — plays a route segment by segment, then commits |
//! | [`reveal`]    | `SpawnEffect` trait, `DropIn` default reveal                  |
//! | [`error`]     | `MotionError`, `MotionResult<T>`                              |
//!
//! # Timing model
//!
//! Nothing here owns a clock.  An [`Animator`] runs one [`Tween`] at a time
//! to completion, calling back with eased progress on every frame, and
//! returns only when the tween has finished or was cancelled.  Segments of a
//! route are therefore strictly sequential; the rotation and translation of
//! a single segment share one progress value.

pub mod animator;
pub mod error;
pub mod reveal;
pub mod segment;
pub mod sequencer;
pub mod tween;

#[cfg(test)]
mod tests;

pub use animator::{Animator, CancelToken, FixedStepAnimator, InstantAnimator, Playback};
pub use error::{MotionError, MotionResult};
pub use reveal::{DropIn, SpawnEffect};
pub use segment::Segment;
pub use sequencer::MotionSequencer;
pub use tween::{Easing, Tween};
