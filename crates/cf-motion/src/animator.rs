//! Frame drivers for tweens.
//!
//! # Pluggability
//!
//! The motion layer only ever talks to `&mut dyn Animator`, so a host that
//! owns a real render loop can implement [`Animator`] on top of it.  Two
//! implementations ship here:
//!
//! | Animator             | Behaviour                                              |
//! |----------------------|--------------------------------------------------------|
//! | [`FixedStepAnimator`] | steps a virtual clock by `frame_secs`, optionally sleeping in real time |
//! | [`InstantAnimator`]  | applies the final frame only                           |
//!
//! # Cancellation
//!
//! Every animator carries a [`CancelToken`].  Cancelling it makes the
//! in-progress and every later `play` return [`Playback::Cancelled`] until
//! the token is reset.  The token is `Send + Sync`, so another thread can
//! abort a run that is blocked inside `play`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::Tween;

/// How a `play` call ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Playback {
    Completed,
    Cancelled,
}

/// Shared abort flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Re-arm the token for a fresh run.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Runs one tween to completion, calling `apply` with eased progress.
pub trait Animator {
    /// Block until `tween` has finished or the token is cancelled.
    ///
    /// On `Completed`, the last value passed to `apply` is exactly the
    /// tween's end progress (`1.0`).
    fn play(&mut self, tween: Tween, apply: &mut dyn FnMut(f32)) -> Playback;

    /// A handle that aborts this animator's playback.
    fn cancel_token(&self) -> CancelToken;
}

// ── FixedStepAnimator ─────────────────────────────────────────────────────────

/// Steps a virtual clock in fixed `frame_secs` increments.
#[derive(Debug)]
pub struct FixedStepAnimator {
    pub frame_secs: f32,
    /// Sleep one frame of wall-clock time per step.
    pub realtime:   bool,
    cancel:         CancelToken,
    frames:         u64,
    elapsed_secs:   f64,
}

impl FixedStepAnimator {
    pub fn new(frame_secs: f32) -> Self {
        Self {
            frame_secs,
            realtime: false,
            cancel: CancelToken::new(),
            frames: 0,
            elapsed_secs: 0.0,
        }
    }

    pub fn realtime(mut self, on: bool) -> Self {
        self.realtime = on;
        self
    }

    /// Total frames emitted across every `play` call.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Virtual seconds elapsed across every `play` call.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    fn frame(&mut self, progress: f32, dt: f32, apply: &mut dyn FnMut(f32)) {
        if self.realtime && dt > 0.0 {
            std::thread::sleep(Duration::from_secs_f32(dt));
        }
        apply(progress);
        self.frames += 1;
        self.elapsed_secs += dt as f64;
    }
}

impl Animator for FixedStepAnimator {
    fn play(&mut self, tween: Tween, apply: &mut dyn FnMut(f32)) -> Playback {
        if self.cancel.is_cancelled() {
            return Playback::Cancelled;
        }
        if tween.is_instant() || self.frame_secs <= 0.0 {
            self.frame(1.0, 0.0, apply);
            return Playback::Completed;
        }

        let mut t = 0.0f32;
        loop {
            let dt = self.frame_secs.min(tween.duration - t);
            t += dt;
            if t >= tween.duration {
                self.frame(1.0, dt, apply);
                return Playback::Completed;
            }
            self.frame(tween.progress(t), dt, apply);
            if self.cancel.is_cancelled() {
                return Playback::Cancelled;
            }
        }
    }

    fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

// ── InstantAnimator ───────────────────────────────────────────────────────────

/// Jumps every tween straight to its end.  Useful for tests and for
/// computing a layout without watching it.
#[derive(Debug, Default)]
pub struct InstantAnimator {
    cancel: CancelToken,
    plays:  u64,
}

impl InstantAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed `play` calls.
    pub fn plays(&self) -> u64 {
        self.plays
    }
}

impl Animator for InstantAnimator {
    fn play(&mut self, _tween: Tween, apply: &mut dyn FnMut(f32)) -> Playback {
        if self.cancel.is_cancelled() {
            return Playback::Cancelled;
        }
        apply(1.0);
        self.plays += 1;
        Playback::Completed
    }

    fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}
