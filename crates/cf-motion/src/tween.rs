//! Durations and easing curves.

/// Progress curves.  Names follow the usual `power2` family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic deceleration.
    PowerTwoOut,
    /// Quadratic acceleration, then deceleration.
    PowerTwoInOut,
}

impl Easing {
    /// Map linear progress `t ∈ [0, 1]` onto the curve.  Input outside the
    /// range is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear      => t,
            Easing::PowerTwoOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::PowerTwoInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

/// A timed interpolation with no target of its own.  Whoever plays it maps
/// the eased progress onto whatever it animates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween {
    /// Length in seconds.  Zero means "jump straight to the end".
    pub duration: f32,
    pub easing:   Easing,
}

impl Tween {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self { duration: duration.max(0.0), easing }
    }

    /// Eased progress after `elapsed` seconds.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.easing.apply(elapsed / self.duration)
    }

    #[inline]
    pub fn is_instant(&self) -> bool {
        self.duration <= 0.0
    }
}
