//! Settle animation driver.
//!
//! A settle is a time-bounded interpolation from the drawer's live offset to
//! its resolved resting offset. The driver is host-pumped: the controller
//! advances it from [`DrawerController::tick`](crate::DrawerController::tick)
//! at the host's frame cadence and pins the offset exactly on completion.
//!
//! Easing is asymmetric by direction. Historical revisions of this control
//! disagreed on the pairing; the canonical choice here, for both alignments,
//! is spring-out when opening and cubic-out when closing.

use std::time::Duration;

use crate::constants::SPRING_OVERSHOOT;

/// Easing curve applied to normalized animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Decelerating cubic, `1 + (t-1)^3`. Used for closing.
    CubicOut,
    /// Back-out curve that overshoots the target before returning,
    /// `1 + (c+1)(t-1)^3 + c(t-1)^2` with `c = 1.70158`. Used for opening.
    SpringOut,
}

impl Easing {
    /// Map normalized progress `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::SpringOut => {
                let c = SPRING_OVERSHOOT;
                let u = t - 1.0;
                (c + 1.0) * u * u * u + c * u * u + 1.0
            }
        }
    }

    /// The curve a settle in the given direction uses.
    #[inline]
    pub fn for_direction(opening: bool) -> Self {
        if opening { Self::SpringOut } else { Self::CubicOut }
    }
}

/// One in-flight settle. Created per transition; superseded (dropped) by any
/// newer transition on the same offset.
#[derive(Debug)]
pub struct SettleAnimation {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl SettleAnimation {
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Advance by `dt` and return the interpolated offset. The offset equals
    /// [`target`](Self::target) exactly once [`is_finished`](Self::is_finished).
    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.value_at_elapsed()
    }

    fn value_at_elapsed(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.to
    }
}
