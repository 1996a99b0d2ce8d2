//! Running-delta accumulator.

/// Tracks the running sum of deltas between successive scalar samples.
///
/// The first sample after construction or [`reset`](Accumulator::reset) only
/// arms the tracker; each later sample adds `last - current` to the value.
/// Used by the grab surface to measure cumulative drag travel per gesture.
#[derive(Debug, Default)]
pub struct Accumulator {
    value: f64,
    last_sample: f64,
    armed: bool,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next sample.
    pub fn accumulate(&mut self, current: f64) {
        if self.armed {
            self.value += self.last_sample - current;
        } else {
            self.armed = true;
        }
        self.last_sample = current;
    }

    /// Accumulated value since the last reset.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Zero the value and re-arm first-sample behavior.
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.armed = false;
    }
}
