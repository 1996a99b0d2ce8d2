//! Touch capture surface.
//!
//! A thin, input-only region anchored near the drawer's hidden edge. It
//! translates raw platform touch coordinates into mid-screen-relative ones
//! and measures time between move samples to derive a drag speed. It holds
//! no drawer state; the controller owns all of that.

use std::time::Instant;

use tracing::trace;

use crate::accumulator::Accumulator;
use crate::config::ScreenMetrics;
use crate::geometry::translate_to_mid;
use crate::input::signal::{DragSignal, TouchPhase};

/// Converts platform touch phases into [`DragSignal`]s.
///
/// Raw coordinates are expected in density-normalized logical units, origin
/// at the left screen edge; platform adapters working in physical pixels
/// divide by density first (see [`ScreenMetrics::normalize`]).
#[derive(Debug)]
pub struct GrabSurface {
    metrics: ScreenMetrics,
    last_translated: f64,
    last_sample_at: Option<Instant>,
    travel: Accumulator,
}

impl GrabSurface {
    pub fn new(metrics: ScreenMetrics) -> Self {
        Self {
            metrics,
            last_translated: 0.0,
            last_sample_at: None,
            travel: Accumulator::new(),
        }
    }

    /// Swap in new display geometry (rotation, resize). Takes effect on the
    /// next touch sample.
    pub fn on_metrics_changed(&mut self, metrics: ScreenMetrics) {
        self.metrics = metrics;
    }

    pub fn on_touch_down(&mut self, raw_x: f64) -> DragSignal {
        self.on_touch_down_at(raw_x, Instant::now())
    }

    pub fn on_touch_move(&mut self, raw_x: f64) -> DragSignal {
        self.on_touch_move_at(raw_x, Instant::now())
    }

    pub fn on_touch_up(&mut self, raw_x: f64) -> DragSignal {
        self.on_touch_up_at(raw_x, Instant::now())
    }

    /// Timestamped variant of [`on_touch_down`](Self::on_touch_down); the
    /// speed computation is deterministic given explicit instants.
    pub fn on_touch_down_at(&mut self, raw_x: f64, at: Instant) -> DragSignal {
        let translated = self.translate(raw_x);
        self.last_translated = translated;
        self.last_sample_at = Some(at);
        self.travel.reset();
        self.travel.accumulate(translated);

        DragSignal {
            phase: TouchPhase::Down,
            raw_x,
            translated_x: translated,
            speed: 0.0,
        }
    }

    /// Timestamped variant of [`on_touch_move`](Self::on_touch_move).
    pub fn on_touch_move_at(&mut self, raw_x: f64, at: Instant) -> DragSignal {
        let current = self.translate(raw_x);
        let elapsed = self
            .last_sample_at
            .map(|then| at.saturating_duration_since(then).as_secs_f64())
            .unwrap_or(0.0);
        let speed = if elapsed == 0.0 {
            0.0
        } else {
            (self.last_translated - current).abs() / elapsed
        };
        trace!(raw_x, translated = current, speed, "grab move");

        self.travel.accumulate(current);
        self.last_translated = current;
        self.last_sample_at = Some(at);

        DragSignal {
            phase: TouchPhase::Move,
            raw_x,
            translated_x: current,
            speed,
        }
    }

    /// Timestamped variant of [`on_touch_up`](Self::on_touch_up). Timer
    /// state is irrelevant until the next down.
    pub fn on_touch_up_at(&mut self, raw_x: f64, _at: Instant) -> DragSignal {
        DragSignal {
            phase: TouchPhase::Up,
            raw_x,
            translated_x: self.translate(raw_x),
            speed: 0.0,
        }
    }

    /// Cumulative signed travel of the current gesture, `first - last` over
    /// all samples since the down.
    #[inline]
    pub fn travel(&self) -> f64 {
        self.travel.value()
    }

    #[inline]
    fn translate(&self, raw_x: f64) -> f64 {
        translate_to_mid(raw_x, self.metrics.width)
    }
}
