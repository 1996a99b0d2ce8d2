//! Drawer controller - the gesture-to-motion state machine.
//!
//! Consumes [`DragSignal`]s, owns the live master/grab offsets, resolves
//! releases to an open/closed outcome, and drives the settle animation.
//! Programmatic opens and closes take the same animation path as a gesture
//! release.
//!
//! Mouse move arrives very frequently during a drag (60+ times per second),
//! so the move path is a single clip-and-assign under the lock with an early
//! exit for non-drag phases.

use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::animation::{Easing, SettleAnimation};
use crate::config::{DrawerConfig, DrawerResult, ScreenMetrics};
use crate::constants::LOADER_PARK_MARGIN;
use crate::drawer::phase::{DrawerPhase, SettleTarget};
use crate::drawer::sink::RenderSink;
use crate::geometry::{
    self, anchor_offset, clip, closed_master_offset, drag_interval, grab_offset_for,
    open_master_offset, Alignment,
};
use crate::input::{DragSignal, TouchPhase};

type OpenObserver = Box<dyn Fn(bool) + Send>;

/// Gesture-driven drawer state machine.
///
/// All mutable state lives behind an internal lock so that animation
/// start/abort and the open/closed flag flip appear atomic to callers
/// arriving on different call stacks (an observer reacting to a programmatic
/// toggle, a busy-flag flip from an async task). The render sink is invoked
/// under that lock; sink implementations must not call back in.
pub struct DrawerController {
    config: DrawerConfig,
    inner: Mutex<DrawerCore>,
    observers: Mutex<Vec<OpenObserver>>,
}

/// Lock-guarded mutable state.
struct DrawerCore {
    metrics: ScreenMetrics,
    sink: Box<dyn RenderSink>,
    phase: DrawerPhase,
    /// Logical open flag. Set at settle start (matching the gesture or the
    /// programmatic request); the resting offsets catch up when the
    /// animation completes.
    is_open: bool,
    /// The last value observers were told about.
    settled_open: bool,
    right_aligned: bool,
    busy: bool,
    master_offset: f64,
    grab_offset: f64,
    animation: Option<SettleAnimation>,
}

impl DrawerCore {
    #[inline]
    fn alignment(&self) -> Alignment {
        Alignment::from_right_aligned(self.right_aligned)
    }

    fn open_target(&self, config: &DrawerConfig) -> f64 {
        open_master_offset(self.metrics.width, config.open_factor, self.alignment())
    }

    fn closed_target(&self) -> f64 {
        closed_master_offset(self.metrics.width, self.alignment())
    }

    fn master_target(&self, config: &DrawerConfig, open: bool) -> f64 {
        if open {
            self.open_target(config)
        } else {
            self.closed_target()
        }
    }

    fn set_master(&mut self, x: f64) {
        self.master_offset = x;
        self.sink.set_master_offset(x);
    }

    fn set_grab(&mut self, x: f64) {
        self.grab_offset = x;
        self.sink.set_grab_offset(x);
    }

    fn park_or_show_loader(&mut self) {
        let x = if self.busy {
            0.0
        } else {
            self.metrics.width + LOADER_PARK_MARGIN
        };
        self.sink.set_loader_offset(x);
    }

    /// Abort any in-flight settle and pin both offsets to the resting
    /// position for the current open flag. No animation.
    fn snap_to_rest(&mut self, config: &DrawerConfig) {
        self.animation = None;
        self.phase = DrawerPhase::resting(self.is_open);
        let master = self.master_target(config, self.is_open);
        self.set_master(master);
        self.set_grab(grab_offset_for(
            master,
            config.touch_threshold,
            self.alignment(),
        ));
    }

    /// Record that the drawer reached a resting value; returns the new open
    /// flag when it differs from the last one observers were told about.
    fn take_settled_change(&mut self) -> Option<bool> {
        if self.is_open != self.settled_open {
            self.settled_open = self.is_open;
            Some(self.is_open)
        } else {
            None
        }
    }

    /// Begin a settle toward `open`. Always aborts the previous animation
    /// before installing the new driver so two interpolators never fight
    /// over the master offset. The grab strip snaps to its target here; it
    /// is never animated.
    fn start_settle(&mut self, config: &DrawerConfig, open: bool) {
        self.animation = None;

        self.is_open = open;
        self.phase = DrawerPhase::Animating {
            target: SettleTarget::from_open(open),
        };

        let to = self.master_target(config, open);
        self.set_grab(grab_offset_for(
            to,
            config.touch_threshold,
            self.alignment(),
        ));

        let from = self.master_offset;
        debug!(open, from, to, "settle started");
        self.animation = Some(SettleAnimation::new(
            from,
            to,
            config.settle_duration(),
            Easing::for_direction(open),
        ));
    }
}

impl DrawerController {
    /// Build a controller. Fails fast on degenerate configuration; the
    /// gesture path afterwards never errors, it clamps.
    ///
    /// The initial resting offsets (and the parked loader) are pushed to the
    /// sink before this returns.
    pub fn new(
        config: DrawerConfig,
        metrics: ScreenMetrics,
        sink: Box<dyn RenderSink>,
    ) -> DrawerResult<Self> {
        config.validate()?;
        // Metrics fields are public for serde; re-check them here.
        let metrics = ScreenMetrics::new(metrics.width, metrics.density)?;

        let mut core = DrawerCore {
            metrics,
            sink,
            phase: DrawerPhase::resting(config.start_open),
            is_open: config.start_open,
            settled_open: config.start_open,
            right_aligned: config.right_aligned,
            busy: false,
            master_offset: 0.0,
            grab_offset: 0.0,
            animation: None,
        };
        core.snap_to_rest(&config);
        core.park_or_show_loader();

        Ok(Self {
            config,
            inner: Mutex::new(core),
            observers: Mutex::new(Vec::new()),
        })
    }

    // ------------------------------------------------------------------
    // Gesture input
    // ------------------------------------------------------------------

    /// Feed one drag signal from the grab surface.
    pub fn on_drag(&self, signal: &DragSignal) {
        match signal.phase {
            TouchPhase::Down => self.on_touch_down(signal),
            TouchPhase::Move => self.on_touch_move(signal),
            TouchPhase::Up => self.on_touch_up(signal),
        }
    }

    fn on_touch_down(&self, signal: &DragSignal) {
        let mut core = self.inner.lock();
        match core.phase {
            DrawerPhase::Dragging => {
                // Double down without an up in between; keep the drag.
                warn!(raw_x = signal.raw_x, "touch down during active drag");
            }
            DrawerPhase::Animating { .. } => {
                // Grabbing a settling drawer: the finger wins, the
                // interpolator is cancelled where it stands.
                core.animation = None;
                core.phase = DrawerPhase::Dragging;
                debug!(offset = core.master_offset, "drag grabbed settling drawer");
            }
            DrawerPhase::Closed | DrawerPhase::Open => {
                core.phase = DrawerPhase::Dragging;
                debug!(translated_x = signal.translated_x, "drag started");
            }
        }
    }

    fn on_touch_move(&self, signal: &DragSignal) {
        let mut core = self.inner.lock();
        if !core.phase.is_dragging() {
            trace!(translated_x = signal.translated_x, "move outside drag ignored");
            return;
        }

        let anchor = anchor_offset(signal.translated_x, core.metrics.width, core.alignment());
        let (min, max) = drag_interval(
            core.metrics.width,
            self.config.open_factor,
            core.alignment(),
        );
        let clipped = clip(anchor, min, max);
        trace!(anchor, clipped, speed = signal.speed, "drag move");
        core.set_master(clipped);
    }

    fn on_touch_up(&self, signal: &DragSignal) {
        let mut core = self.inner.lock();
        if !core.phase.is_dragging() {
            // Contract violation by the input layer; treat as "no drag
            // occurred" and leave the open flag untouched.
            warn!(
                phase = ?core.phase,
                raw_x = signal.raw_x,
                "touch release without active drag"
            );
            return;
        }

        let anchor = anchor_offset(signal.translated_x, core.metrics.width, core.alignment());
        let open = geometry::resolve_release(
            anchor,
            core.open_target(&self.config),
            core.closed_target(),
            self.config.touch_threshold,
            core.is_open,
        );
        debug!(anchor, open, speed = signal.speed, "release resolved");
        core.start_settle(&self.config, open);
    }

    // ------------------------------------------------------------------
    // Animation pump
    // ------------------------------------------------------------------

    /// Advance the settle animation by `dt`. Host-pumped at
    /// [`DrawerConfig::tick_interval`]; a no-op when nothing is animating.
    pub fn tick(&self, dt: Duration) {
        let settled = {
            let mut core = self.inner.lock();
            let (value, finished) = {
                let Some(animation) = core.animation.as_mut() else {
                    return;
                };
                let value = animation.advance(dt);
                (value, animation.is_finished())
            };

            core.set_master(value);
            if !finished {
                None
            } else {
                core.animation = None;
                core.phase = DrawerPhase::resting(core.is_open);
                debug!(open = core.is_open, offset = value, "settle finished");
                core.take_settled_change()
            }
        };

        if let Some(open) = settled {
            self.notify_open_changed(open);
        }
    }

    // ------------------------------------------------------------------
    // Runtime properties
    // ------------------------------------------------------------------

    /// Logical open flag. During a settle this already reflects the target.
    pub fn is_open(&self) -> bool {
        self.inner.lock().is_open
    }

    /// Animated open/close, identical to the gesture release path. Any
    /// in-flight settle is aborted first.
    pub fn set_open(&self, open: bool) {
        let mut core = self.inner.lock();
        core.start_settle(&self.config, open);
    }

    pub fn is_right_aligned(&self) -> bool {
        self.inner.lock().right_aligned
    }

    /// Flip the anchoring edge. Both offsets snap immediately to the resting
    /// position for the current open flag; no animation, and a drag or
    /// settle in progress is dropped.
    pub fn set_right_aligned(&self, right_aligned: bool) {
        let settled = {
            let mut core = self.inner.lock();
            core.right_aligned = right_aligned;
            debug!(right_aligned, "alignment changed");
            core.snap_to_rest(&self.config);
            core.take_settled_change()
        };
        if let Some(open) = settled {
            self.notify_open_changed(open);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.inner.lock().busy
    }

    /// Show or park the loader surface. Fully independent of the drawer's
    /// open/close sub-machine.
    pub fn set_busy(&self, busy: bool) {
        let mut core = self.inner.lock();
        core.busy = busy;
        debug!(busy, "busy changed");
        core.park_or_show_loader();
    }

    /// New display geometry (rotation, resize). Offsets snap to the resting
    /// position for the current open flag and the loader re-parks against
    /// the new width.
    pub fn on_metrics_changed(&self, metrics: ScreenMetrics) {
        let settled = {
            let mut core = self.inner.lock();
            core.metrics = metrics;
            debug!(width = metrics.width, "metrics changed");
            core.snap_to_rest(&self.config);
            core.park_or_show_loader();
            core.take_settled_change()
        };
        if let Some(open) = settled {
            self.notify_open_changed(open);
        }
    }

    /// The detail area navigated (page push or pop); an open drawer closes.
    pub fn on_navigation_changed(&self) {
        let mut core = self.inner.lock();
        if core.is_open {
            debug!("navigation change closes drawer");
            core.start_settle(&self.config, false);
        }
    }

    /// Register an observer fired whenever `is_open` settles to a NEW value
    /// (post-animation). Callbacks run on the ticking thread and must not
    /// call back into the controller.
    pub fn subscribe_open_changed(&self, observer: impl Fn(bool) + Send + 'static) {
        self.observers.lock().push(Box::new(observer));
    }

    fn notify_open_changed(&self, open: bool) {
        for observer in self.observers.lock().iter() {
            observer(open);
        }
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    pub fn phase(&self) -> DrawerPhase {
        self.inner.lock().phase
    }

    /// Current master-panel translation.
    pub fn master_offset(&self) -> f64 {
        self.inner.lock().master_offset
    }

    /// Current capture-strip translation.
    pub fn grab_offset(&self) -> f64 {
        self.inner.lock().grab_offset
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn metrics(&self) -> ScreenMetrics {
        self.inner.lock().metrics
    }
}
