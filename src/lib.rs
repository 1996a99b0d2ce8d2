//! drawerkit - headless gesture-to-motion core for a slide-in drawer.
//!
//! A master panel slides in from a screen edge over a detail view, driven by
//! horizontal drag gestures, with snap-to-open/closed decision logic,
//! velocity measurement on the input side, a busy-state loading overlay, and
//! optional left/right mirroring.
//!
//! The crate is deliberately UI-framework-free. The host supplies three
//! things: a stream of touch events with screen-space X coordinates, the
//! screen width, and a [`RenderSink`] that applies horizontal offsets to its
//! master panel, capture strip, and loader surfaces.
//!
//! ## Wiring
//!
//! ```ignore
//! use drawerkit::{DrawerConfig, DrawerController, GrabSurface, ScreenMetrics};
//!
//! let metrics = ScreenMetrics::new(1080.0, 1.0)?;
//! let drawer = DrawerController::new(DrawerConfig::default(), metrics, Box::new(sink))?;
//! let mut grab = GrabSurface::new(metrics);
//!
//! // Per platform touch event:
//! drawer.on_drag(&grab.on_touch_down(x));
//! drawer.on_drag(&grab.on_touch_move(x));
//! drawer.on_drag(&grab.on_touch_up(x));
//!
//! // Per frame, at drawer.config().tick_interval():
//! drawer.tick(frame_dt);
//! ```
//!
//! ## Architecture
//!
//! - [`input`] - touch capture: coordinate translation and speed measurement
//! - [`drawer`] - the state machine, release decision, and settle driver
//! - [`geometry`] - the shared offset formulas, in one place
//! - [`animation`] - easing curves and the settle interpolator
//! - [`config`] - validated, serde-friendly configuration

pub mod accumulator;
pub mod animation;
pub mod config;
pub mod constants;
pub mod drawer;
pub mod geometry;
pub mod input;

pub use accumulator::Accumulator;
pub use animation::{Easing, SettleAnimation};
pub use config::{ConfigError, DrawerConfig, DrawerResult, ScreenMetrics};
pub use drawer::{DrawerController, DrawerPhase, NullSink, RenderSink, SettleTarget};
pub use input::{DragSignal, GrabSurface, TouchPhase};
