//! Touch input handling for the drawer.
//!
//! This module converts raw platform touch events into drag signals the
//! controller consumes. It is deliberately stateless about the drawer
//! itself: the grab surface only knows screen geometry and the previous
//! touch sample.
//!
//! ## Modules
//!
//! - `signal` - Touch phase and drag signal types
//! - `grab_surface` - Capture strip: coordinate translation and speed measurement

mod grab_surface;
mod signal;

pub use grab_surface::GrabSurface;
pub use signal::{DragSignal, TouchPhase};
