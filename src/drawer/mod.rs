//! The drawer state machine and its boundaries.
//!
//! ## Modules
//!
//! - `phase` - Explicit phase enum for the gesture/animation lifecycle
//! - `controller` - The core: drag consumption, release decision, settle driver
//! - `sink` - Render sink trait the host implements

mod controller;
mod phase;
mod sink;

pub use controller::DrawerController;
pub use phase::{DrawerPhase, SettleTarget};
pub use sink::{NullSink, RenderSink};
