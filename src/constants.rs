//! Crate-wide constants.
//!
//! Centralizes magic numbers and default tuning values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Geometry Defaults
// ============================================================================

/// Fraction of screen width the fully open drawer occupies
pub const DEFAULT_OPEN_FACTOR: f64 = 0.8;

/// Edge-proximity tolerance for the capture strip, in logical units
pub const DEFAULT_TOUCH_THRESHOLD: f64 = 22.0;

/// Distance past the screen edge at which the loader surface parks when hidden
pub const LOADER_PARK_MARGIN: f64 = 100.0;

// ============================================================================
// Release Decision
// ============================================================================

/// Release window around each settle target, as a multiple of the touch
/// threshold. A release within `RELEASE_WINDOW_FACTOR * touch_threshold` of
/// the open (or closed) master offset resolves to that endpoint; anything
/// outside both windows keeps the pre-drag state.
pub const RELEASE_WINDOW_FACTOR: f64 = 2.0;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Settle animation duration in milliseconds
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 200;

/// Nominal animation tick interval in milliseconds (one 60 Hz frame)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

/// Overshoot coefficient of the spring-out easing curve
pub const SPRING_OVERSHOOT: f64 = 1.70158;
