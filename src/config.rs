//! Configuration and screen metrics.
//!
//! All tuning values are validated once, up front. The gesture path itself
//! never fails: a controller that constructed successfully clamps every
//! input it receives afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_OPEN_FACTOR, DEFAULT_SETTLE_DURATION_MS, DEFAULT_TICK_INTERVAL_MS,
    DEFAULT_TOUCH_THRESHOLD,
};

/// Errors that can occur while validating configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Screen width must be strictly positive
    #[error("invalid screen width: {width} (must be > 0)")]
    InvalidWidth { width: f64 },

    /// Display density must be strictly positive
    #[error("invalid display density: {density} (must be > 0)")]
    InvalidDensity { density: f64 },

    /// Open factor must be in (0, 1]
    #[error("invalid open factor: {value} (must be in (0, 1])")]
    InvalidOpenFactor { value: f64 },

    /// Touch threshold must be strictly positive
    #[error("invalid touch threshold: {value} (must be > 0)")]
    InvalidTouchThreshold { value: f64 },

    /// Settle duration must be non-zero
    #[error("settle duration must be non-zero")]
    ZeroSettleDuration,

    /// Tick interval must be non-zero
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

/// Result type alias for configuration operations
pub type DrawerResult<T> = Result<T, ConfigError>;

/// Display geometry the drawer operates in, in density-normalized logical
/// units. Injected at construction and updated through
/// [`DrawerController::on_metrics_changed`](crate::DrawerController::on_metrics_changed)
/// when the surface resizes (rotation), never read from ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    /// Screen width in logical units
    pub width: f64,
    /// Physical-pixel to logical-unit ratio
    pub density: f64,
}

impl ScreenMetrics {
    /// Validate and build screen metrics. Fails fast on degenerate geometry
    /// so the offset formulas downstream never see a non-positive width.
    pub fn new(width: f64, density: f64) -> DrawerResult<Self> {
        if !(width > 0.0) {
            return Err(ConfigError::InvalidWidth { width });
        }
        if !(density > 0.0) {
            return Err(ConfigError::InvalidDensity { density });
        }
        Ok(Self { width, density })
    }

    /// Convert a physical-pixel coordinate from the platform input layer
    /// into logical units.
    #[inline]
    pub fn normalize(&self, physical_x: f64) -> f64 {
        physical_x / self.density
    }
}

/// Construction-time drawer configuration.
///
/// Serde-friendly so hosts can keep it next to their other settings; every
/// field has a standalone default and absent fields deserialize to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    /// Fraction of screen width the fully open drawer occupies, in (0, 1]
    pub open_factor: f64,
    /// Edge-proximity tolerance in logical units; also sizes the release
    /// decision windows
    pub touch_threshold: f64,
    /// Settle animation duration in milliseconds
    pub settle_duration_ms: u64,
    /// Nominal animation tick interval in milliseconds
    pub tick_interval_ms: u64,
    /// Anchor the drawer to the right screen edge instead of the left
    pub right_aligned: bool,
    /// Start with the drawer open
    pub start_open: bool,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            open_factor: DEFAULT_OPEN_FACTOR,
            touch_threshold: DEFAULT_TOUCH_THRESHOLD,
            settle_duration_ms: DEFAULT_SETTLE_DURATION_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            right_aligned: false,
            start_open: false,
        }
    }
}

impl DrawerConfig {
    /// Check every invariant. Called by the controller constructor; hosts
    /// loading configs from disk can call it early for better diagnostics.
    pub fn validate(&self) -> DrawerResult<()> {
        if !(self.open_factor > 0.0 && self.open_factor <= 1.0) {
            return Err(ConfigError::InvalidOpenFactor {
                value: self.open_factor,
            });
        }
        if !(self.touch_threshold > 0.0) {
            return Err(ConfigError::InvalidTouchThreshold {
                value: self.touch_threshold,
            });
        }
        if self.settle_duration_ms == 0 {
            return Err(ConfigError::ZeroSettleDuration);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Settle duration as a [`std::time::Duration`].
    #[inline]
    pub fn settle_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.settle_duration_ms)
    }

    /// Nominal tick interval as a [`std::time::Duration`]. The controller is
    /// host-pumped; this is the cadence the host should schedule
    /// [`DrawerController::tick`](crate::DrawerController::tick) at.
    #[inline]
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }
}
