//! Drawer phase machine - explicit states for the gesture/animation lifecycle.
//!
//! A single enum tracks what currently drives the master offset, making
//! impossible states unrepresentable (a drawer cannot be both dragged and
//! settling).
//!
//! ## State Transitions
//!
//! ```text
//! Closed|Open      -> Dragging            (touch down on the capture strip)
//! Animating(_)     -> Dragging            (touch down grabs a settling drawer)
//! Dragging         -> Dragging            (touch move - live offset update)
//! Dragging         -> Animating(target)   (touch up - release decision)
//! Any              -> Animating(target)   (programmatic set_open)
//! Animating(t)     -> t                   (settle completion - offsets pinned)
//! Any              -> Closed|Open         (alignment/metrics snap)
//! ```

/// Resting endpoint a settle animation is headed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleTarget {
    Open,
    Closed,
}

impl SettleTarget {
    #[inline]
    pub fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// What currently drives the drawer's master offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerPhase {
    /// At rest, fully closed
    Closed,
    /// At rest, fully open
    Open,
    /// A finger owns the offset
    Dragging,
    /// A settle animation owns the offset
    Animating { target: SettleTarget },
}

impl DrawerPhase {
    /// Resting phase for a given open flag.
    #[inline]
    pub fn resting(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    /// Returns true when the drawer sits at a resting endpoint.
    #[inline]
    pub fn is_resting(self) -> bool {
        matches!(self, Self::Closed | Self::Open)
    }

    #[inline]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }

    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Animating { .. })
    }

    /// Settle target, if a settle is in flight.
    #[inline]
    pub fn settle_target(self) -> Option<SettleTarget> {
        match self {
            Self::Animating { target } => Some(target),
            _ => None,
        }
    }
}
