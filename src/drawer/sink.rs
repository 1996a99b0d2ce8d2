//! Render sink boundary.

/// Receiver for the drawer's translation outputs.
///
/// The controller calls these synchronously whenever the corresponding value
/// changes: per drag update, per animation tick, and on snap. Calls arrive
/// under the controller's internal lock, so implementations must be quick
/// and must not call back into the controller.
///
/// The three surfaces are owned explicitly rather than through a generic
/// children collection: the host hands the controller one sink that fans the
/// offsets out to its master panel, capture strip, and loader views.
pub trait RenderSink: Send {
    /// Horizontal translation of the master (drawer) panel.
    fn set_master_offset(&self, x: f64);

    /// Horizontal translation of the touch-capture strip.
    fn set_grab_offset(&self, x: f64);

    /// Horizontal translation of the loading overlay surface.
    fn set_loader_offset(&self, x: f64);
}

/// Sink that discards every offset. Useful for hosts that drive rendering by
/// polling [`DrawerController::master_offset`](crate::DrawerController::master_offset)
/// instead of reacting to pushes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn set_master_offset(&self, _x: f64) {}
    fn set_grab_offset(&self, _x: f64) {}
    fn set_loader_offset(&self, _x: f64) {}
}
