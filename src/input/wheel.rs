//! Scroll wheel zoom, anchored at the cursor.

use crate::app::Sketchpad;
use crate::constants::WHEEL_ZOOM_STEP;
use crate::input::WheelEvent;
use tracing::trace;

impl Sketchpad {
    /// Zoom around the cursor by one wheel step per event. Requests that
    /// would leave the zoom bounds are dropped whole.
    pub fn handle_wheel(&mut self, event: &WheelEvent) {
        let factor = if event.delta_y < 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        if !self.camera.zoom_at(event.position, factor) {
            trace!(zoom = self.camera.k, "wheel zoom dropped at bound");
        }
    }
}
