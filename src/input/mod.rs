//! Pointer and wheel input handling for the drawing surface.
//!
//! This module implements all gesture logic: freehand drawing, panning,
//! lasso selection, and layer/selection moves.
//!
//! ## Architecture
//!
//! Gestures run through an explicit state machine (`InputState`) with one
//! shared gesture slot. A pointer-down while a gesture is live is ignored,
//! and pointer-leave is handled exactly like pointer-up, so no gesture can
//! leak across events.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `pointer_down` - Gesture starts (tool dispatch, layer gating)
//! - `pointer_move` - Gesture updates (smoothing, pan/move deltas, lasso growth)
//! - `pointer_up` - Gesture ends (stroke commit, lasso resolution, move baking)
//! - `wheel` - Anchored wheel zoom

mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;
mod wheel;

pub use state::InputState;

use crate::types::Vec2;

/// Which pointer button went down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Left,
    Middle,
    /// Right and any additional buttons; never starts a gesture
    Other,
}

/// A pointer event in screen coordinates.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub position: Vec2,
    pub button: PointerButton,
    /// Stylus pressure in `[0, 1]`, `None` for devices that report none
    pub pressure: Option<f32>,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            button: PointerButton::Left,
            pressure: None,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_pressure(mut self, pressure: f32) -> Self {
        self.pressure = Some(pressure);
        self
    }
}

/// A scroll wheel event in screen coordinates.
#[derive(Clone, Copy, Debug)]
pub struct WheelEvent {
    /// Cursor position; zooming anchors the world point under it
    pub position: Vec2,
    /// Positive scrolls down (zoom out), negative up (zoom in)
    pub delta_y: f32,
}

impl WheelEvent {
    pub fn new(x: f32, y: f32, delta_y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            delta_y,
        }
    }
}
