//! Pointer down event handling - gesture dispatch and layer gating.

use crate::app::Sketchpad;
use crate::constants::DEFAULT_PRESSURE;
use crate::input::{PointerButton, PointerEvent};
use crate::profile_scope;
use crate::types::{StrokePoint, Tool};

impl Sketchpad {
    /// Dispatch a pointer press into a gesture.
    ///
    /// Gestures are strictly sequential: a press while one is live is
    /// ignored. The middle button (and the pan tool) pans regardless of the
    /// active layer's state; every other gesture requires the active layer
    /// to be visible and unlocked.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_down");

        if !self.input.is_idle() {
            return;
        }

        if event.button == PointerButton::Middle || self.tool == Tool::Pan {
            self.input.start_panning(event.position);
            return;
        }
        if event.button != PointerButton::Left {
            return;
        }

        let Some(layer) = self.board.active_layer() else {
            return;
        };
        if !layer.accepts_edits() {
            return;
        }
        let world = self.camera.screen_to_world(event.position);
        let local = world - layer.offset;

        match self.tool {
            Tool::Lasso => {
                // A press with a live selection starts a fresh lasso, it
                // never begins a move.
                self.selection.clear();
                self.input.start_lasso(local);
            }
            Tool::MoveLayer => {
                if self.selection.is_empty() {
                    self.input.start_moving_layer(event.position);
                } else {
                    self.input.start_moving_selection(event.position);
                }
            }
            // Drawing tools: seed the stroke with the raw pointer position.
            _ => {
                self.selection.clear();
                let pressure = event.pressure.unwrap_or(DEFAULT_PRESSURE);
                self.input
                    .start_drawing(StrokePoint::new(local.x, local.y, pressure), world);
            }
        }
    }
}
