//! Pointer move event handling - smoothing, pan/move deltas, lasso growth.
//!
//! ## Performance Notes
//!
//! This is the hottest input path; stylus hardware delivers move events well
//! above frame rate. Every arm below is allocation-free except the point
//! pushes into the live gesture buffers.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::Sketchpad;
use crate::constants::DEFAULT_PRESSURE;
use crate::input::{InputState, PointerEvent};
use crate::profile_scope;
use crate::types::{StrokePoint, Tool, Vec2};

impl Sketchpad {
    /// Advance the live gesture. Ignored while idle.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_move");

        match &mut self.input {
            InputState::Idle => {}

            InputState::Panning { last_screen } => {
                let delta = event.position - *last_screen;
                *last_screen = event.position;
                self.camera.pan_by(delta.x, delta.y);
            }

            InputState::LassoDragging { polygon } => {
                let world = self.camera.screen_to_world(event.position);
                let offset = self
                    .board
                    .active_layer()
                    .map(|l| l.offset)
                    .unwrap_or(Vec2::ZERO);
                polygon.push(world - offset);
            }

            InputState::MovingLayer { last_screen } => {
                let delta = event.position - *last_screen;
                *last_screen = event.position;
                let id = self.board.active_layer_id;
                self.board.translate_layer(id, delta / self.camera.k);
            }

            InputState::MovingSelection { last_screen } => {
                let delta = event.position - *last_screen;
                *last_screen = event.position;
                self.selection.offset += delta / self.camera.k;
            }

            InputState::Drawing { points, smoothed } => {
                let raw = self.camera.screen_to_world(event.position);
                // One-pole smoothing toward the raw cursor; the eraser stays
                // raw so erasing tracks the cursor exactly.
                let factor = if self.tool == Tool::Eraser {
                    1.0
                } else {
                    1.0 - self.brush.smoothing
                };
                *smoothed = *smoothed + (raw - *smoothed) * factor;
                let offset = self
                    .board
                    .active_layer()
                    .map(|l| l.offset)
                    .unwrap_or(Vec2::ZERO);
                let local = *smoothed - offset;
                points.push(StrokePoint::new(
                    local.x,
                    local.y,
                    event.pressure.unwrap_or(DEFAULT_PRESSURE),
                ));
            }
        }
    }
}
