//! Pointer up event handling - stroke commit, lasso resolution, move baking.

use crate::app::Sketchpad;
use crate::constants::MIN_LASSO_VERTICES;
use crate::input::InputState;
use crate::profile_scope;
use crate::types::{Stroke, Tool, Vec2};

impl Sketchpad {
    /// Finish the live gesture. Taking the state out resets the machine to
    /// idle first, so the gesture buffers can never leak into the next one.
    pub fn handle_pointer_up(&mut self) {
        profile_scope!("handle_pointer_up");

        match std::mem::take(&mut self.input) {
            InputState::Idle | InputState::Panning { .. } | InputState::MovingLayer { .. } => {}

            InputState::LassoDragging { polygon } => {
                if polygon.len() >= MIN_LASSO_VERTICES {
                    let hits = self.board.lasso_select(&polygon);
                    if hits.is_empty() {
                        self.selection.clear();
                    } else {
                        self.selection.set(hits);
                        // Jump straight to moving what was just caught. This
                        // is a direct switch: no preset application, and the
                        // fresh selection survives.
                        self.tool = Tool::MoveLayer;
                    }
                } else {
                    self.selection.clear();
                }
            }

            InputState::MovingSelection { .. } => {
                let id = self.board.active_layer_id;
                let offset = self.selection.offset;
                self.board
                    .bake_selection_move(id, &self.selection.indices, offset);
                self.selection.offset = Vec2::ZERO;
            }

            InputState::Drawing { points, .. } => {
                if !points.is_empty() {
                    let textured = self.tool.preset().map(|p| p.textured).unwrap_or(false);
                    let stroke = Stroke {
                        points,
                        color: self.brush.color,
                        size: self.brush.size,
                        opacity: self.brush.opacity,
                        tool: self.tool,
                        textured,
                    };
                    let id = self.board.active_layer_id;
                    self.board.append_stroke(id, stroke);
                }
            }
        }
    }

    /// The pointer leaving the surface ends the gesture exactly like a
    /// release would; nothing may keep accumulating off-surface.
    pub fn handle_pointer_leave(&mut self) {
        self.handle_pointer_up();
    }
}
