//! Input state machine - unified state management for pointer gestures.
//!
//! A single enum tracks the live gesture, making impossible states (drawing
//! while panning, a lasso without its polygon) unrepresentable. Gesture data
//! lives inside the variants, so finishing or abandoning a gesture drops its
//! buffers by construction.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning          (middle button anywhere, or pan tool)
//! Idle -> Drawing          (drawing tool on an unlocked, visible layer)
//! Idle -> LassoDragging    (lasso tool; any prior selection is cleared)
//! Idle -> MovingSelection  (move tool with a selection)
//! Idle -> MovingLayer      (move tool without a selection)
//!
//! Any -> Idle              (pointer up or leave - finalizes the gesture)
//! ```

use crate::types::{StrokePoint, Vec2};

/// The live pointer gesture.
#[derive(Debug, Clone)]
pub enum InputState {
    /// No active gesture
    Idle,

    /// Canvas panning (middle button or pan tool)
    Panning {
        /// Last pointer position in screen space for delta calculation
        last_screen: Vec2,
    },

    /// Freehand stroke in progress on the active layer
    Drawing {
        /// Layer-local points accumulated so far; committed as one stroke
        /// on pointer up, dropped on every other exit
        points: Vec<StrokePoint>,
        /// Smoothed cursor position in world space, the anchor the next
        /// move event eases from
        smoothed: Vec2,
    },

    /// Lasso polygon being dragged out on the active layer
    LassoDragging {
        /// Layer-local vertices, one appended per move event
        polygon: Vec<Vec2>,
    },

    /// Whole-layer move with the move tool
    MovingLayer {
        /// Last pointer position in screen space
        last_screen: Vec2,
    },

    /// Selected strokes being moved; the transient offset accumulates on
    /// the selection until the gesture bakes it
    MovingSelection {
        /// Last pointer position in screen space
        last_screen: Vec2,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    /// Returns true if no gesture is active
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently panning the canvas
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Returns true if a freehand stroke is in progress
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// Returns true if a lasso polygon is being dragged out
    pub fn is_lasso_dragging(&self) -> bool {
        matches!(self, Self::LassoDragging { .. })
    }

    /// Returns true if a whole layer is being moved
    pub fn is_moving_layer(&self) -> bool {
        matches!(self, Self::MovingLayer { .. })
    }

    /// Returns true if the selection is being moved
    pub fn is_moving_selection(&self) -> bool {
        matches!(self, Self::MovingSelection { .. })
    }

    /// The in-flight stroke points, if drawing
    pub fn drawing_points(&self) -> Option<&[StrokePoint]> {
        match self {
            Self::Drawing { points, .. } => Some(points),
            _ => None,
        }
    }

    /// The in-flight lasso vertices, if lasso dragging
    pub fn lasso_polygon(&self) -> Option<&[Vec2]> {
        match self {
            Self::LassoDragging { polygon } => Some(polygon),
            _ => None,
        }
    }

    /// Reset to Idle, dropping any gesture buffers
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start panning from a screen position
    pub fn start_panning(&mut self, last_screen: Vec2) {
        *self = Self::Panning { last_screen };
    }

    /// Start a stroke from its seed point
    pub fn start_drawing(&mut self, seed: StrokePoint, smoothed: Vec2) {
        *self = Self::Drawing {
            points: vec![seed],
            smoothed,
        };
    }

    /// Start a lasso from its seed vertex
    pub fn start_lasso(&mut self, seed: Vec2) {
        *self = Self::LassoDragging {
            polygon: vec![seed],
        };
    }

    /// Start moving the active layer
    pub fn start_moving_layer(&mut self, last_screen: Vec2) {
        *self = Self::MovingLayer { last_screen };
    }

    /// Start moving the selection
    pub fn start_moving_selection(&mut self, last_screen: Vec2) {
        *self = Self::MovingSelection { last_screen };
    }
}
