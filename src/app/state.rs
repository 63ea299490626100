//! Application state - the Sketchpad struct definition.
//!
//! One `Sketchpad` value is the single source of truth: interaction handlers
//! mutate it through `&mut self`, the renderer reads it through `&self`. The
//! borrow checker guarantees a frame only ever sees fully committed state.

use crate::board::Board;
use crate::camera::Camera;
use crate::constants::DEFAULT_BACKGROUND;
use crate::input::InputState;
use crate::selection::Selection;
use crate::types::{BrushSettings, GridSettings, Rgba, Tool};

/// The drawing surface: layer store, camera, tool and brush configuration,
/// selection, and the live gesture.
///
/// Configuration fields are public and safe to set directly; anything that
/// spans components (tool switching, layer activation, resets) goes through
/// the methods, which also maintain the selection invariants.
pub struct Sketchpad {
    /// Layer store and the active-layer hit index
    pub board: Board,
    pub camera: Camera,
    /// Live brush configuration; preset-backed tools overwrite everything
    /// but the color on selection
    pub brush: BrushSettings,
    /// Whether stroke width and opacity follow stylus pressure
    pub use_pressure: bool,
    pub background: Rgba,
    pub grid: GridSettings,
    pub tool: Tool,
    /// Selected stroke indices on the active layer
    pub selection: Selection,
    /// Input state machine - the live pointer gesture and its buffers
    pub input: InputState,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketchpad {
    /// A fresh surface: one empty layer, pen tool, dot grid, identity camera.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            camera: Camera::default(),
            brush: BrushSettings::default(),
            use_pressure: true,
            background: DEFAULT_BACKGROUND,
            grid: GridSettings::default(),
            tool: Tool::default(),
            selection: Selection::default(),
            input: InputState::default(),
        }
    }
}
