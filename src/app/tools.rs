//! Tool switching and preset application.

use super::Sketchpad;
use crate::types::Tool;

impl Sketchpad {
    /// Switch the active tool.
    ///
    /// Picking anything other than the lasso or move tool drops the current
    /// selection. Preset-backed tools overwrite the brush size, opacity, and
    /// smoothing from their preset; the brush color always survives.
    pub fn set_tool(&mut self, tool: Tool) {
        if !matches!(tool, Tool::Lasso | Tool::MoveLayer) {
            self.selection.clear();
        }
        if let Some(preset) = tool.preset() {
            self.brush.apply_preset(preset);
        }
        self.tool = tool;
    }
}
