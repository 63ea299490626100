//! Layer management on the Sketchpad.
//!
//! Thin wrappers over the board's layer operations that add the invariants
//! the bare store cannot know about: the selection always refers to strokes
//! of the active layer, so it is cleared whenever the active layer changes.

use super::Sketchpad;

impl Sketchpad {
    /// Prepend a new empty layer and make it active. Returns its id.
    pub fn add_layer(&mut self) -> u64 {
        let id = self.board.add_layer();
        self.selection.clear();
        id
    }

    /// Remove a layer. The last remaining layer stays; removing the active
    /// layer activates the new first layer and drops the selection.
    pub fn delete_layer(&mut self, id: u64) -> bool {
        let was_active = id == self.board.active_layer_id;
        if !self.board.delete_layer(id) {
            return false;
        }
        if was_active {
            self.selection.clear();
        }
        true
    }

    /// Switch the layer receiving input, dropping the selection when the
    /// active layer actually changes.
    pub fn set_active_layer(&mut self, id: u64) -> bool {
        let changed = id != self.board.active_layer_id;
        if !self.board.set_active_layer(id) {
            return false;
        }
        if changed {
            self.selection.clear();
        }
        true
    }

    pub fn toggle_layer_visible(&mut self, id: u64) -> bool {
        self.board.toggle_visible(id)
    }

    pub fn toggle_layer_locked(&mut self, id: u64) -> bool {
        self.board.toggle_locked(id)
    }

    /// Wipe the surface back to a single empty layer. Camera, brush, grid,
    /// and background settings survive; selection and gesture do not.
    pub fn reset(&mut self) {
        self.board.reset();
        self.selection.clear();
        self.input.reset();
    }
}
