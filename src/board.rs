//! Layer store for the drawing surface.
//!
//! A [`Board`] owns an ordered stack of stroke layers plus the spatial hit
//! index for the active layer. List order is UI order: index 0 is the topmost
//! layer and the renderer walks the list back to front.
//!
//! Operations follow a boundary no-op policy: calls that target a locked or
//! hidden layer, an unknown id, or would empty the layer list are ignored and
//! logged at debug level instead of returning errors.

use crate::constants::{INITIAL_LAYER_NAME, RESET_LAYER_NAME};
use crate::geometry::{polygon_bounds, stroke_hits_polygon};
use crate::spatial_index::SpatialIndex;
use crate::types::{Stroke, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// One drawing layer: a named, independently movable stack of strokes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layer {
    /// Unique identifier, issued by the owning board
    pub id: u64,
    pub name: String,
    pub visible: bool,
    pub locked: bool,
    /// Committed strokes in draw order, append-only outside of resets
    pub strokes: Vec<Stroke>,
    /// World-space translation applied to every stroke at render time
    pub offset: Vec2,
}

impl Layer {
    fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
            locked: false,
            strokes: Vec::new(),
            offset: Vec2::ZERO,
        }
    }

    /// Whether strokes may currently be added or moved on this layer.
    #[inline]
    pub fn accepts_edits(&self) -> bool {
        self.visible && !self.locked
    }
}

/// The layer stack plus active-layer bookkeeping.
///
/// The hit index shadows the active layer's strokes and is not serialized;
/// call [`Board::rebuild_hit_index`] after deserializing a board by hand.
/// [`Board::lasso_select`] also self-heals when the index has drifted.
#[derive(Serialize, Deserialize)]
pub struct Board {
    pub layers: Vec<Layer>,
    /// Id of the layer receiving input
    pub active_layer_id: u64,
    next_layer_id: u64,
    #[serde(skip)]
    hit_index: SpatialIndex,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with a single empty layer, which is active.
    pub fn new() -> Self {
        Self {
            layers: vec![Layer::new(1, INITIAL_LAYER_NAME)],
            active_layer_id: 1,
            next_layer_id: 2,
            hit_index: SpatialIndex::new(),
        }
    }

    pub fn layer(&self, id: u64) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.layer(self.active_layer_id)
    }

    /// Prepend a new empty layer and make it active. Returns its id.
    pub fn add_layer(&mut self) -> u64 {
        let id = self.next_layer_id;
        self.next_layer_id += 1;
        let name = format!("Layer {}", self.layers.len() + 1);
        self.layers.insert(0, Layer::new(id, name));
        self.active_layer_id = id;
        self.hit_index.clear();
        id
    }

    /// Remove a layer. The last remaining layer can never be removed; when
    /// the active layer is removed, the new first layer becomes active.
    pub fn delete_layer(&mut self, id: u64) -> bool {
        if self.layers.len() <= 1 {
            debug!(layer = id, "delete ignored: last layer");
            return false;
        }
        if self.layer(id).is_none() {
            debug!(layer = id, "delete ignored: unknown layer");
            return false;
        }
        self.layers.retain(|l| l.id != id);
        if self.active_layer_id == id {
            self.active_layer_id = self.layers[0].id;
            self.rebuild_hit_index();
        }
        true
    }

    /// Switch the layer receiving input. Unknown ids are ignored.
    pub fn set_active_layer(&mut self, id: u64) -> bool {
        if self.layer(id).is_none() {
            debug!(layer = id, "activate ignored: unknown layer");
            return false;
        }
        if self.active_layer_id != id {
            self.active_layer_id = id;
            self.rebuild_hit_index();
        }
        true
    }

    pub fn toggle_visible(&mut self, id: u64) -> bool {
        match self.layers.iter_mut().find(|l| l.id == id) {
            Some(layer) => {
                layer.visible = !layer.visible;
                true
            }
            None => false,
        }
    }

    pub fn toggle_locked(&mut self, id: u64) -> bool {
        match self.layers.iter_mut().find(|l| l.id == id) {
            Some(layer) => {
                layer.locked = !layer.locked;
                true
            }
            None => false,
        }
    }

    /// Append a committed stroke to a layer. Rejected when the layer is
    /// locked, hidden, or the stroke has no points.
    pub fn append_stroke(&mut self, layer_id: u64, stroke: Stroke) -> bool {
        if stroke.points.is_empty() {
            debug!(layer = layer_id, "stroke rejected: no points");
            return false;
        }
        let is_active = layer_id == self.active_layer_id;
        let Some(layer) = self.layers.iter_mut().find(|l| l.id == layer_id) else {
            debug!(layer = layer_id, "stroke rejected: unknown layer");
            return false;
        };
        if !layer.accepts_edits() {
            debug!(layer = layer_id, "stroke rejected: layer locked or hidden");
            return false;
        }
        layer.strokes.push(stroke);
        let idx = layer.strokes.len() - 1;
        if is_active {
            self.hit_index.insert(idx, &layer.strokes[idx]);
        }
        true
    }

    /// Shift a whole layer by a world-space delta.
    pub fn translate_layer(&mut self, layer_id: u64, delta: Vec2) -> bool {
        let Some(layer) = self.layers.iter_mut().find(|l| l.id == layer_id) else {
            debug!(layer = layer_id, "translate ignored: unknown layer");
            return false;
        };
        if !layer.accepts_edits() {
            debug!(layer = layer_id, "translate ignored: layer locked or hidden");
            return false;
        }
        layer.offset += delta;
        true
    }

    /// Fold a finished selection move into the stroke points themselves.
    /// A zero offset leaves every point bit-identical.
    pub fn bake_selection_move(
        &mut self,
        layer_id: u64,
        indices: &HashSet<usize>,
        offset: Vec2,
    ) -> bool {
        if offset == Vec2::ZERO {
            return true;
        }
        let is_active = layer_id == self.active_layer_id;
        let Some(pos) = self.layers.iter().position(|l| l.id == layer_id) else {
            debug!(layer = layer_id, "bake ignored: unknown layer");
            return false;
        };
        if !self.layers[pos].accepts_edits() {
            debug!(layer = layer_id, "bake ignored: layer locked or hidden");
            return false;
        }
        for &idx in indices {
            if let Some(stroke) = self.layers[pos].strokes.get_mut(idx) {
                for p in &mut stroke.points {
                    p.x += offset.x;
                    p.y += offset.y;
                }
            }
        }
        if is_active {
            for &idx in indices {
                if let Some(stroke) = self.layers[pos].strokes.get(idx) {
                    self.hit_index.update(idx, stroke);
                }
            }
        }
        true
    }

    /// Indices of the active layer's strokes caught by a lasso polygon,
    /// in ascending order. Polygons with fewer than three vertices catch
    /// nothing.
    pub fn lasso_select(&mut self, polygon: &[Vec2]) -> Vec<usize> {
        let Some((min, max)) = polygon_bounds(polygon) else {
            return Vec::new();
        };
        let stroke_count = match self.active_layer() {
            Some(layer) => layer.strokes.len(),
            None => return Vec::new(),
        };
        if self.hit_index.len() != stroke_count {
            self.rebuild_hit_index();
        }

        let candidates = self.hit_index.query_rect(min, max);
        let Some(layer) = self.active_layer() else {
            return Vec::new();
        };
        let mut hits: Vec<usize> = candidates
            .into_iter()
            .filter(|&idx| {
                layer
                    .strokes
                    .get(idx)
                    .is_some_and(|s| stroke_hits_polygon(s, polygon))
            })
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Collapse back to a single empty layer; the id counter keeps running.
    pub fn reset(&mut self) {
        let id = self.next_layer_id;
        self.next_layer_id += 1;
        self.layers = vec![Layer::new(id, RESET_LAYER_NAME)];
        self.active_layer_id = id;
        self.hit_index.clear();
    }

    /// Rebuild the hit index from the active layer's strokes.
    pub fn rebuild_hit_index(&mut self) {
        let strokes = self
            .layers
            .iter()
            .find(|l| l.id == self.active_layer_id)
            .map(|l| l.strokes.as_slice())
            .unwrap_or(&[]);
        let index = &mut self.hit_index;
        crate::perf::measure_and_log("rebuild_hit_index", 5.0, || index.rebuild(strokes));
    }
}
