//! Spatial Index Module
//!
//! R-tree over the active layer's stroke bounds, used to prefilter lasso hit
//! testing. Only strokes whose point bounds intersect the polygon bounds go
//! through the exact point-in-polygon test, which turns lasso selection from
//! O(strokes * points) into O(log n) plus the handful of real candidates.
//!
//! Entries are keyed by stroke position in the layer's stroke list. Strokes
//! are append-only (baking a selection move rewrites points in place), so
//! positions stay stable until the index is rebuilt wholesale.

use crate::types::{Stroke, Vec2};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry covering one stroke's point bounds.
///
/// Bounds ignore stroke width: lasso membership is tested against sampled
/// points, so the point bounds are exactly what the prefilter must cover.
#[derive(Debug, Clone, Copy)]
pub struct StrokeEntry {
    pub stroke_index: usize,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl StrokeEntry {
    fn new(stroke_index: usize, min: Vec2, max: Vec2) -> Self {
        Self {
            stroke_index,
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    fn from_stroke(stroke_index: usize, stroke: &Stroke) -> Option<Self> {
        let (min, max) = stroke.bounds()?;
        Some(Self::new(stroke_index, min, max))
    }
}

impl RTreeObject for StrokeEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for StrokeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.stroke_index == other.stroke_index
    }
}

/// Spatial index over one layer's strokes using an R-tree.
pub struct SpatialIndex {
    tree: RTree<StrokeEntry>,
    entries: HashMap<usize, StrokeEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build the index for a whole stroke list.
    pub fn from_strokes(strokes: &[Stroke]) -> Self {
        let entries: Vec<StrokeEntry> = strokes
            .iter()
            .enumerate()
            .filter_map(|(i, s)| StrokeEntry::from_stroke(i, s))
            .collect();

        let entries_map: HashMap<usize, StrokeEntry> =
            entries.iter().map(|e| (e.stroke_index, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    /// Insert or replace the entry for one stroke.
    pub fn insert(&mut self, stroke_index: usize, stroke: &Stroke) {
        if let Some(old_entry) = self.entries.remove(&stroke_index) {
            self.tree.remove(&old_entry);
        }

        if let Some(entry) = StrokeEntry::from_stroke(stroke_index, stroke) {
            self.tree.insert(entry);
            self.entries.insert(stroke_index, entry);
        }
    }

    /// Refresh the entry after a stroke's points changed in place.
    pub fn update(&mut self, stroke_index: usize, stroke: &Stroke) {
        self.insert(stroke_index, stroke);
    }

    /// Indices of all strokes whose bounds intersect the given rectangle.
    pub fn query_rect(&self, min: Vec2, max: Vec2) -> Vec<usize> {
        let envelope = AABB::from_corners([min.x, min.y], [max.x, max.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.stroke_index)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild from scratch, e.g. after the active layer changed.
    pub fn rebuild(&mut self, strokes: &[Stroke]) {
        *self = Self::from_strokes(strokes);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
