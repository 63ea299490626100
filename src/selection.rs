//! Selected-stroke bookkeeping for the active layer.

use crate::types::Vec2;
use std::collections::HashSet;

/// Stroke indices currently selected on the active layer, plus the transient
/// offset of an in-flight selection move.
///
/// The offset only affects rendering. When the move gesture ends it is baked
/// into the stroke points and zeroed; selections therefore never survive with
/// a live offset across gestures.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    pub indices: HashSet<usize>,
    pub offset: Vec2,
}

impl Selection {
    pub fn clear(&mut self) {
        self.indices.clear();
        self.offset = Vec2::ZERO;
    }

    /// Replace the selected set and drop any transient offset.
    pub fn set<I: IntoIterator<Item = usize>>(&mut self, indices: I) {
        self.indices = indices.into_iter().collect();
        self.offset = Vec2::ZERO;
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.indices.contains(&idx)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
