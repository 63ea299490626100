//! Planar geometry helpers for lasso hit testing.
//!
//! The lasso polygon and stroke points are both stored layer-local, so
//! membership tests never need camera or offset corrections.

use crate::constants::MIN_LASSO_VERTICES;
use crate::types::{Stroke, Vec2};

/// Ray-casting point-in-polygon test (even-odd rule).
///
/// Casts a horizontal ray from the point and toggles on every edge crossing.
/// The polygon is treated as closed (last vertex connects back to the first).
/// Polygons with fewer than three vertices enclose nothing.
pub fn point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < MIN_LASSO_VERTICES {
        return false;
    }
    let (x, y) = (point.x, point.y);
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = (vertices[i].x, vertices[i].y);
        let (xj, yj) = (vertices[j].x, vertices[j].y);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Axis-aligned bounds of a polygon. `None` when it has no vertices.
pub fn polygon_bounds(vertices: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *vertices.first()?;
    let mut min = first;
    let mut max = first;
    for v in &vertices[1..] {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }
    Some((min, max))
}

/// True when any sampled point of the stroke falls inside the polygon.
///
/// Only the samples are tested, not the segments between them. At freehand
/// sampling density the difference stays within a few pixels at stroke ends.
pub fn stroke_hits_polygon(stroke: &Stroke, polygon: &[Vec2]) -> bool {
    if polygon.len() < MIN_LASSO_VERTICES {
        return false;
    }
    stroke
        .points
        .iter()
        .any(|p| point_in_polygon(p.pos(), polygon))
}
