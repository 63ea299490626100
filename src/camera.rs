//! Pan/zoom camera mapping world space to screen space.
//!
//! The mapping is `screen = world * k + (x, y)`. Zooming is anchored: the
//! world point under the cursor stays under the cursor when `k` changes.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::types::Vec2;
use serde::{Deserialize, Serialize};

/// Viewport camera. `x`/`y` translate in screen pixels, `k` is the scale
/// factor and stays within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub k: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            k: DEFAULT_ZOOM,
        }
    }
}

impl Camera {
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x * self.k + self.x, world.y * self.k + self.y)
    }

    /// Translate by a raw screen-space delta.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Multiply the zoom by `factor`, keeping the world point under `anchor`
    /// fixed on screen. Requests that would leave `[MIN_ZOOM, MAX_ZOOM]` are
    /// dropped whole rather than clamped. Returns whether the camera changed.
    pub fn zoom_at(&mut self, anchor: Vec2, factor: f32) -> bool {
        let next = self.k * factor;
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&next) {
            return false;
        }
        let world = self.screen_to_world(anchor);
        self.x = anchor.x - world.x * next;
        self.y = anchor.y - world.y * next;
        self.k = next;
        true
    }
}
