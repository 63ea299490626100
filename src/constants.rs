//! Engine-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

use crate::types::{BrushPreset, Rgba};

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 10.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom factor per scroll wheel notch
pub const WHEEL_ZOOM_STEP: f32 = 1.1;

// ============================================================================
// Brush Presets
// ============================================================================

/// Pen: thin, fully opaque, medium smoothing
pub const PEN_PRESET: BrushPreset = BrushPreset {
    size: 3.0,
    opacity: 1.0,
    smoothing: 0.5,
    textured: false,
};

/// Hard pencil: very thin, slightly translucent, near-raw input, textured
pub const HARD_PENCIL_PRESET: BrushPreset = BrushPreset {
    size: 2.0,
    opacity: 0.9,
    smoothing: 0.1,
    textured: true,
};

/// Soft pencil: broad, translucent, textured
pub const SOFT_PENCIL_PRESET: BrushPreset = BrushPreset {
    size: 6.0,
    opacity: 0.5,
    smoothing: 0.2,
    textured: true,
};

/// Marker: very broad, translucent, heavy smoothing
pub const MARKER_PRESET: BrushPreset = BrushPreset {
    size: 15.0,
    opacity: 0.4,
    smoothing: 0.6,
    textured: false,
};

/// Eraser: broad, constant width; smoothing is listed but never applied
/// (eraser input stays raw so erasing tracks the cursor exactly)
pub const ERASER_PRESET: BrushPreset = BrushPreset {
    size: 20.0,
    opacity: 1.0,
    smoothing: 0.5,
    textured: false,
};

// ============================================================================
// Stroke Rendering
// ============================================================================

/// Pressure fallback when the input device reports none
pub const DEFAULT_PRESSURE: f32 = 0.5;

/// Floor for pressure-modulated stroke widths in world units
pub const MIN_STROKE_WIDTH: f32 = 0.5;

/// Width multiplier for pressure-modulated segments
pub const PRESSURE_WIDTH_GAIN: f32 = 2.0;

/// Glow radius around selected strokes in screen pixels
pub const SELECTION_GLOW_RADIUS: f32 = 5.0;

/// Glow radius around colored textured strokes in screen pixels
pub const TEXTURE_GLOW_RADIUS: f32 = 1.0;

/// Opacity of glow under-passes relative to the main pass
pub const GLOW_ALPHA: f32 = 0.3;

// ============================================================================
// Noise Texture
// ============================================================================

/// Side length of the tileable noise pattern in pixels
pub const NOISE_TILE_SIZE: u32 = 64;

/// Alpha of every noise grain (out of 255)
pub const NOISE_TILE_ALPHA: u8 = 100;

/// Fixed seed so textured strokes look identical across runs
pub const NOISE_TILE_SEED: u64 = 0x696E_6B62_6F61_7264;

// ============================================================================
// Grid
// ============================================================================

/// Default spacing between grid dots/lines in world units
pub const DEFAULT_GRID_SIZE: f32 = 40.0;

/// Default grid opacity
pub const DEFAULT_GRID_OPACITY: f32 = 0.15;

/// Radius of dot-grid dots in screen pixels
pub const GRID_DOT_RADIUS: f32 = 2.0;

/// Slope of isometric grid diagonals (tan 30 degrees)
pub const ISOMETRIC_SLOPE: f32 = 0.577_350_3;

// ============================================================================
// Selection & Lasso
// ============================================================================

/// Fewest polygon vertices that can enclose anything
pub const MIN_LASSO_VERTICES: usize = 3;

/// Dash length of the lasso outline in screen pixels
pub const LASSO_DASH_LENGTH: f32 = 5.0;

/// Fill opacity of the in-progress lasso polygon
pub const LASSO_FILL_ALPHA: f32 = 0.1;

// ============================================================================
// Colors (defaults)
// ============================================================================

/// Default canvas background (white)
pub const DEFAULT_BACKGROUND: Rgba = Rgba::WHITE;

/// Default brush color (black)
pub const DEFAULT_BRUSH_COLOR: Rgba = Rgba::BLACK;

/// Default grid color (black, drawn at grid opacity)
pub const DEFAULT_GRID_COLOR: Rgba = Rgba::BLACK;

/// Selection highlight and lasso color
pub const SELECTION_COLOR: Rgba = Rgba::rgb(0x3b, 0x82, 0xf6);

// ============================================================================
// Layers
// ============================================================================

/// Name of the layer a fresh board starts with
pub const INITIAL_LAYER_NAME: &str = "Ink Layer";

/// Name of the single layer left behind by a board reset
pub const RESET_LAYER_NAME: &str = "Background Ink";
