//! Core types for the inkboard drawing engine.
//!
//! This module defines the data model shared by the layer store, the
//! interaction handlers, and the renderer: colors, vectors, tools and their
//! presets, brush and grid configuration, and stroke geometry.

use crate::constants::{
    DEFAULT_BRUSH_COLOR, DEFAULT_GRID_COLOR, DEFAULT_GRID_OPACITY, DEFAULT_GRID_SIZE,
    ERASER_PRESET, HARD_PENCIL_PRESET, MARKER_PRESET, PEN_PRESET, SOFT_PENCIL_PRESET,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Add, AddAssign, Div, Mul, Sub};

// ============================================================================
// Color
// ============================================================================

/// 8-bit RGBA color.
///
/// Serializes as a CSS-style hex string (`#rrggbb`, or `#rrggbbaa` when the
/// alpha channel is not opaque) so host toolbars can pass colors through
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |i: usize| -> Option<u8> { u8::from_str_radix(hex.get(i..i + 2)?, 16).ok() };
        match hex.len() {
            6 => Some(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: 255,
            }),
            8 => Some(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: {s:?}")))
    }
}

// ============================================================================
// Vectors & Points
// ============================================================================

/// A 2D vector. Whether it holds screen, world, or layer-local coordinates
/// is documented at each use site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        Vec2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

/// A single sampled point of a stroke, in layer-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f32,
    pub y: f32,
    /// Stylus pressure in `[0, 1]`; 0.5 when the device reports none
    pub pressure: f32,
}

impl StrokePoint {
    pub const fn new(x: f32, y: f32, pressure: f32) -> Self {
        Self { x, y, pressure }
    }

    #[inline]
    pub fn pos(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

// ============================================================================
// Tools & Presets
// ============================================================================

/// Fixed rendering parameters a drawing tool starts from.
///
/// Applied to the live [`BrushSettings`] when the tool is selected; the brush
/// color is never part of a preset.
#[derive(Clone, Copy, Debug)]
pub struct BrushPreset {
    /// Base stroke width in world units
    pub size: f32,
    /// Base opacity in `[0, 1]`
    pub opacity: f32,
    /// Smoothing strength in `[0, 1)`; each move event advances the stroke
    /// toward the raw cursor position by `1 - smoothing`
    pub smoothing: f32,
    /// Whether strokes pick up the paper-grain noise texture
    pub textured: bool,
}

/// The active tool.
///
/// Drawing tools carry a fixed preset; lasso, pan, and move-layer only change
/// how pointer gestures are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pen,
    HardPencil,
    SoftPencil,
    Marker,
    Eraser,
    Lasso,
    Pan,
    MoveLayer,
}

impl Tool {
    /// The preset for preset-backed tools, `None` for gesture-only tools.
    pub fn preset(self) -> Option<&'static BrushPreset> {
        match self {
            Tool::Pen => Some(&PEN_PRESET),
            Tool::HardPencil => Some(&HARD_PENCIL_PRESET),
            Tool::SoftPencil => Some(&SOFT_PENCIL_PRESET),
            Tool::Marker => Some(&MARKER_PRESET),
            Tool::Eraser => Some(&ERASER_PRESET),
            Tool::Lasso | Tool::Pan | Tool::MoveLayer => None,
        }
    }

    /// True for tools that lay down ink (the eraser included).
    pub fn is_drawing(self) -> bool {
        self.preset().is_some()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::HardPencil => "Hard Pencil",
            Tool::SoftPencil => "Soft Pencil",
            Tool::Marker => "Marker",
            Tool::Eraser => "Eraser",
            Tool::Lasso => "Lasso",
            Tool::Pan => "Pan",
            Tool::MoveLayer => "Move Layer",
        }
    }

    pub fn all() -> &'static [Tool] {
        &[
            Tool::Pen,
            Tool::HardPencil,
            Tool::SoftPencil,
            Tool::Marker,
            Tool::Eraser,
            Tool::Lasso,
            Tool::Pan,
            Tool::MoveLayer,
        ]
    }
}

/// Live brush configuration, edited by the host toolbar and overwritten (color
/// excepted) when a preset-backed tool is selected.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BrushSettings {
    pub color: Rgba,
    /// Base stroke width in world units
    pub size: f32,
    pub opacity: f32,
    pub smoothing: f32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_BRUSH_COLOR,
            size: PEN_PRESET.size,
            opacity: PEN_PRESET.opacity,
            smoothing: PEN_PRESET.smoothing,
        }
    }
}

impl BrushSettings {
    /// Overwrite size/opacity/smoothing from a preset, keeping the color.
    pub fn apply_preset(&mut self, preset: &BrushPreset) {
        self.size = preset.size;
        self.opacity = preset.opacity;
        self.smoothing = preset.smoothing;
    }
}

// ============================================================================
// Grid & Background
// ============================================================================

/// Background grid styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridType {
    None,
    #[default]
    Dot,
    Line,
    Isometric,
}

impl GridType {
    pub fn label(&self) -> &'static str {
        match self {
            GridType::None => "None",
            GridType::Dot => "Dot",
            GridType::Line => "Line",
            GridType::Isometric => "Isometric",
        }
    }

    pub fn all() -> &'static [GridType] {
        &[
            GridType::None,
            GridType::Dot,
            GridType::Line,
            GridType::Isometric,
        ]
    }
}

/// Background grid configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridSettings {
    pub grid_type: GridType,
    /// Spacing between adjacent dots/lines in world units
    pub size: f32,
    pub opacity: f32,
    pub color: Rgba,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            grid_type: GridType::default(),
            size: DEFAULT_GRID_SIZE,
            opacity: DEFAULT_GRID_OPACITY,
            color: DEFAULT_GRID_COLOR,
        }
    }
}

// ============================================================================
// Strokes
// ============================================================================

/// A committed freehand stroke.
///
/// Point data is immutable after commit except when a selection move is baked
/// into it. Strokes are only ever removed by a full board reset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stroke {
    /// Sampled points in layer-local coordinates, at least one
    pub points: Vec<StrokePoint>,
    pub color: Rgba,
    /// Base width in world units
    pub size: f32,
    pub opacity: f32,
    /// The tool that produced the stroke; decides blending and tapering
    pub tool: Tool,
    /// Painted with the paper-grain texture pattern
    pub textured: bool,
}

impl Stroke {
    /// Axis-aligned bounds over the raw points, ignoring stroke width.
    /// `None` for an empty point list.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = self.points.first()?;
        let mut min = first.pos();
        let mut max = min;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}
