//! Stroke painting.
//!
//! One committed or in-flight stroke becomes one or more stroked paths
//! under the camera transform. Two path shapes exist:
//!
//! - **Tapered**: pressure enabled and the tool responds to it. Each
//!   point pair is its own quadratic segment so width and opacity can
//!   follow the averaged pressure.
//! - **Constant**: a single quadratic chain through segment midpoints
//!   at the stroke's stored width. Markers and the eraser always take
//!   this shape; everything does when pressure is off.
//!
//! ## Performance Notes
//!
//! Paths are built per stroke per frame. tiny-skia strokes in path
//! space and transforms afterwards, so widths stay in world units and
//! scale with the zoom for free.

use tiny_skia::{
    BlendMode, Color, FilterQuality, LineCap, LineJoin, Paint, Path, PathBuilder, Pattern, Pixmap,
    Shader, SpreadMode, Stroke as StrokeStyle, Transform,
};

use crate::constants::{
    GLOW_ALPHA, MIN_STROKE_WIDTH, PRESSURE_WIDTH_GAIN, SELECTION_COLOR, SELECTION_GLOW_RADIUS,
    TEXTURE_GLOW_RADIUS,
};
use crate::render::{noise, to_color};
use crate::types::{Rgba, Stroke, StrokePoint, Tool, Vec2};

/// Borrowed stroke data plus style, so the live gesture can be painted
/// without cloning its point buffer into a [`Stroke`].
pub(crate) struct StrokeView<'a> {
    pub points: &'a [StrokePoint],
    pub color: Rgba,
    pub size: f32,
    pub opacity: f32,
    pub tool: Tool,
    pub textured: bool,
}

impl<'a> From<&'a Stroke> for StrokeView<'a> {
    fn from(stroke: &'a Stroke) -> Self {
        Self {
            points: &stroke.points,
            color: stroke.color,
            size: stroke.size,
            opacity: stroke.opacity,
            tool: stroke.tool,
            textured: stroke.textured,
        }
    }
}

/// Paint source for one stroke, resolved before any path is built.
/// The order matters: erasing beats selection beats texture.
enum Ink {
    /// Punches transparency into the layer buffer.
    Erase,
    /// Selection highlight, fixed blue with a halo.
    Highlight,
    /// Noise pattern, optionally glowing in the stroke's own color.
    Textured { glow: Option<Rgba> },
    Solid(Rgba),
}

impl Ink {
    fn resolve(stroke: &StrokeView, selected: bool) -> Self {
        if stroke.tool == Tool::Eraser {
            Ink::Erase
        } else if selected {
            Ink::Highlight
        } else if stroke.textured {
            let glow = (stroke.color != Rgba::BLACK).then_some(stroke.color);
            Ink::Textured { glow }
        } else {
            Ink::Solid(stroke.color)
        }
    }

    fn blend(&self) -> BlendMode {
        match self {
            Ink::Erase => BlendMode::DestinationOut,
            _ => BlendMode::SourceOver,
        }
    }

    fn shader(&self, alpha: f32) -> Shader<'static> {
        match self {
            Ink::Erase => Shader::SolidColor(Color::BLACK),
            Ink::Highlight => Shader::SolidColor(to_color(SELECTION_COLOR, alpha)),
            Ink::Textured { .. } => Pattern::new(
                noise::tile().as_ref(),
                SpreadMode::Repeat,
                FilterQuality::Nearest,
                alpha,
                Transform::identity(),
            ),
            Ink::Solid(color) => Shader::SolidColor(to_color(*color, alpha)),
        }
    }

    /// Halo color and its screen-pixel radius, if this ink glows.
    fn glow(&self) -> Option<(Rgba, f32)> {
        match self {
            Ink::Highlight => Some((SELECTION_COLOR, SELECTION_GLOW_RADIUS)),
            Ink::Textured { glow: Some(color) } => Some((*color, TEXTURE_GLOW_RADIUS)),
            _ => None,
        }
    }
}

/// Paint one stroke into `pixmap` under the camera `transform`.
///
/// `offset` is the layer offset plus, for selected strokes, the live
/// selection-drag offset. `zoom` sizes glow halos in screen pixels.
/// Fewer than two points paints nothing.
pub(crate) fn draw_stroke(
    pixmap: &mut Pixmap,
    stroke: &StrokeView,
    offset: Vec2,
    selected: bool,
    use_pressure: bool,
    zoom: f32,
    transform: Transform,
) {
    if stroke.points.len() < 2 {
        return;
    }

    let ink = Ink::resolve(stroke, selected);
    let tapered = use_pressure && stroke.tool != Tool::Eraser && stroke.tool != Tool::Marker;

    if tapered {
        draw_tapered(pixmap, stroke, &ink, offset, zoom, transform);
    } else {
        draw_constant(pixmap, stroke, &ink, offset, zoom, transform);
    }
}

/// Per-segment quadratics through the segment midpoint, width and
/// alpha modulated by the pair's averaged pressure.
fn draw_tapered(
    pixmap: &mut Pixmap,
    stroke: &StrokeView,
    ink: &Ink,
    offset: Vec2,
    zoom: f32,
    transform: Transform,
) {
    for pair in stroke.points.windows(2) {
        let p1 = pair[0];
        let p2 = pair[1];
        let press = (p1.pressure + p2.pressure) / 2.0;
        let width = (stroke.size * press * PRESSURE_WIDTH_GAIN).max(MIN_STROKE_WIDTH);
        let alpha = (stroke.opacity * (0.5 + press * 0.5)).min(1.0);

        let mid = p1.pos().midpoint(p2.pos()) + offset;
        let mut pb = PathBuilder::new();
        pb.move_to(p1.x + offset.x, p1.y + offset.y);
        pb.quad_to(mid.x, mid.y, p2.x + offset.x, p2.y + offset.y);
        let Some(path) = pb.finish() else {
            continue;
        };

        paint_path(pixmap, &path, ink, alpha, width, zoom, transform);
    }
}

/// A single quadratic chain: control point = current point, endpoint =
/// midpoint of current and next, closed off with a line to the last
/// point.
fn draw_constant(
    pixmap: &mut Pixmap,
    stroke: &StrokeView,
    ink: &Ink,
    offset: Vec2,
    zoom: f32,
    transform: Transform,
) {
    let points = stroke.points;
    let mut pb = PathBuilder::new();
    pb.move_to(points[0].x + offset.x, points[0].y + offset.y);
    for i in 1..points.len() - 1 {
        let p1 = points[i];
        let p2 = points[i + 1];
        let mid = p1.pos().midpoint(p2.pos()) + offset;
        pb.quad_to(p1.x + offset.x, p1.y + offset.y, mid.x, mid.y);
    }
    let last = points[points.len() - 1];
    pb.line_to(last.x + offset.x, last.y + offset.y);
    let Some(path) = pb.finish() else {
        return;
    };

    paint_path(pixmap, &path, ink, stroke.opacity, stroke.size, zoom, transform);
}

/// Glow under-pass (when the ink has one) followed by the core pass.
fn paint_path(
    pixmap: &mut Pixmap,
    path: &Path,
    ink: &Ink,
    alpha: f32,
    width: f32,
    zoom: f32,
    transform: Transform,
) {
    if let Some((color, radius)) = ink.glow() {
        // Wider, translucent copy underneath stands in for a blur halo.
        // The radius is in screen pixels, hence the zoom division.
        let halo = StrokeStyle {
            width: width + 2.0 * radius / zoom,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..StrokeStyle::default()
        };
        let mut paint = Paint::default();
        paint.set_color(to_color(color, alpha * GLOW_ALPHA));
        paint.anti_alias = true;
        pixmap.stroke_path(path, &paint, &halo, transform, None);
    }

    let style = StrokeStyle {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..StrokeStyle::default()
    };
    let mut paint = Paint::default();
    paint.shader = ink.shader(alpha);
    paint.blend_mode = ink.blend();
    paint.anti_alias = true;
    pixmap.stroke_path(path, &paint, &style, transform, None);
}
