//! Compositing pipeline.
//!
//! The renderer owns two CPU pixmaps: the visible **surface** and a
//! per-layer **scratch** buffer. Each frame repaints from scratch in a
//! fixed order:
//!
//! 1. background fill (also clears the previous frame)
//! 2. grid, in screen space
//! 3. layers back-to-front, each composited through the scratch buffer
//! 4. lasso overlay, in camera space
//!
//! The scratch hop is what keeps the eraser honest: its destination-out
//! blending runs against the one layer's buffer, so it reveals the
//! layers beneath instead of punching through them.
//!
//! ## Performance Notes
//!
//! Full repaint per frame, no damage tracking. Per-pass timings are fed
//! to a [`PerfMonitor`] so sustained slow frames show up in logs.

mod grid;
mod noise;
mod stroke;

use thiserror::Error;
use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke as StrokeStyle, StrokeDash,
    Transform,
};
use tracing::trace;

use crate::app::Sketchpad;
use crate::camera::Camera;
use crate::constants::{LASSO_DASH_LENGTH, LASSO_FILL_ALPHA, SELECTION_COLOR};
use crate::perf::{measure, PerfMonitor};
use crate::profile_scope;
use crate::types::Rgba;

use stroke::StrokeView;

/// Raster surface creation failure.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render surface must have nonzero area, got {width}x{height}")]
    ZeroArea { width: u32, height: u32 },
}

/// CPU compositor for a [`Sketchpad`].
pub struct Renderer {
    surface: Pixmap,
    scratch: Pixmap,
    perf: PerfMonitor,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        Ok(Self {
            surface: new_pixmap(width, height)?,
            scratch: new_pixmap(width, height)?,
            perf: PerfMonitor::new(),
        })
    }

    /// Recreate both buffers at a new size. Stroke data is world-space
    /// and untouched; the next [`Renderer::render`] call repaints
    /// everything at the new size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        self.surface = new_pixmap(width, height)?;
        self.scratch = new_pixmap(width, height)?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// The composited frame as of the last [`Renderer::render`] call.
    pub fn surface(&self) -> &Pixmap {
        &self.surface
    }

    /// Frame timing collected across render calls.
    pub fn perf(&self) -> &PerfMonitor {
        &self.perf
    }

    /// Composite one full frame of `pad` onto the surface.
    pub fn render(&mut self, pad: &Sketchpad) {
        profile_scope!("render_frame");
        self.perf.begin_frame();

        // Background fill also clears the previous frame.
        self.surface.fill(to_color(pad.background, 1.0));

        let ((), grid_ms) = measure(|| grid::draw_grid(&mut self.surface, &pad.grid, &pad.camera));
        self.perf.record_pass("grid", grid_ms);

        let ((), layers_ms) = measure(|| self.composite_layers(pad));
        self.perf.record_pass("layers", layers_ms);

        let ((), overlay_ms) = measure(|| self.draw_lasso_overlay(pad));
        self.perf.record_pass("lasso_overlay", overlay_ms);

        if let Some(frame_ms) = self.perf.end_frame() {
            trace!(frame_ms = format!("{:.2}", frame_ms), "frame composited");
        }
    }

    /// Layers paint back-to-front, so index 0 of the layer list ends up
    /// on top. Each visible layer renders into the cleared scratch
    /// buffer and is blitted onto the surface in one hop.
    fn composite_layers(&mut self, pad: &Sketchpad) {
        profile_scope!("composite_layers");
        let transform = camera_transform(&pad.camera);
        let live = pad.input.drawing_points();

        for layer in pad.board.layers.iter().rev() {
            if !layer.visible {
                continue;
            }
            self.scratch.fill(Color::TRANSPARENT);

            let active = layer.id == pad.board.active_layer_id;
            for (idx, committed) in layer.strokes.iter().enumerate() {
                let selected = active && pad.selection.contains(idx);
                let offset = if selected {
                    layer.offset + pad.selection.offset
                } else {
                    layer.offset
                };
                stroke::draw_stroke(
                    &mut self.scratch,
                    &StrokeView::from(committed),
                    offset,
                    selected,
                    pad.use_pressure,
                    pad.camera.k,
                    transform,
                );
            }

            // The in-flight stroke rides the active layer so an eraser
            // gesture previews against the right content.
            if active {
                if let Some(points) = live {
                    stroke::draw_stroke(
                        &mut self.scratch,
                        &StrokeView {
                            points,
                            color: pad.brush.color,
                            size: pad.brush.size,
                            opacity: pad.brush.opacity,
                            tool: pad.tool,
                            textured: pad.tool.preset().map(|p| p.textured).unwrap_or(false),
                        },
                        layer.offset,
                        false,
                        pad.use_pressure,
                        pad.camera.k,
                        transform,
                    );
                }
            }

            self.surface.draw_pixmap(
                0,
                0,
                self.scratch.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
    }

    /// Dashed outline plus translucent fill over the in-progress lasso
    /// polygon. The polygon is stored layer-local, so the active
    /// layer's offset is added back to keep the overlay under the
    /// cursor.
    fn draw_lasso_overlay(&mut self, pad: &Sketchpad) {
        let Some(polygon) = pad.input.lasso_polygon() else {
            return;
        };
        let Some(first) = polygon.first() else {
            return;
        };
        let Some(layer) = pad.board.active_layer() else {
            return;
        };
        let offset = layer.offset;

        let mut pb = PathBuilder::new();
        pb.move_to(first.x + offset.x, first.y + offset.y);
        for point in &polygon[1..] {
            pb.line_to(point.x + offset.x, point.y + offset.y);
        }
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };

        let transform = camera_transform(&pad.camera);
        let k = pad.camera.k;

        let mut outline = Paint::default();
        outline.set_color(to_color(SELECTION_COLOR, 1.0));
        outline.anti_alias = true;
        let style = StrokeStyle {
            width: 1.0 / k,
            dash: StrokeDash::new(vec![LASSO_DASH_LENGTH / k, LASSO_DASH_LENGTH / k], 0.0),
            ..StrokeStyle::default()
        };
        self.surface.stroke_path(&path, &outline, &style, transform, None);

        let mut fill = Paint::default();
        fill.set_color(to_color(SELECTION_COLOR, LASSO_FILL_ALPHA));
        fill.anti_alias = true;
        self.surface
            .fill_path(&path, &fill, FillRule::Winding, transform, None);
    }
}

/// World-to-screen as a tiny-skia transform: `p * k + (x, y)`.
fn camera_transform(camera: &Camera) -> Transform {
    Transform::from_translate(camera.x, camera.y).pre_scale(camera.k, camera.k)
}

/// An [`Rgba`] as a tiny-skia color with an extra opacity multiplier.
pub(crate) fn to_color(color: Rgba, opacity: f32) -> Color {
    let alpha = (color.a as f32 / 255.0 * opacity).clamp(0.0, 1.0);
    Color::from_rgba8(color.r, color.g, color.b, (alpha * 255.0).round() as u8)
}

fn new_pixmap(width: u32, height: u32) -> Result<Pixmap, RenderError> {
    Pixmap::new(width, height).ok_or(RenderError::ZeroArea { width, height })
}
