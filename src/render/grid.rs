//! Background grid painting.
//!
//! The grid is painted in screen space, before any layer content.
//! Spacing is `size * k` so the cells breathe with the zoom, and the
//! start coordinates are phase-locked to the camera translation modulo
//! one step so panning scrolls the grid with the canvas.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke as StrokeStyle, Transform};

use crate::camera::Camera;
use crate::constants::{GRID_DOT_RADIUS, ISOMETRIC_SLOPE};
use crate::render::to_color;
use crate::types::{GridSettings, GridType};

pub(crate) fn draw_grid(pixmap: &mut Pixmap, grid: &GridSettings, camera: &Camera) {
    if grid.grid_type == GridType::None {
        return;
    }

    let width = pixmap.width() as f32;
    let height = pixmap.height() as f32;
    let step = grid.size * camera.k;
    // The sweep below never terminates for a degenerate step.
    if !(step > 0.5) {
        return;
    }

    // f32 `%` keeps the dividend's sign, so the first column/row lands
    // at most one step off-screen on the negative side.
    let start_x = (camera.x % step) - step;
    let start_y = (camera.y % step) - step;

    match grid.grid_type {
        GridType::None => {}
        GridType::Dot => draw_dots(pixmap, grid, start_x, start_y, step, width, height),
        GridType::Line => {
            let mut pb = PathBuilder::new();
            push_vertical_lines(&mut pb, start_x, step, width, height);
            let mut y = start_y;
            while y < height {
                pb.move_to(0.0, y);
                pb.line_to(width, y);
                y += step;
            }
            stroke_lines(pixmap, pb, grid, camera.k);
        }
        GridType::Isometric => {
            let mut pb = PathBuilder::new();
            push_vertical_lines(&mut pb, start_x, step, width, height);
            push_diagonal_lines(&mut pb, camera, ISOMETRIC_SLOPE, step, width, height);
            push_diagonal_lines(&mut pb, camera, -ISOMETRIC_SLOPE, step, width, height);
            stroke_lines(pixmap, pb, grid, camera.k);
        }
    }
}

fn draw_dots(
    pixmap: &mut Pixmap,
    grid: &GridSettings,
    start_x: f32,
    start_y: f32,
    step: f32,
    width: f32,
    height: f32,
) {
    let mut pb = PathBuilder::new();
    let mut x = start_x;
    while x < width {
        let mut y = start_y;
        while y < height {
            pb.push_circle(x, y, GRID_DOT_RADIUS);
            y += step;
        }
        x += step;
    }
    let Some(path) = pb.finish() else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(to_color(grid.color, grid.opacity));
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

fn push_vertical_lines(pb: &mut PathBuilder, start_x: f32, step: f32, width: f32, height: f32) {
    let mut x = start_x;
    while x < width {
        pb.move_to(x, 0.0);
        pb.line_to(x, height);
        x += step;
    }
}

/// One family of parallel lines `y = slope * x + b`, with intercepts
/// spaced `step` apart and phase-locked via `b = ty - slope * tx`.
fn push_diagonal_lines(
    pb: &mut PathBuilder,
    camera: &Camera,
    slope: f32,
    step: f32,
    width: f32,
    height: f32,
) {
    // A sloped line at intercept b spans y in [b, b + slope * width]
    // across the screen, so sweep intercepts one reach beyond each edge.
    let reach = slope.abs() * width;
    let phase = (camera.y - slope * camera.x) % step;
    let mut b = phase - reach - step;
    while b < height + reach {
        pb.move_to(0.0, b);
        pb.line_to(width, slope * width + b);
        b += step;
    }
}

fn stroke_lines(pixmap: &mut Pixmap, pb: PathBuilder, grid: &GridSettings, k: f32) {
    let Some(path) = pb.finish() else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(to_color(grid.color, grid.opacity));
    paint.anti_alias = true;
    // Width 1/k: on-screen weight thins as you zoom in, like the
    // hairline grid this reproduces.
    let style = StrokeStyle {
        width: 1.0 / k,
        ..StrokeStyle::default()
    };
    pixmap.stroke_path(&path, &paint, &style, Transform::identity(), None);
}
