//! Infinite-canvas freehand drawing surface.
//!
//! The crate is a windowing-agnostic core: one [`app::Sketchpad`] value holds
//! the whole document and interaction state, pointer and wheel events drive
//! it, and a [`render::Renderer`] rasterizes frames of it into a pixel
//! buffer. The embedding shell owns the event loop and the window; this crate
//! owns everything between an input event and the pixels.
//!
//! Structure:
//! - `app` - the Sketchpad controller: layers, tools, resets
//! - `board` - layer store, stroke commits, lasso selection queries
//! - `camera` - pan/zoom viewport mapping world and screen space
//! - `input` - pointer gesture state machine and the event handlers
//! - `render` - rasterizer: background, grid, layer compositing, overlays
//! - `selection` / `spatial_index` / `geometry` - lasso selection support
//! - `types` - plain data: strokes, brushes, colors, grids
//! - `perf` - frame timing and profiling instrumentation

pub mod app;
pub mod board;
pub mod camera;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod render;
pub mod selection;
pub mod spatial_index;
pub mod types;
