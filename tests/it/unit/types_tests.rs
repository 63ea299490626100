//! Unit tests for the types module.

use inkboard::constants::{ERASER_PRESET, MARKER_PRESET, PEN_PRESET};
use inkboard::types::{BrushSettings, GridSettings, GridType, Rgba, Stroke, StrokePoint, Tool, Vec2};

#[test]
fn test_rgba_hex_round_trip() {
    let c = Rgba::rgb(59, 130, 246);
    assert_eq!(c.to_hex(), "#3b82f6");
    assert_eq!(Rgba::from_hex("#3b82f6"), Some(c));

    let translucent = Rgba::new(1, 2, 3, 4);
    assert_eq!(translucent.to_hex(), "#01020304");
    assert_eq!(Rgba::from_hex("#01020304"), Some(translucent));
}

#[test]
fn test_rgba_from_hex_rejects_malformed_input() {
    assert_eq!(Rgba::from_hex(""), None);
    assert_eq!(Rgba::from_hex("#12345"), None);
    assert_eq!(Rgba::from_hex("#zzzzzz"), None);
}

#[test]
fn test_rgba_serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgba::rgb(59, 130, 246)).unwrap();
    assert_eq!(json, "\"#3b82f6\"");

    let back: Rgba = serde_json::from_str("\"#3b82f6\"").unwrap();
    assert_eq!(back, Rgba::rgb(59, 130, 246));

    let bad: Result<Rgba, _> = serde_json::from_str("\"#nope\"");
    assert!(bad.is_err());
}

#[test]
fn test_drawing_tools_carry_presets() {
    assert_eq!(Tool::Pen.preset().unwrap().size, PEN_PRESET.size);
    assert_eq!(Tool::Eraser.preset().unwrap().size, ERASER_PRESET.size);
    assert!(Tool::Lasso.preset().is_none());
    assert!(Tool::Pan.preset().is_none());
    assert!(Tool::MoveLayer.preset().is_none());
}

#[test]
fn test_tool_is_drawing() {
    assert!(Tool::Pen.is_drawing());
    assert!(Tool::Eraser.is_drawing());
    assert!(Tool::Marker.is_drawing());
    assert!(!Tool::Lasso.is_drawing());
    assert!(!Tool::Pan.is_drawing());
    assert!(!Tool::MoveLayer.is_drawing());
}

#[test]
fn test_tool_catalog_is_complete() {
    let all = Tool::all();
    assert_eq!(all.len(), 8);
    // Labels are distinct, so a toolbar can key on them.
    let mut labels: Vec<&str> = all.iter().map(|t| t.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), all.len());
}

#[test]
fn test_apply_preset_keeps_brush_color() {
    let mut brush = BrushSettings {
        color: Rgba::rgb(220, 30, 30),
        ..BrushSettings::default()
    };
    brush.apply_preset(&MARKER_PRESET);

    assert_eq!(brush.size, MARKER_PRESET.size);
    assert_eq!(brush.opacity, MARKER_PRESET.opacity);
    assert_eq!(brush.smoothing, MARKER_PRESET.smoothing);
    assert_eq!(brush.color, Rgba::rgb(220, 30, 30));
}

#[test]
fn test_default_brush_matches_pen_preset() {
    let brush = BrushSettings::default();
    assert_eq!(brush.color, Rgba::BLACK);
    assert_eq!(brush.size, PEN_PRESET.size);
    assert_eq!(brush.opacity, PEN_PRESET.opacity);
    assert_eq!(brush.smoothing, PEN_PRESET.smoothing);
}

#[test]
fn test_stroke_bounds() {
    let stroke = Stroke {
        points: vec![
            StrokePoint::new(10.0, -5.0, 0.5),
            StrokePoint::new(-20.0, 8.0, 0.5),
            StrokePoint::new(3.0, 30.0, 0.5),
        ],
        color: Rgba::BLACK,
        size: 4.0,
        opacity: 1.0,
        tool: Tool::Pen,
        textured: false,
    };
    let (min, max) = stroke.bounds().unwrap();
    assert_eq!(min, Vec2::new(-20.0, -5.0));
    assert_eq!(max, Vec2::new(10.0, 30.0));
}

#[test]
fn test_empty_stroke_has_no_bounds() {
    let stroke = Stroke {
        points: Vec::new(),
        color: Rgba::BLACK,
        size: 4.0,
        opacity: 1.0,
        tool: Tool::Pen,
        textured: false,
    };
    assert!(stroke.bounds().is_none());
}

#[test]
fn test_single_point_stroke_bounds_collapse() {
    let stroke = Stroke {
        points: vec![StrokePoint::new(7.0, 7.0, 1.0)],
        color: Rgba::BLACK,
        size: 4.0,
        opacity: 1.0,
        tool: Tool::Pen,
        textured: false,
    };
    let (min, max) = stroke.bounds().unwrap();
    assert_eq!(min, max);
    assert_eq!(min, Vec2::new(7.0, 7.0));
}

#[test]
fn test_vec2_arithmetic() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(1.0, -2.0);
    assert_eq!(a + b, Vec2::new(4.0, 2.0));
    assert_eq!(a - b, Vec2::new(2.0, 6.0));
    assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
    assert_eq!(a / 2.0, Vec2::new(1.5, 2.0));
    assert_eq!(a.midpoint(b), Vec2::new(2.0, 1.0));
}

#[test]
fn test_grid_type_catalog() {
    assert_eq!(GridType::all().len(), 4);
    assert_eq!(GridType::Dot.label(), "Dot");
    assert_eq!(GridType::default(), GridType::Dot);
}

#[test]
fn test_grid_settings_default() {
    let grid = GridSettings::default();
    assert_eq!(grid.grid_type, GridType::Dot);
    assert_eq!(grid.size, 40.0);
    assert_eq!(grid.color, Rgba::BLACK);
}
