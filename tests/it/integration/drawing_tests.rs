//! Drawing Workflow Integration Tests
//!
//! Pointer events in, committed strokes out.

use crate::helpers::{
    assert_close, assert_stroke_count, drag, empty_pad, screen, TestPadBuilder,
};
use inkboard::input::{PointerButton, PointerEvent};
use inkboard::types::{Rgba, Tool};

#[test]
fn test_drag_commits_stroke_to_active_layer() {
    let mut pad = empty_pad();
    drag(&mut pad, screen::TOP_LEFT, (120.0, 90.0));

    assert_stroke_count(&pad, 1);
    let stroke = &pad.board.active_layer().unwrap().strokes[0];
    // Seed point plus one per move event.
    assert_eq!(stroke.points.len(), 3);
    assert_eq!(stroke.tool, Tool::Pen);
    assert_eq!(stroke.color, Rgba::BLACK);
    assert!(pad.input.is_idle());
}

#[test]
fn test_stroke_points_are_layer_local() {
    // Camera: screen = world * 2 + (50, 30). With smoothing off, points
    // land exactly at the unprojected pointer positions.
    let mut pad = TestPadBuilder::new()
        .with_camera(50.0, 30.0, 2.0)
        .with_smoothing(0.0)
        .build();

    pad.handle_pointer_down(&PointerEvent::new(150.0, 130.0));
    pad.handle_pointer_move(&PointerEvent::new(250.0, 230.0));
    pad.handle_pointer_up();

    let stroke = &pad.board.active_layer().unwrap().strokes[0];
    assert_close(stroke.points[0].x, 50.0);
    assert_close(stroke.points[0].y, 50.0);
    assert_close(stroke.points[1].x, 100.0);
    assert_close(stroke.points[1].y, 100.0);
}

#[test]
fn test_smoothing_pulls_points_toward_cursor() {
    // Pen smoothing is 0.5: each move closes half the gap to the cursor.
    let mut pad = empty_pad();
    pad.handle_pointer_down(&PointerEvent::new(0.0, 0.0));
    pad.handle_pointer_move(&PointerEvent::new(100.0, 0.0));
    pad.handle_pointer_move(&PointerEvent::new(100.0, 0.0));
    pad.handle_pointer_up();

    let stroke = &pad.board.active_layer().unwrap().strokes[0];
    assert_close(stroke.points[0].x, 0.0);
    assert_close(stroke.points[1].x, 50.0);
    assert_close(stroke.points[2].x, 75.0);
}

#[test]
fn test_eraser_tracks_cursor_exactly() {
    // The eraser ignores smoothing so erasing follows the cursor.
    let mut pad = TestPadBuilder::new().with_tool(Tool::Eraser).build();
    pad.handle_pointer_down(&PointerEvent::new(0.0, 0.0));
    pad.handle_pointer_move(&PointerEvent::new(100.0, 40.0));
    pad.handle_pointer_up();

    let stroke = &pad.board.active_layer().unwrap().strokes[0];
    assert_eq!(stroke.tool, Tool::Eraser);
    assert_close(stroke.points[1].x, 100.0);
    assert_close(stroke.points[1].y, 40.0);
}

#[test]
fn test_pressure_defaults_when_device_reports_none() {
    let mut pad = empty_pad();
    pad.handle_pointer_down(&PointerEvent::new(10.0, 10.0));
    pad.handle_pointer_move(&PointerEvent::new(20.0, 20.0).with_pressure(0.9));
    pad.handle_pointer_up();

    let stroke = &pad.board.active_layer().unwrap().strokes[0];
    assert_close(stroke.points[0].pressure, 0.5);
    assert_close(stroke.points[1].pressure, 0.9);
}

#[test]
fn test_locked_layer_blocks_drawing() {
    let mut pad = empty_pad();
    let id = pad.board.active_layer_id;
    pad.board.toggle_locked(id);

    pad.handle_pointer_down(&PointerEvent::new(10.0, 10.0));
    assert!(pad.input.is_idle());
    pad.handle_pointer_up();
    assert_stroke_count(&pad, 0);
}

#[test]
fn test_hidden_layer_blocks_drawing() {
    let mut pad = empty_pad();
    let id = pad.board.active_layer_id;
    pad.board.toggle_visible(id);

    drag(&mut pad, (10.0, 10.0), (50.0, 50.0));
    assert_stroke_count(&pad, 0);
}

#[test]
fn test_middle_button_pans_with_any_tool() {
    let mut pad = empty_pad();
    let down = PointerEvent::new(100.0, 100.0).with_button(PointerButton::Middle);
    pad.handle_pointer_down(&down);
    assert!(pad.input.is_panning());

    pad.handle_pointer_move(&PointerEvent::new(150.0, 130.0));
    pad.handle_pointer_up();

    assert_close(pad.camera.x, 50.0);
    assert_close(pad.camera.y, 30.0);
    assert_stroke_count(&pad, 0);
}

#[test]
fn test_middle_button_pan_works_on_locked_layer() {
    let mut pad = empty_pad();
    let id = pad.board.active_layer_id;
    pad.board.toggle_locked(id);

    let down = PointerEvent::new(0.0, 0.0).with_button(PointerButton::Middle);
    pad.handle_pointer_down(&down);
    assert!(pad.input.is_panning());
    pad.handle_pointer_up();
}

#[test]
fn test_pan_tool_pans_with_left_button() {
    let mut pad = TestPadBuilder::new().with_tool(Tool::Pan).build();
    drag(&mut pad, (0.0, 0.0), (40.0, -20.0));

    assert_close(pad.camera.x, 40.0);
    assert_close(pad.camera.y, -20.0);
    assert_stroke_count(&pad, 0);
}

#[test]
fn test_pan_delta_stays_in_screen_units_under_zoom() {
    let mut pad = TestPadBuilder::new()
        .with_tool(Tool::Pan)
        .with_camera(0.0, 0.0, 4.0)
        .build();
    drag(&mut pad, (0.0, 0.0), (10.0, 0.0));
    assert_close(pad.camera.x, 10.0);
}

#[test]
fn test_gestures_are_strictly_sequential() {
    let mut pad = empty_pad();
    pad.handle_pointer_down(&PointerEvent::new(10.0, 10.0));
    // A second press while drawing is ignored rather than re-seeding.
    pad.handle_pointer_down(&PointerEvent::new(500.0, 500.0));
    assert_eq!(pad.input.drawing_points().unwrap().len(), 1);

    pad.handle_pointer_up();
    assert_stroke_count(&pad, 1);
}

#[test]
fn test_other_button_presses_are_ignored() {
    let mut pad = empty_pad();
    let down = PointerEvent::new(10.0, 10.0).with_button(PointerButton::Other);
    pad.handle_pointer_down(&down);
    assert!(pad.input.is_idle());
}

#[test]
fn test_moves_while_idle_are_ignored() {
    let mut pad = empty_pad();
    pad.handle_pointer_move(&PointerEvent::new(30.0, 30.0));
    assert!(pad.input.is_idle());
    assert_stroke_count(&pad, 0);
}

#[test]
fn test_pointer_leave_commits_like_release() {
    let mut pad = empty_pad();
    pad.handle_pointer_down(&PointerEvent::new(10.0, 10.0));
    pad.handle_pointer_move(&PointerEvent::new(40.0, 40.0));
    pad.handle_pointer_leave();

    assert!(pad.input.is_idle());
    assert_stroke_count(&pad, 1);
}

#[test]
fn test_tap_commits_single_point_stroke() {
    // A press with no movement still leaves ink; the seed point carries it.
    let mut pad = empty_pad();
    pad.handle_pointer_down(&PointerEvent::new(25.0, 25.0));
    pad.handle_pointer_up();

    assert_stroke_count(&pad, 1);
    assert_eq!(pad.board.active_layer().unwrap().strokes[0].points.len(), 1);
}

#[test]
fn test_tool_switch_applies_preset_but_keeps_color() {
    let mut pad = empty_pad();
    pad.brush.color = Rgba::rgb(200, 0, 0);
    pad.set_tool(Tool::Marker);

    assert_eq!(pad.tool, Tool::Marker);
    assert_close(pad.brush.size, 15.0);
    assert_eq!(pad.brush.color, Rgba::rgb(200, 0, 0));

    drag(&mut pad, (0.0, 0.0), (50.0, 0.0));
    let stroke = &pad.board.active_layer().unwrap().strokes[0];
    assert_eq!(stroke.tool, Tool::Marker);
    assert_eq!(stroke.color, Rgba::rgb(200, 0, 0));
}

#[test]
fn test_drawing_clears_selection_on_press() {
    let mut pad = TestPadBuilder::new()
        .with_stroke(&[(10.0, 10.0), (20.0, 20.0)])
        .build();
    pad.selection.set([0]);

    pad.handle_pointer_down(&PointerEvent::new(50.0, 50.0));
    assert!(pad.selection.is_empty());
    pad.handle_pointer_up();
}
