//! Viewport Integration Tests
//!
//! Wheel zoom through the event handler: anchoring, bounds, and how the
//! camera composes with later gestures.

use crate::helpers::{assert_close, assert_vec2_close, empty_pad, TestPadBuilder};
use inkboard::constants::{MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP};
use inkboard::input::{PointerEvent, WheelEvent};
use inkboard::types::Vec2;

#[test]
fn test_wheel_up_zooms_in_anchored_at_cursor() {
    let mut pad = empty_pad();
    let anchor = Vec2::new(400.0, 300.0);
    let world_before = pad.camera.screen_to_world(anchor);

    pad.handle_wheel(&WheelEvent::new(anchor.x, anchor.y, -120.0));

    assert_close(pad.camera.k, WHEEL_ZOOM_STEP);
    assert_vec2_close(pad.camera.world_to_screen(world_before), anchor);
}

#[test]
fn test_wheel_down_zooms_out() {
    let mut pad = empty_pad();
    pad.handle_wheel(&WheelEvent::new(100.0, 100.0, 120.0));
    assert_close(pad.camera.k, 1.0 / WHEEL_ZOOM_STEP);
}

#[test]
fn test_zoom_in_and_out_return_to_identity() {
    let mut pad = empty_pad();
    pad.handle_wheel(&WheelEvent::new(250.0, 140.0, -120.0));
    pad.handle_wheel(&WheelEvent::new(250.0, 140.0, 120.0));

    assert_close(pad.camera.k, 1.0);
    assert_close(pad.camera.x, 0.0);
    assert_close(pad.camera.y, 0.0);
}

#[test]
fn test_repeated_zoom_keeps_the_same_world_point_under_cursor() {
    let mut pad = empty_pad();
    pad.camera.x = -50.0;
    pad.camera.y = 120.0;
    let cursor = Vec2::new(200.0, 100.0);
    let pinned = pad.camera.screen_to_world(cursor);

    for _ in 0..5 {
        pad.handle_wheel(&WheelEvent::new(cursor.x, cursor.y, -120.0));
    }

    assert_vec2_close(pad.camera.world_to_screen(pinned), cursor);
}

#[test]
fn test_wheel_zoom_dropped_at_upper_bound() {
    let mut pad = empty_pad();
    pad.camera.k = 9.8;
    pad.camera.x = 33.0;

    // 9.8 * 1.1 would exceed the bound, so nothing changes.
    pad.handle_wheel(&WheelEvent::new(0.0, 0.0, -120.0));
    assert_close(pad.camera.k, 9.8);
    assert_close(pad.camera.x, 33.0);
    assert!(pad.camera.k <= MAX_ZOOM);
}

#[test]
fn test_wheel_zoom_dropped_at_lower_bound() {
    let mut pad = empty_pad();
    pad.camera.k = 0.105;

    pad.handle_wheel(&WheelEvent::new(0.0, 0.0, 120.0));
    assert_close(pad.camera.k, 0.105);
    assert!(pad.camera.k >= MIN_ZOOM);
}

#[test]
fn test_drawing_after_zoom_lands_in_world_space() {
    // Zoom in once anchored at the origin, then draw at a known screen
    // position; the committed points must be the unprojected positions.
    let mut pad = TestPadBuilder::new().with_smoothing(0.0).build();
    pad.handle_wheel(&WheelEvent::new(0.0, 0.0, -120.0));
    let k = pad.camera.k;

    pad.handle_pointer_down(&PointerEvent::new(110.0, 55.0));
    pad.handle_pointer_move(&PointerEvent::new(220.0, 110.0));
    pad.handle_pointer_up();

    let stroke = &pad.board.active_layer().unwrap().strokes[0];
    assert_close(stroke.points[0].x, 110.0 / k);
    assert_close(stroke.points[0].y, 55.0 / k);
    assert_close(stroke.points[1].x, 220.0 / k);
}

#[test]
fn test_wheel_ignored_mid_gesture_still_zooms_camera() {
    // The wheel handler is independent of the pointer state machine; a
    // zoom mid-stroke applies immediately and later points unproject
    // through the new camera.
    let mut pad = TestPadBuilder::new().with_smoothing(0.0).build();
    pad.handle_pointer_down(&PointerEvent::new(100.0, 100.0));
    pad.handle_wheel(&WheelEvent::new(0.0, 0.0, -120.0));
    let k = pad.camera.k;
    pad.handle_pointer_move(&PointerEvent::new(100.0, 100.0));
    pad.handle_pointer_up();

    let stroke = &pad.board.active_layer().unwrap().strokes[0];
    assert_close(stroke.points[0].x, 100.0);
    assert_close(stroke.points[1].x, 100.0 / k);
}
