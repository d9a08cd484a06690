use super::*;
use crate::config::KeybindingsConfig;
use crate::draw::{BLACK, CanvasGeometry, FontDescriptor, GREEN, Point};
use crate::input::{Key, MouseButton};

fn create_test_input_state() -> InputState {
    let keybindings = KeybindingsConfig::default();
    let action_map = keybindings.build_action_map().unwrap();

    let mut state = InputState::with_defaults(
        BLACK,
        2.0,  // thickness
        14.0, // label_size
        FontDescriptor::default(),
        true, // show_status_bar
        CanvasGeometry::new(1140.0, 700.0),
        action_map,
        0, // max_segments (unlimited)
    );
    // Surface matches the canvas, so surface and drawing coordinates coincide.
    state.update_surface_dimensions(1140, 700);
    state
}

#[test]
fn press_move_release_commits_exactly_one_segment() {
    let mut state = create_test_input_state();

    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    assert!(state.is_drawing());

    state.on_mouse_motion(50.0, 10.0);
    state.on_mouse_release(MouseButton::Left);

    assert_eq!(state.store.len(), 1);
    assert_eq!(state.store.measurements().len(), 1);

    let segment = state.store.segments()[0];
    assert_eq!(segment.start, Point::new(10.0, 10.0));
    assert_eq!(segment.end, Point::new(50.0, 10.0));
    assert!((state.store.measurements()[0].length() - 40.0).abs() < 1e-9);
}

#[test]
fn commit_returns_the_machine_to_idle() {
    let mut state = create_test_input_state();

    state.on_mouse_press(MouseButton::Left, 100.0, 100.0);
    state.on_mouse_motion(150.0, 180.0);
    state.on_mouse_release(MouseButton::Left);

    assert!(matches!(state.state, DrawingState::Idle));
    assert!(!state.is_drawing());
    assert!(state.preview_segment().is_none());
}

#[test]
fn idle_motion_mutates_nothing() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;

    state.on_mouse_motion(200.0, 200.0);

    assert!(matches!(state.state, DrawingState::Idle));
    assert!(state.store.is_empty());
    assert!(!state.needs_redraw);
}

#[test]
fn release_while_idle_is_a_no_op() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;

    state.on_mouse_release(MouseButton::Left);

    assert!(state.store.is_empty());
    assert!(!state.needs_redraw);
}

#[test]
fn escape_while_drawing_commits_the_segment() {
    let mut state = create_test_input_state();

    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_key_press(Key::Escape);

    // The in-flight stroke is committed, zero-length, and the app keeps running.
    assert_eq!(state.store.len(), 1);
    let segment = state.store.segments()[0];
    assert_eq!(segment.start, Point::new(0.0, 0.0));
    assert_eq!(segment.end, Point::new(0.0, 0.0));
    assert_eq!(segment.length(), 0.0);
    assert!(matches!(state.state, DrawingState::Idle));
    assert!(!state.should_exit);
}

#[test]
fn escape_while_idle_requests_exit() {
    let mut state = create_test_input_state();

    state.on_key_press(Key::Escape);

    assert!(state.should_exit);
    assert!(state.store.is_empty());
}

#[test]
fn two_sequential_draws_commit_in_order() {
    let mut state = create_test_input_state();

    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    state.on_mouse_motion(50.0, 10.0);
    state.on_mouse_release(MouseButton::Left);

    state.on_mouse_press(MouseButton::Left, 50.0, 10.0);
    state.on_mouse_motion(50.0, 90.0);
    state.on_mouse_release(MouseButton::Left);

    assert_eq!(state.store.len(), 2);
    assert_eq!(state.store.measurements().len(), 2);
    assert_eq!(state.store.segments()[0].end, Point::new(50.0, 10.0));
    assert_eq!(state.store.segments()[1].start, Point::new(50.0, 10.0));
    assert_eq!(state.store.segments()[1].end, Point::new(50.0, 90.0));
}

#[test]
fn preview_tracks_the_latest_pointer_position() {
    let mut state = create_test_input_state();

    state.on_mouse_press(MouseButton::Left, 20.0, 30.0);
    let preview = state.preview_segment().unwrap();
    assert_eq!(preview.start, preview.end);

    state.on_mouse_motion(120.0, 30.0);
    let preview = state.preview_segment().unwrap();
    assert_eq!(preview.start, Point::new(20.0, 30.0));
    assert_eq!(preview.end, Point::new(120.0, 30.0));
    assert!(state.store.is_empty());
}

#[test]
fn press_outside_the_canvas_is_ignored() {
    let mut state = create_test_input_state();
    // Larger surface: canvas centered at (430, 150).
    state.update_surface_dimensions(2000, 1000);
    state.needs_redraw = false;

    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    assert!(matches!(state.state, DrawingState::Idle));
    assert!(!state.needs_redraw);

    // On the sheet, the mapped start point is canvas-relative.
    state.on_mouse_press(MouseButton::Left, 440.0, 160.0);
    match state.state {
        DrawingState::Drawing { start, .. } => {
            assert_eq!(start, Point::new(10.0, 10.0));
        }
        DrawingState::Idle => panic!("press on the canvas should start a stroke"),
    }
}

#[test]
fn right_click_discards_the_in_progress_stroke() {
    let mut state = create_test_input_state();

    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    state.on_mouse_motion(90.0, 90.0);
    state.on_mouse_press(MouseButton::Right, 90.0, 90.0);

    assert!(matches!(state.state, DrawingState::Idle));
    assert!(state.store.is_empty());
}

#[test]
fn color_keys_change_the_pen() {
    let mut state = create_test_input_state();
    assert_eq!(state.current_color, BLACK);

    state.on_key_press(Key::Char('g'));

    assert_eq!(state.current_color, GREEN);
    assert!(state.needs_redraw);
}

#[test]
fn thickness_adjustment_clamps_to_range() {
    let mut state = create_test_input_state();

    state.current_thickness = 19.5;
    state.on_key_press(Key::Plus);
    assert_eq!(state.current_thickness, 20.0);
    state.on_key_press(Key::Plus);
    assert_eq!(state.current_thickness, 20.0);

    state.current_thickness = 1.5;
    state.on_key_press(Key::Minus);
    assert_eq!(state.current_thickness, 1.0);
    state.on_key_press(Key::Minus);
    assert_eq!(state.current_thickness, 1.0);
}

#[test]
fn label_size_adjustment_clamps_to_range() {
    let mut state = create_test_input_state();

    state.label_size = 71.0;
    state.adjust_label_size(5.0);
    assert_eq!(state.label_size, 72.0);

    state.label_size = 9.0;
    state.adjust_label_size(-5.0);
    assert_eq!(state.label_size, 8.0);
}

#[test]
fn segment_limit_still_returns_to_idle() {
    let mut state = create_test_input_state();
    state.max_segments = 1;

    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_motion(10.0, 0.0);
    state.on_mouse_release(MouseButton::Left);

    state.on_mouse_press(MouseButton::Left, 20.0, 0.0);
    state.on_mouse_motion(30.0, 0.0);
    state.on_mouse_release(MouseButton::Left);

    assert_eq!(state.store.len(), 1);
    assert!(matches!(state.state, DrawingState::Idle));
}

#[test]
fn help_and_status_bar_toggles() {
    let mut state = create_test_input_state();
    assert!(!state.show_help);
    assert!(state.show_status_bar);

    state.on_key_press(Key::F10);
    assert!(state.show_help);

    state.on_key_press(Key::F12);
    assert!(!state.show_status_bar);
}
