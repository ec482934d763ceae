//! Camera Controls Tests
//!
//! Tests for:
//! - Rig selection from config (orbit vs first person)
//! - Orbit pivot fallback to the origin and re-targeting
//! - Orbit auto-rotation, zoom clamping, drag rotation
//! - First-person look and input-source gating
//! - RigInput frame bookkeeping

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use meadow::controls::{
    CameraRig, CameraRigConfig, FirstPersonControls, InputSources, OrbitControls, PointerButtons, RigInput, RigMode,
};
use meadow::scene::props::GROUND_RADIUS;
use meadow::scene::transform::Transform;

const EPSILON: f32 = 1e-4;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

/// Direction the transform's -Z axis points in.
fn view_direction(t: &Transform) -> Vec3 {
    t.quaternion() * Vec3::NEG_Z
}

fn screen_input() -> RigInput {
    let mut input = RigInput::new();
    input.handle_resize(1280, 720);
    input
}

// ============================================================================
// Rig Selection
// ============================================================================

#[test]
fn first_person_config_builds_first_person_rig() {
    let config = CameraRigConfig::first_person();
    assert_eq!(config.fov, 80.0);
    assert_eq!(config.input, InputSources::JOYSTICK | InputSources::KEYBOARD);

    let rig = CameraRig::from_config(&config, Some(Vec3::new(9.0, 9.0, 9.0)));
    assert_eq!(rig.mode(), RigMode::FirstPerson);

    let CameraRig::FirstPerson(controls) = &rig else {
        panic!("expected first-person rig");
    };
    assert_eq!(controls.position, config.initial_position);
    // Looks at its own target, not at the pivot.
    let dir = (config.target - config.initial_position).normalize();
    assert!(vec3_approx(controls.forward(), dir));
}

#[test]
fn orbit_without_pivot_defaults_to_origin() {
    let config = CameraRigConfig {
        target: Vec3::new(1.0, 2.0, 3.0),
        ..CameraRigConfig::orbit()
    };
    let rig = CameraRig::from_config(&config, None);

    assert_eq!(rig.mode(), RigMode::Orbit);
    assert_eq!(rig.target(), Vec3::ZERO);
}

#[test]
fn orbit_with_pivot_centers_on_it() {
    let pivot = Vec3::new(0.0, 1.0, 0.0);
    let rig = CameraRig::from_config(&CameraRigConfig::orbit(), Some(pivot));
    assert_eq!(rig.target(), pivot);
}

#[test]
fn configs_are_structurally_interchangeable() {
    let mut config = CameraRigConfig::orbit();
    config.mode = RigMode::FirstPerson;
    let rig = CameraRig::from_config(&config, None);
    assert_eq!(rig.mode(), RigMode::FirstPerson);
}

#[test]
fn set_pivot_only_affects_orbit_rigs() {
    let mut orbit = CameraRig::from_config(&CameraRigConfig::orbit(), None);
    orbit.set_pivot(Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(orbit.target(), Vec3::new(2.0, 0.0, 0.0));

    let mut fp = CameraRig::from_config(&CameraRigConfig::first_person(), None);
    let before = fp.target();
    fp.set_pivot(Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(fp.target(), before);
}

#[test]
fn config_validation_rejects_bad_fov() {
    for fov in [0.0, -10.0, 180.0, f32::NAN] {
        let config = CameraRigConfig {
            fov,
            ..CameraRigConfig::first_person()
        };
        assert!(config.validate().is_err(), "fov {fov} accepted");
    }
    assert!(CameraRigConfig::orbit().validate().is_ok());
}

#[test]
fn orbit_preset_frames_the_whole_scene() {
    let config = CameraRigConfig::orbit();
    assert_eq!(config.fov, 60.0);
    assert_eq!(config.initial_position, Vec3::new(0.0, 5.0, 10.0));
    assert_eq!(config.auto_rotate, Some(2.0));
    // Outside the ground disk, so the mountain and rings are all in front.
    assert!(config.initial_position.length() > GROUND_RADIUS);
}

// ============================================================================
// Orbit Controls
// ============================================================================

#[test]
fn orbit_starts_where_configured() {
    let start = Vec3::new(0.0, 5.0, 10.0);
    let mut controls = OrbitControls::from_position(start, Vec3::ZERO);
    let mut transform = Transform::new();

    controls.update(&mut transform, &screen_input(), 60.0, 0.0);
    assert!(vec3_approx(transform.position, start));
}

#[test]
fn orbit_auto_rotate_keeps_distance_and_height() {
    let start = Vec3::new(0.0, 5.0, 10.0);
    let mut controls = OrbitControls::from_position(start, Vec3::ZERO).with_auto_rotate(2.0);
    let mut transform = Transform::new();
    let input = screen_input();

    for _ in 0..120 {
        controls.update(&mut transform, &input, 60.0, 1.0 / 60.0);
    }

    assert!((transform.position.length() - start.length()).abs() < 1e-3);
    assert!((transform.position.y - 5.0).abs() < 1e-3);
    // Two seconds at 2.0 is 1/15 of a revolution.
    assert!((controls.theta + TAU / 15.0).abs() < 1e-3, "theta {}", controls.theta);
}

#[test]
fn orbit_camera_faces_the_pivot() {
    let mut controls = OrbitControls::from_position(Vec3::new(3.0, 4.0, 5.0), Vec3::ZERO);
    let mut transform = Transform::new();
    controls.update(&mut transform, &screen_input(), 60.0, 0.0);

    let expected = (controls.center - transform.position).normalize();
    assert!(vec3_approx(view_direction(&transform), expected));
}

#[test]
fn orbit_camera_faces_the_pivot_at_the_pole() {
    let mut controls = OrbitControls::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    controls.enable_damping = false;
    let mut transform = Transform::new();
    let mut input = screen_input();

    input.set_button(PointerButtons::PRIMARY, true);
    input.cursor_delta = Vec2::new(0.0, 100_000.0);
    controls.update(&mut transform, &input, 60.0, 0.016);

    let expected = (controls.center - transform.position).normalize();
    assert!((view_direction(&transform) - expected).length() < 1e-3);
}

#[test]
fn orbit_secondary_drag_pans_the_pivot() {
    let mut controls = OrbitControls::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    let mut transform = Transform::new();
    let mut input = screen_input();

    input.set_button(PointerButtons::SECONDARY, true);
    input.cursor_delta = Vec2::new(10.0, 0.0);
    controls.update(&mut transform, &input, 60.0, 0.016);

    // Dragging right pulls the scene right, so the pivot moves left.
    assert!(controls.center.x < 0.0);
    assert!(controls.center.y.abs() < EPSILON);
    assert!(controls.center.z.abs() < EPSILON);
}

#[test]
fn orbit_follows_a_moved_pivot() {
    let mut controls = OrbitControls::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    let mut transform = Transform::new();
    controls.set_center(Vec3::new(0.0, 1.0, 0.0));
    controls.update(&mut transform, &screen_input(), 60.0, 0.016);

    assert!(vec3_approx(transform.position, Vec3::new(0.0, 1.0, 5.0)));
}

#[test]
fn orbit_zoom_is_clamped() {
    let mut controls = OrbitControls::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    let mut transform = Transform::new();
    let mut input = screen_input();

    input.handle_scroll(0.0, 500.0);
    controls.update(&mut transform, &input, 60.0, 0.016);
    assert_eq!(controls.radius, controls.min_distance);

    input.end_frame();
    input.handle_scroll(0.0, -5000.0);
    controls.update(&mut transform, &input, 60.0, 0.016);
    assert_eq!(controls.radius, controls.max_distance);
}

#[test]
fn orbit_drag_rotates_without_damping() {
    let mut controls = OrbitControls::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    controls.enable_damping = false;
    let mut transform = Transform::new();
    let mut input = screen_input();

    input.set_button(PointerButtons::PRIMARY, true);
    input.cursor_delta = Vec2::new(-180.0, 0.0);
    controls.update(&mut transform, &input, 60.0, 0.016);

    // 180px of a 720px screen is a quarter turn.
    assert!((controls.theta - TAU / 4.0).abs() < 1e-4);
    assert!((transform.position.length() - 5.0).abs() < 1e-3);
}

#[test]
fn orbit_polar_angle_is_clamped() {
    let mut controls = OrbitControls::from_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    controls.enable_damping = false;
    let mut transform = Transform::new();
    let mut input = screen_input();

    input.set_button(PointerButtons::PRIMARY, true);
    input.cursor_delta = Vec2::new(0.0, 100_000.0);
    controls.update(&mut transform, &input, 60.0, 0.016);

    assert!(controls.phi > 0.0);
    assert!(transform.position.is_finite());
}

// ============================================================================
// First-Person Controls
// ============================================================================

#[test]
fn first_person_keyboard_moves_forward() {
    let mut controls = FirstPersonControls::new(Vec3::new(0.0, 2.0, 8.0), Vec3::new(0.0, 2.0, 0.0), InputSources::KEYBOARD);
    let mut transform = Transform::new();
    let mut input = screen_input();
    input.set_move_axis(Vec2::new(0.0, 1.0));

    controls.update(&mut transform, &input, 1.0);

    assert!(vec3_approx(transform.position, Vec3::new(0.0, 2.0, 8.0 - controls.move_speed)));
}

#[test]
fn first_person_strafes_right() {
    let mut controls = FirstPersonControls::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), InputSources::KEYBOARD);
    let mut transform = Transform::new();
    let mut input = screen_input();
    input.set_move_axis(Vec2::new(1.0, 0.0));

    controls.update(&mut transform, &input, 0.5);
    assert!(vec3_approx(transform.position, Vec3::new(controls.move_speed * 0.5, 0.0, 0.0)));
}

#[test]
fn first_person_ignores_disabled_sources() {
    let mut controls = FirstPersonControls::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), InputSources::KEYBOARD);
    let mut transform = Transform::new();
    let mut input = screen_input();
    input.set_joystick_axis(Vec2::new(0.0, 1.0));

    controls.update(&mut transform, &input, 1.0);
    assert_eq!(transform.position, Vec3::ZERO);

    controls.sources = InputSources::JOYSTICK;
    controls.update(&mut transform, &input, 1.0);
    assert!(transform.position.z < 0.0);
}

#[test]
fn first_person_combined_axis_is_clamped() {
    let controls = FirstPersonControls::new(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, -1.0),
        InputSources::KEYBOARD | InputSources::JOYSTICK,
    );
    let mut input = screen_input();
    input.set_move_axis(Vec2::new(1.0, 1.0));
    input.set_joystick_axis(Vec2::new(1.0, 1.0));

    assert!((controls.movement_axis(&input).length() - 1.0).abs() < 1e-5);
}

#[test]
fn first_person_keeps_eye_height() {
    let mut controls = FirstPersonControls::new(
        Vec3::new(0.0, 2.537, 8.7),
        Vec3::new(0.0, 0.0, 0.0),
        InputSources::KEYBOARD,
    );
    let mut transform = Transform::new();
    let mut input = screen_input();
    input.set_move_axis(Vec2::new(0.3, 1.0));

    for _ in 0..30 {
        controls.update(&mut transform, &input, 1.0 / 30.0);
    }
    assert!((transform.position.y - 2.537).abs() < 1e-5);
}

#[test]
fn first_person_look_needs_primary_button() {
    let mut controls = FirstPersonControls::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), InputSources::empty());
    let mut transform = Transform::new();
    let mut input = screen_input();
    input.cursor_delta = Vec2::new(100.0, 0.0);

    controls.update(&mut transform, &input, 0.016);
    assert_eq!(controls.yaw, 0.0);

    input.set_button(PointerButtons::PRIMARY, true);
    controls.update(&mut transform, &input, 0.016);
    assert!(controls.yaw < 0.0);
    // Dragging right turns the view towards +X.
    assert!(controls.forward().x > 0.0);
}

#[test]
fn first_person_view_follows_yaw_and_pitch() {
    let mut controls = FirstPersonControls::new(Vec3::ZERO, Vec3::new(1.0, 0.5, -2.0), InputSources::empty());
    let mut transform = Transform::new();
    controls.update(&mut transform, &screen_input(), 0.016);

    assert!(vec3_approx(view_direction(&transform), controls.forward()));
    assert!(vec3_approx(controls.forward(), Vec3::new(1.0, 0.5, -2.0).normalize()));
}

#[test]
fn first_person_still_turns_at_max_pitch() {
    let mut controls = FirstPersonControls::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), InputSources::empty());
    let mut transform = Transform::new();
    let mut input = screen_input();
    input.set_button(PointerButtons::PRIMARY, true);

    // Look all the way up.
    input.cursor_delta = Vec2::new(0.0, -10_000.0);
    controls.update(&mut transform, &input, 0.016);
    let up_view = view_direction(&transform);
    assert!(up_view.y > 0.99, "view {up_view}");
    assert!((up_view - controls.forward()).length() < 1e-3);

    // Then turn while still looking up.
    input.cursor_delta = Vec2::new(-100.0, 0.0);
    controls.update(&mut transform, &input, 0.016);
    assert!((controls.yaw - 0.3).abs() < EPSILON);
    assert!((view_direction(&transform) - controls.forward()).length() < 1e-3);
    assert_ne!(view_direction(&transform), up_view);
}

// ============================================================================
// RigInput
// ============================================================================

#[test]
fn input_end_frame_clears_only_deltas() {
    let mut input = screen_input();
    input.handle_cursor_move(10.0, 10.0);
    input.handle_cursor_move(15.0, 12.0);
    input.handle_scroll(0.0, 1.0);
    input.set_button(PointerButtons::SECONDARY, true);
    input.set_move_axis(Vec2::new(0.0, 3.0));

    assert_eq!(input.cursor_delta, Vec2::new(5.0, 2.0));
    assert_eq!(input.move_axis, Vec2::new(0.0, 1.0));

    input.end_frame();
    assert_eq!(input.cursor_delta, Vec2::ZERO);
    assert_eq!(input.scroll_delta, Vec2::ZERO);
    assert!(input.is_pressed(PointerButtons::SECONDARY));
    assert_eq!(input.move_axis, Vec2::new(0.0, 1.0));
}
