//! Animation System Tests
//!
//! Tests for:
//! - Cloud bob height from absolute time
//! - Cloud spin accumulation from frame delta
//! - Orbit position from absolute time
//! - Replay safety: same elapsed time gives same absolute terms
//! - Degenerate deltas (zero, negative, NaN)
//! - AnimationSystem over a composed scene

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;
use meadow::animation::Animate;
use meadow::{
    AnimParams, AnimationSystem, CLOUD_BOB_AMPLITUDE, EntityKind, FrameTime, OrbitParams, SceneComposer, SceneParams,
    Transform,
};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn cloud_params() -> AnimParams {
    AnimParams {
        rotation_speed: 0.2,
        vertical_speed: 1.0,
        base_y: 4.0,
        phase: 0.0,
    }
}

fn scene_with_ball() -> meadow::SceneGraph {
    SceneComposer::build(&SceneParams {
        seed: Some(5),
        orbit_ball: Some(OrbitParams::default()),
        ..Default::default()
    })
    .unwrap()
}

// ============================================================================
// Cloud Bob & Spin
// ============================================================================

#[test]
fn cloud_peaks_a_quarter_period_in() {
    let params = cloud_params();
    let mut t = Transform::from_position(Vec3::new(3.5, 4.0, 0.0));

    params.animate(&mut t, FrameTime::new(0.016, FRAC_PI_2));
    assert!(approx(t.position.y, 4.2), "got {}", t.position.y);
}

#[test]
fn cloud_bob_stays_within_amplitude() {
    let params = AnimParams {
        vertical_speed: 1.3,
        ..cloud_params()
    };
    let mut t = Transform::new();
    for i in 0..1000 {
        params.animate(&mut t, FrameTime::new(0.01, i as f32 * 0.01));
        assert!((t.position.y - 4.0).abs() <= CLOUD_BOB_AMPLITUDE + EPSILON);
    }
}

#[test]
fn cloud_bob_leaves_horizontal_position_alone() {
    let mut t = Transform::from_position(Vec3::new(1.0, 4.0, -2.0));
    cloud_params().animate(&mut t, FrameTime::new(0.5, 3.0));
    assert_eq!(t.position.x, 1.0);
    assert_eq!(t.position.z, -2.0);
}

#[test]
fn cloud_phase_shifts_the_bob() {
    let params = AnimParams {
        phase: FRAC_PI_2,
        ..cloud_params()
    };
    let mut t = Transform::new();
    params.animate(&mut t, FrameTime::new(0.0, 0.0));
    assert!(approx(t.position.y, 4.2));
}

#[test]
fn cloud_spin_accumulates_from_delta() {
    let params = cloud_params();
    let mut t = Transform::new();

    params.animate(&mut t, FrameTime::new(0.5, 0.5));
    assert!(approx(t.rotation.y, 0.1));
    params.animate(&mut t, FrameTime::new(0.5, 1.0));
    assert!(approx(t.rotation.y, 0.2));
}

#[test]
fn cloud_spin_is_monotonic_and_unwrapped() {
    let params = AnimParams {
        rotation_speed: 0.3,
        ..cloud_params()
    };
    let mut t = Transform::new();
    let mut elapsed = 0.0;
    let mut previous = t.rotation.y;

    for i in 0..2000 {
        let dt = if i % 3 == 0 { 0.0 } else { 0.05 + (i % 7) as f32 * 0.01 };
        elapsed += dt;
        params.animate(&mut t, FrameTime::new(dt, elapsed));
        assert!(t.rotation.y >= previous);
        previous = t.rotation.y;
    }
    // No wrapping back into [0, 2π)
    assert!(t.rotation.y > 2.0 * PI);
}

#[test]
fn zero_delta_keeps_spin_and_recomputes_bob() {
    let params = cloud_params();
    let mut t = Transform::new();
    params.animate(&mut t, FrameTime::new(0.1, 2.0));
    let (rotation, height) = (t.rotation.y, t.position.y);

    params.animate(&mut t, FrameTime::new(0.0, 2.0));
    assert_eq!(t.rotation.y, rotation);
    assert_eq!(t.position.y, height);
}

#[test]
fn negative_or_nan_delta_never_unwinds_spin() {
    let params = cloud_params();
    let mut t = Transform::new();
    params.animate(&mut t, FrameTime::new(1.0, 1.0));
    let rotation = t.rotation.y;

    params.animate(&mut t, FrameTime::new(-0.5, 1.0));
    params.animate(&mut t, FrameTime::new(f32::NAN, 1.0));
    assert_eq!(t.rotation.y, rotation);
}

// ============================================================================
// Orbit
// ============================================================================

#[test]
fn orbit_stays_on_its_circle() {
    let params = OrbitParams::default();
    let mut t = Transform::from_position(Vec3::new(0.0, params.height, 0.0));

    for i in 0..500 {
        params.animate(&mut t, FrameTime::new(0.037, i as f32 * 0.037));
        let r2 = t.position.x * t.position.x + t.position.z * t.position.z;
        assert!((r2 - params.radius * params.radius).abs() < 1e-3, "r² = {r2}");
        assert_eq!(t.position.y, params.height);
    }
}

#[test]
fn orbit_position_follows_elapsed_time() {
    let params = OrbitParams {
        radius: 2.0,
        speed: 0.5,
        height: 1.0,
    };
    let (x, z) = params.position_at(PI);
    assert!(approx(x, 0.0));
    assert!(approx(z, 2.0));
}

// ============================================================================
// AnimationSystem over a SceneGraph
// ============================================================================

#[test]
fn tick_is_replay_safe_for_absolute_terms() {
    let mut a = scene_with_ball();
    let mut b = scene_with_ball();

    // Different frame histories, same final elapsed time.
    for i in 1..=60 {
        a.tick(1.0 / 60.0, i as f32 / 60.0);
    }
    b.tick(0.3, 0.3);
    b.tick(0.0, 0.3);
    b.tick(0.7, 1.0);

    for ((_, ea), (_, eb)) in a.iter().zip(b.iter()) {
        match ea.kind() {
            EntityKind::Cloud => assert!(approx(ea.position().y, eb.position().y)),
            EntityKind::OrbitBall => {
                assert!(approx(ea.position().x, eb.position().x));
                assert!(approx(ea.position().z, eb.position().z));
            }
            _ => {}
        }
    }
}

#[test]
fn repeated_elapsed_time_is_idempotent() {
    let mut scene = scene_with_ball();
    scene.tick(0.25, 1.5);
    let before: Vec<_> = scene.iter().map(|(_, e)| (e.position(), e.rotation())).collect();

    scene.tick(0.0, 1.5);
    let after: Vec<_> = scene.iter().map(|(_, e)| (e.position(), e.rotation())).collect();

    assert_eq!(before, after);
}

#[test]
fn tick_only_moves_animated_entities() {
    let mut scene = scene_with_ball();
    let before: Vec<_> = scene
        .iter()
        .filter(|(_, e)| !e.is_animated())
        .map(|(_, e)| (e.position(), e.rotation()))
        .collect();

    AnimationSystem::tick(&mut scene, FrameTime::new(0.5, 10.0));

    let after: Vec<_> = scene
        .iter()
        .filter(|(_, e)| !e.is_animated())
        .map(|(_, e)| (e.position(), e.rotation()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn clouds_bob_around_their_ring_height() {
    let mut scene = scene_with_ball();
    scene.tick(0.016, 2.0);

    for (_, cloud) in scene.entities_of(EntityKind::Cloud) {
        let params = cloud.anim_params().unwrap();
        assert_eq!(params.base_y, 4.0);
        let expected = 4.0 + (2.0 * params.vertical_speed).sin() * CLOUD_BOB_AMPLITUDE;
        assert!(approx(cloud.position().y, expected));
    }
}

#[test]
fn tick_refreshes_local_matrix() {
    let mut scene = scene_with_ball();
    scene.tick(0.1, 0.7);

    let (_, ball) = scene.find_by_name("orbit_ball").unwrap();
    let translation = Vec3::from(ball.transform().local_matrix().translation);
    assert!((translation - ball.position()).length() < EPSILON);
}
