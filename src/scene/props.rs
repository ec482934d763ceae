//! Scene Props
//!
//! Factories for every entity the meadow scene is made of. Dimensions and
//! colors are the reference scene's; only placement and motion vary.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::scene::entity::{AnimParams, Entity, EntityKind, Motion, OrbitParams};
use crate::scene::shape::{Color, Part, Shape};
use crate::scene::transform::Transform;

/// Radius of the ground disk.
pub const GROUND_RADIUS: f32 = 5.0;
/// Height of the ground disk.
pub const GROUND_LEVEL: f32 = -0.75;

/// Circle and ring geometry lie in XY; this lays them flat.
const FLAT: Vec3 = Vec3::new(-FRAC_PI_2, 0.0, 0.0);

#[must_use]
pub fn ground() -> Entity {
    Entity::new(
        "ground",
        EntityKind::Ground,
        Transform::from_position(Vec3::new(0.0, GROUND_LEVEL, 0.0)).with_rotation(FLAT),
    )
    .with_part(
        Part::new(
            Shape::Circle {
                radius: GROUND_RADIUS,
                segments: 32,
            },
            Color::GREEN,
        )
        .receiving_shadows(),
    )
}

/// Ring road along the rim of the ground, lifted slightly to avoid z-fighting.
#[must_use]
pub fn road() -> Entity {
    Entity::new(
        "road",
        EntityKind::Road,
        Transform::from_position(Vec3::new(0.0, GROUND_LEVEL + 0.01, 0.0)).with_rotation(FLAT),
    )
    .with_part(
        Part::new(
            Shape::Ring {
                inner_radius: 4.5,
                outer_radius: GROUND_RADIUS,
                segments: 32,
            },
            Color::GRAY,
        )
        .receiving_shadows(),
    )
}

#[must_use]
pub fn mountain() -> Entity {
    Entity::new(
        "mountain",
        EntityKind::Mountain,
        Transform::from_position(Vec3::new(0.0, 1.0, 0.0)),
    )
    .with_part(
        Part::new(
            Shape::Cone {
                radius: 2.5,
                height: 4.0,
                segments: 32,
            },
            Color::GRAY,
        )
        .casting_shadows(),
    )
}

#[must_use]
pub fn tree(index: usize, position: Vec3) -> Entity {
    let trunk = Part::new(
        Shape::Cylinder {
            radius_top: 0.1,
            radius_bottom: 0.15,
            height: 1.5,
            segments: 16,
        },
        Color::BROWN,
    )
    .casting_shadows();

    let foliage = Part::new(
        Shape::Cone {
            radius: 0.7,
            height: 1.5,
            segments: 16,
        },
        Color::GREEN,
    )
    .at(Vec3::new(0.0, 0.7, 0.0))
    .casting_shadows();

    Entity::new(format!("tree_{index}"), EntityKind::Tree, Transform::from_position(position))
        .with_parts([trunk, foliage])
}

/// A cluster of four spheres that spins and bobs according to `params`.
#[must_use]
pub fn cloud(index: usize, position: Vec3, params: AnimParams) -> Entity {
    const PUFFS: [(Vec3, f32); 4] = [
        (Vec3::new(0.0, 0.0, 0.0), 0.6),
        (Vec3::new(0.5, 0.3, 0.5), 0.3),
        (Vec3::new(-0.5, 0.3, 0.5), 0.4),
        (Vec3::new(0.0, 0.3, -0.5), 0.3),
    ];

    let puffs = PUFFS.iter().map(|&(offset, scale)| {
        Part::new(
            Shape::Sphere {
                radius: 1.0,
                width_segments: 16,
                height_segments: 16,
            },
            Color::WHITE,
        )
        .at(offset)
        .scaled(scale)
        .casting_shadows()
    });

    Entity::new(format!("cloud_{index}"), EntityKind::Cloud, Transform::from_position(position))
        .with_parts(puffs)
        .with_motion(Motion::CloudBob(params))
}

/// A ball travelling around the mountain, starting at its angle-zero position.
#[must_use]
pub fn orbit_ball(params: OrbitParams) -> Entity {
    Entity::new(
        "orbit_ball",
        EntityKind::OrbitBall,
        Transform::from_position(Vec3::new(params.radius, params.height, 0.0)),
    )
    .with_part(
        Part::new(
            Shape::Sphere {
                radius: 0.5,
                width_segments: 32,
                height_segments: 32,
            },
            Color::PINK,
        )
        .casting_shadows(),
    )
    .with_motion(Motion::Orbit(params))
}
