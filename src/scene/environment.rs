use glam::Vec3;

use crate::scene::shape::Color;

/// Point light with optional shadow casting.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    pub cast_shadows: bool,
}

/// Procedural star field drawn on a sphere shell around the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    pub radius: f32,
    pub depth: f32,
    pub count: u32,
    pub factor: f32,
}

impl Default for StarField {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 5000,
            factor: 4.0,
        }
    }
}

/// Background and lighting of the scene.
///
/// Passed through untouched to the renderer; nothing in this crate reads it
/// back.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub background: Color,
    pub ambient_intensity: f32,
    pub lights: Vec<PointLight>,
    pub stars: Option<StarField>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: Color::SKY_BLUE,
            ambient_intensity: 0.3,
            lights: vec![PointLight {
                position: Vec3::new(5.0, 5.0, 5.0),
                intensity: 0.5,
                cast_shadows: true,
            }],
            stars: Some(StarField::default()),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
