use std::borrow::Cow;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::shape::Part;
use crate::scene::transform::Transform;

/// What an entity represents in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ground,
    Road,
    Mountain,
    Tree,
    Cloud,
    OrbitBall,
}

/// Per-cloud motion constants.
///
/// Drawn once when the scene is composed and never recomputed, so every cloud
/// keeps the same spin and bob for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimParams {
    /// Spin around Y, radians per second.
    pub rotation_speed: f32,
    /// Bob frequency, radians of sine argument per second.
    pub vertical_speed: f32,
    /// Rest height the bob oscillates around.
    pub base_y: f32,
    /// Sine phase offset in radians.
    pub phase: f32,
}

impl AnimParams {
    #[must_use]
    pub fn with_base_y(mut self, base_y: f32) -> Self {
        self.base_y = base_y;
        self
    }
}

/// Circular path around the vertical axis through the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitParams {
    pub radius: f32,
    /// Angular speed, radians per second.
    pub speed: f32,
    /// Constant height of the orbiting body.
    pub height: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            radius: 4.2,
            speed: 1.0,
            height: 1.0,
        }
    }
}

/// Per-frame behavior attached to an animated entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Spin around Y plus a vertical sine bob.
    CloudBob(AnimParams),
    /// Travel along a horizontal circle.
    Orbit(OrbitParams),
}

/// A scene entity: placement, shape and optional motion.
///
/// Everything except the transform is fixed at construction. The transform is
/// only handed out mutably to the animation system.
#[derive(Debug, Clone)]
pub struct Entity {
    name: Cow<'static, str>,
    kind: EntityKind,
    parts: Vec<Part>,
    motion: Option<Motion>,
    pub(crate) transform: Transform,
}

impl Entity {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, kind: EntityKind, transform: Transform) -> Self {
        Self {
            name: name.into(),
            kind,
            parts: Vec::new(),
            motion: None,
            transform,
        }
    }

    #[must_use]
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    #[must_use]
    pub fn with_parts(mut self, parts: impl IntoIterator<Item = Part>) -> Self {
        self.parts.extend(parts);
        self
    }

    #[must_use]
    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[inline]
    #[must_use]
    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    /// Cloud motion constants, if this entity bobs.
    #[must_use]
    pub fn anim_params(&self) -> Option<&AnimParams> {
        match &self.motion {
            Some(Motion::CloudBob(params)) => Some(params),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.motion.is_some()
    }

    /// Split borrow used by the animation system.
    pub(crate) fn motion_and_transform_mut(&mut self) -> Option<(&Motion, &mut Transform)> {
        let Self {
            motion, transform, ..
        } = self;
        motion.as_ref().map(|motion| (motion, transform))
    }

    #[inline]
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    #[inline]
    #[must_use]
    pub fn rotation(&self) -> Vec3 {
        self.transform.rotation
    }
}
