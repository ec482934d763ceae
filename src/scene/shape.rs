//! Declarative Shapes
//!
//! Geometry and material descriptions for scene entities. Nothing here is
//! tessellated; the renderer behind the scene graph turns these into meshes.
//! Angles and sizes follow the usual three.js primitive conventions (circle
//! and ring lie in the XY plane, cones and cylinders stand along +Y).

use bitflags::bitflags;
use glam::Vec3;

bitflags! {
    /// Shadow participation of a part.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ShadowFlags: u8 {
        const CAST    = 1 << 0;
        const RECEIVE = 1 << 1;
    }
}

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub Vec3);

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GREEN: Self = Self::rgb(0.0, 0.502, 0.0);
    pub const GRAY: Self = Self::rgb(0.502, 0.502, 0.502);
    pub const BROWN: Self = Self::rgb(0.647, 0.165, 0.165);
    pub const PINK: Self = Self::rgb(1.0, 0.753, 0.796);
    pub const SKY_BLUE: Self = Self::rgb(0.529, 0.808, 0.922);

    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(Vec3::new(r, g, b))
    }
}

/// A primitive geometry description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        radius: f32,
        segments: u32,
    },
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

/// One renderable piece of an entity, placed relative to the entity's transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    pub shape: Shape,
    pub color: Color,
    pub offset: Vec3,
    pub scale: f32,
    pub shadows: ShadowFlags,
}

impl Part {
    #[must_use]
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            color,
            offset: Vec3::ZERO,
            scale: 1.0,
            shadows: ShadowFlags::empty(),
        }
    }

    #[must_use]
    pub fn at(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn casting_shadows(mut self) -> Self {
        self.shadows |= ShadowFlags::CAST;
        self
    }

    #[must_use]
    pub fn receiving_shadows(mut self) -> Self {
        self.shadows |= ShadowFlags::RECEIVE;
        self
    }
}
