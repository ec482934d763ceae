//! Motion Math
//!
//! Each motion maps `(transform, frame time, params)` to a new transform.
//! Terms derived from absolute elapsed time are recomputed from scratch every
//! frame, so dropped or uneven frames never introduce drift. Only spin
//! accumulates from the frame delta.

use crate::scene::entity::{AnimParams, Motion, OrbitParams};
use crate::scene::transform::Transform;
use crate::utils::time::FrameTime;

/// Peak vertical displacement of a bobbing cloud.
pub const CLOUD_BOB_AMPLITUDE: f32 = 0.2;

/// Something that can move a transform for one frame.
pub trait Animate {
    fn animate(&self, transform: &mut Transform, time: FrameTime);
}

impl AnimParams {
    /// Height of the bob at `elapsed` seconds.
    #[inline]
    #[must_use]
    pub fn bob_height(&self, elapsed: f32) -> f32 {
        self.base_y + (elapsed * self.vertical_speed + self.phase).sin() * CLOUD_BOB_AMPLITUDE
    }
}

impl Animate for AnimParams {
    #[inline]
    fn animate(&self, transform: &mut Transform, time: FrameTime) {
        transform.rotation.y += self.rotation_speed * time.sanitized_delta();
        transform.position.y = self.bob_height(time.elapsed);
    }
}

impl OrbitParams {
    /// Horizontal `(x, z)` position at `elapsed` seconds.
    #[inline]
    #[must_use]
    pub fn position_at(&self, elapsed: f32) -> (f32, f32) {
        let angle = elapsed * self.speed;
        (angle.cos() * self.radius, angle.sin() * self.radius)
    }
}

impl Animate for OrbitParams {
    #[inline]
    fn animate(&self, transform: &mut Transform, time: FrameTime) {
        let (x, z) = self.position_at(time.elapsed);
        transform.position.x = x;
        transform.position.z = z;
    }
}

impl Animate for Motion {
    #[inline]
    fn animate(&self, transform: &mut Transform, time: FrameTime) {
        match self {
            Motion::CloudBob(params) => params.animate(transform, time),
            Motion::Orbit(params) => params.animate(transform, time),
        }
    }
}
