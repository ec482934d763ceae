//! Ring Layout
//!
//! Places `count` items at equal angular intervals on a horizontal circle and
//! draws the per-instance motion constants for animated ring members.
//!
//! Positions are deterministic. Motion constants come from a seeded
//! [`StdRng`], so a given seed always reproduces the same scene.

use std::f32::consts::TAU;
use std::ops::Range;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::errors::{MeadowError, Result};
use crate::scene::entity::AnimParams;

/// Range `rotation_speed` is drawn from (radians per second).
pub const ROTATION_SPEED_RANGE: Range<f32> = 0.1..0.3;
/// Range `vertical_speed` is drawn from.
pub const VERTICAL_SPEED_RANGE: Range<f32> = 0.5..1.5;

/// Parameters of one ring of entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub count: usize,
    pub radius: f32,
    pub height: f32,
    /// When false, `count == 0` is rejected instead of producing an empty ring.
    pub allow_empty: bool,
}

impl RingLayout {
    #[must_use]
    pub fn new(count: usize, radius: f32, height: f32) -> Self {
        Self {
            count,
            radius,
            height,
            allow_empty: true,
        }
    }

    #[must_use]
    pub fn non_empty(mut self) -> Self {
        self.allow_empty = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeadowError::InvalidLayoutParameter {
                parameter: "radius",
                value: self.radius,
                reason: "ring radius must be a positive finite number",
            });
        }
        if !self.height.is_finite() {
            return Err(MeadowError::InvalidLayoutParameter {
                parameter: "height",
                value: self.height,
                reason: "ring height must be finite",
            });
        }
        if self.count == 0 && !self.allow_empty {
            return Err(MeadowError::InvalidLayoutParameter {
                parameter: "count",
                value: 0.0,
                reason: "this ring must contain at least one entity",
            });
        }
        Ok(())
    }

    /// Angle of item `index` around the ring, in radians.
    #[inline]
    #[must_use]
    pub fn angle_of(&self, index: usize) -> f32 {
        (index as f32 / self.count as f32) * TAU
    }

    /// Positions of all ring items, in index order.
    pub fn positions(&self) -> Result<Vec<Vec3>> {
        self.validate()?;
        Ok((0..self.count)
            .map(|i| {
                let angle = self.angle_of(i);
                Vec3::new(self.radius * angle.cos(), self.height, self.radius * angle.sin())
            })
            .collect())
    }
}

/// Positions of `count` items evenly spaced on a ring of `radius` at `height`.
///
/// `count == 0` yields an empty vector.
pub fn generate_ring_positions(count: usize, radius: f32, height: f32) -> Result<Vec<Vec3>> {
    RingLayout::new(count, radius, height).positions()
}

/// Draws `count` motion parameter sets from a generator seeded with `seed`.
///
/// `base_y` and `phase` are left at zero; the composer fills in `base_y` from
/// the entity's ring height.
#[must_use]
pub fn generate_anim_params(count: usize, seed: u64) -> Vec<AnimParams> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| AnimParams {
            rotation_speed: rng.random_range(ROTATION_SPEED_RANGE),
            vertical_speed: rng.random_range(VERTICAL_SPEED_RANGE),
            base_y: 0.0,
            phase: 0.0,
        })
        .collect()
}

/// Like [`generate_anim_params`], additionally drawing each phase from `[0, 2π)`.
#[must_use]
pub fn generate_anim_params_with_phase(count: usize, seed: u64) -> Vec<AnimParams> {
    // Phases come from an independent stream so speeds match the phase-less draw.
    let mut phase_rng = StdRng::seed_from_u64(seed.rotate_left(32) ^ 0x9E37_79B9_7F4A_7C15);
    generate_anim_params(count, seed)
        .into_iter()
        .map(|params| AnimParams {
            phase: phase_rng.random_range(0.0..TAU),
            ..params
        })
        .collect()
}
