use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::controls::input::{PointerButtons, RigInput};
use crate::scene::transform::Transform;

const EPS: f32 = 0.0001;

/// Orbit-style camera control around a pivot.
///
/// The camera sits on a sphere of `radius` around `center`, parameterised by
/// azimuth `theta` and polar angle `phi`. Primary drag rotates, secondary drag
/// pans, scroll zooms. With `auto_rotate` the azimuth also advances on its own.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    /// 1.0 is one revolution per minute; 2.0 one per 30 seconds.
    pub auto_rotate_speed: f32,

    pub center: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: 1.0,
            max_distance: 1000.0,
            auto_rotate: false,
            auto_rotate_speed: 2.0,

            center,
            radius,
            theta: 0.0,
            phi: FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Orbit that starts with the camera at `position`, looking at `center`.
    #[must_use]
    pub fn from_position(position: Vec3, center: Vec3) -> Self {
        let offset = position - center;
        let radius = offset.length();
        let mut controls = Self::new(center, radius.max(EPS));
        if radius > EPS {
            controls.theta = offset.x.atan2(offset.z);
            controls.phi = (offset.y / radius).clamp(-1.0, 1.0).acos().clamp(EPS, PI - EPS);
        }
        controls
    }

    #[must_use]
    pub fn with_auto_rotate(mut self, speed: f32) -> Self {
        self.auto_rotate = true;
        self.auto_rotate_speed = speed;
        self
    }

    /// Moves the pivot while keeping the camera's spherical offset.
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    /// Camera offset from the pivot for the current spherical coordinates.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        )
    }

    /// Camera orientation looking from the current offset back at the pivot.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.theta, self.phi - FRAC_PI_2, 0.0)
    }

    pub fn update(&mut self, transform: &mut Transform, input: &RigInput, fov_degrees: f32, dt: f32) {
        let dt = dt.max(0.0);
        let screen_height = input.screen_size.y.max(1.0);

        self.rotate(input, screen_height, dt);
        self.zoom(input.scroll_delta.y);
        if input.is_pressed(PointerButtons::SECONDARY) {
            self.pan(input.cursor_delta, fov_degrees, screen_height);
        }

        transform.position = self.center + self.offset();
        transform.set_quaternion(self.orientation());
    }

    fn rotate(&mut self, input: &RigInput, screen_height: f32, dt: f32) {
        if input.is_pressed(PointerButtons::PRIMARY) {
            // A drag across the full screen height is one revolution.
            self.rotate_delta -= input.cursor_delta * (TAU / screen_height) * self.rotate_speed;
        }

        if self.auto_rotate {
            self.theta -= TAU / 60.0 * self.auto_rotate_speed * dt;
        }

        let applied = if self.enable_damping {
            // Retention is per 1/60 s so damping feels the same at any frame rate.
            let retention = (1.0 - self.damping_factor).powf(dt * 60.0);
            let applied = self.rotate_delta * (1.0 - retention);
            self.rotate_delta *= retention;
            applied
        } else {
            std::mem::take(&mut self.rotate_delta)
        };

        self.theta += applied.x;
        self.phi = (self.phi + applied.y).clamp(EPS, PI - EPS);
    }

    /// Positive `amount` moves towards the pivot.
    fn zoom(&mut self, amount: f32) {
        if amount == 0.0 {
            return;
        }
        let scale = (1.0 - self.zoom_speed).powf(amount.abs());
        let radius = if amount > 0.0 { self.radius * scale } else { self.radius / scale };
        self.radius = radius.clamp(self.min_distance, self.max_distance);
    }

    /// Drags the pivot in the view plane so that it tracks the pointer.
    fn pan(&mut self, cursor_delta: Vec2, fov_degrees: f32, screen_height: f32) {
        let view_height = 2.0 * self.radius * (fov_degrees.to_radians() * 0.5).tan();
        let world_per_pixel = view_height / screen_height * self.pan_speed;

        let rotation = self.orientation();
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        self.center += (up * cursor_delta.y - right * cursor_delta.x) * world_per_pixel;
    }
}
