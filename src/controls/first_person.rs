use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use crate::controls::input::{PointerButtons, RigInput};
use crate::controls::rig::InputSources;
use crate::scene::transform::Transform;

/// Largest pitch magnitude; keeps the view basis away from the poles.
const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

/// First-person camera control.
///
/// Pointer drag looks around (yaw/pitch). Keyboard and joystick axes walk the
/// camera on the horizontal plane; each source only counts when enabled in
/// `sources`. Eye height never changes.
#[derive(Debug, Clone)]
pub struct FirstPersonControls {
    pub move_speed: f32,
    /// Radians per pixel of pointer drag.
    pub look_speed: f32,
    pub sources: InputSources,

    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl FirstPersonControls {
    /// Camera at `position`, initially looking at `target`.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3, sources: InputSources) -> Self {
        let mut controls = Self {
            move_speed: 3.0,
            look_speed: 0.003,
            sources,
            position,
            yaw: 0.0,
            pitch: 0.0,
        };
        controls.look_towards(target);
        controls
    }

    /// Turns the view to face `target` from the current position.
    pub fn look_towards(&mut self, target: Vec3) {
        let dir = target - self.position;
        if dir.length_squared() < 1e-8 {
            return;
        }
        // Yaw 0 faces -Z.
        self.yaw = (-dir.x).atan2(-dir.z);
        self.pitch = dir.y.atan2(Vec2::new(dir.x, dir.z).length()).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Combined movement axis from the enabled sources, at most unit length.
    #[must_use]
    pub fn movement_axis(&self, input: &RigInput) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.sources.contains(InputSources::KEYBOARD) {
            axis += input.move_axis;
        }
        if self.sources.contains(InputSources::JOYSTICK) {
            axis += input.joystick_axis;
        }
        axis.clamp_length_max(1.0)
    }

    pub fn update(&mut self, transform: &mut Transform, input: &RigInput, dt: f32) {
        let dt = dt.max(0.0);

        if input.is_pressed(PointerButtons::PRIMARY) {
            self.yaw -= input.cursor_delta.x * self.look_speed;
            self.pitch = (self.pitch - input.cursor_delta.y * self.look_speed).clamp(-MAX_PITCH, MAX_PITCH);
        }

        let axis = self.movement_axis(input);
        if axis != Vec2::ZERO {
            let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
            let ahead = Vec3::new(-sin_yaw, 0.0, -cos_yaw);
            let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
            self.position += (ahead * axis.y + right * axis.x) * self.move_speed * dt;
        }

        transform.position = self.position;
        transform.set_yaw_pitch(self.yaw, self.pitch);
    }
}
