//! Camera Rig Selection
//!
//! A [`CameraRigConfig`] describes one of two mutually exclusive control
//! schemes. Both modes share the same config shape, so a config can be swapped
//! for the other without touching anything else in the scene.
//! [`CameraRig::from_config`] instantiates exactly one rig, which is then the
//! only writer of the camera transform.

use bitflags::bitflags;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::controls::first_person::FirstPersonControls;
use crate::controls::input::RigInput;
use crate::controls::orbit::OrbitControls;
use crate::errors::{MeadowError, Result};
use crate::scene::transform::Transform;

bitflags! {
    /// Input devices a rig polls.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct InputSources: u8 {
        const JOYSTICK = 1 << 0;
        const KEYBOARD = 1 << 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RigMode {
    Orbit,
    FirstPerson,
}

/// Static description of a camera rig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraRigConfig {
    pub mode: RigMode,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub initial_position: Vec3,
    /// Look-at point of a first-person rig. Orbit rigs look at their pivot,
    /// which is the scene origin until a pivot reference is bound.
    pub target: Vec3,
    #[serde(default)]
    pub input: InputSources,
    /// Orbit auto-rotation speed; `None` disables it. Ignored by first-person rigs.
    #[serde(default)]
    pub auto_rotate: Option<f32>,
}

impl CameraRigConfig {
    /// Walk-through preset: wide lens at eye height, keyboard and joystick enabled.
    #[must_use]
    pub fn first_person() -> Self {
        Self {
            mode: RigMode::FirstPerson,
            fov: 80.0,
            initial_position: Vec3::new(0.0, 2.537, 8.7),
            target: Vec3::new(0.0, 2.537, 0.0),
            input: InputSources::JOYSTICK | InputSources::KEYBOARD,
            auto_rotate: None,
        }
    }

    /// Showcase preset: slowly auto-rotating orbit around the pivot.
    #[must_use]
    pub fn orbit() -> Self {
        Self {
            mode: RigMode::Orbit,
            fov: 60.0,
            initial_position: Vec3::new(0.0, 5.0, 10.0),
            target: Vec3::ZERO,
            input: InputSources::empty(),
            auto_rotate: Some(2.0),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.fov.is_finite() && self.fov > 0.0 && self.fov < 180.0) {
            return Err(MeadowError::InvalidConfig(format!(
                "camera fov must be within (0, 180) degrees, got {}",
                self.fov
            )));
        }
        if !self.initial_position.is_finite() || !self.target.is_finite() {
            return Err(MeadowError::InvalidConfig(
                "camera position and target must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self::first_person()
    }
}

/// The one active camera control scheme.
#[derive(Debug, Clone)]
pub enum CameraRig {
    Orbit(OrbitControls),
    FirstPerson(FirstPersonControls),
}

impl CameraRig {
    /// Instantiates the rig described by `config`.
    ///
    /// An orbit rig pivots around `pivot` when given, else around the origin.
    #[must_use]
    pub fn from_config(config: &CameraRigConfig, pivot: Option<Vec3>) -> Self {
        let rig = match config.mode {
            RigMode::Orbit => {
                let center = pivot.unwrap_or(Vec3::ZERO);
                let mut controls = OrbitControls::from_position(config.initial_position, center);
                if let Some(speed) = config.auto_rotate {
                    controls = controls.with_auto_rotate(speed);
                }
                Self::Orbit(controls)
            }
            RigMode::FirstPerson => Self::FirstPerson(FirstPersonControls::new(
                config.initial_position,
                config.target,
                config.input,
            )),
        };
        log::info!("camera rig: {:?} (fov {})", rig.mode(), config.fov);
        rig
    }

    #[must_use]
    pub fn mode(&self) -> RigMode {
        match self {
            Self::Orbit(_) => RigMode::Orbit,
            Self::FirstPerson(_) => RigMode::FirstPerson,
        }
    }

    /// Point the camera is looking at or orbiting around.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        match self {
            Self::Orbit(controls) => controls.center,
            Self::FirstPerson(controls) => controls.position + controls.forward(),
        }
    }

    /// Re-targets an orbit rig. First-person rigs ignore pivots.
    pub fn set_pivot(&mut self, pivot: Vec3) {
        if let Self::Orbit(controls) = self {
            controls.set_center(pivot);
        }
    }

    pub fn update(&mut self, transform: &mut Transform, input: &RigInput, fov_degrees: f32, dt: f32) {
        match self {
            Self::Orbit(controls) => controls.update(transform, input, fov_degrees, dt),
            Self::FirstPerson(controls) => controls.update(transform, input, dt),
        }
    }
}
