//! Scene Configuration
//!
//! [`SceneParams`] drives composition. Every field has a default matching the
//! reference meadow scene, so a config file only lists what it changes.
//!
//! ```json
//! {
//!     "tree_count": 12,
//!     "seed": 7,
//!     "variant": "orbitable",
//!     "orbit_ball": { "radius": 4.2, "speed": 1.0, "height": 1.0 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controls::rig::CameraRigConfig;
use crate::errors::{MeadowError, Result};
use crate::scene::composer::SceneVariant;
use crate::scene::entity::OrbitParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    pub tree_count: usize,
    pub cloud_count: usize,
    /// Radius of both the tree ring and the cloud ring.
    pub ring_radius: f32,
    pub tree_height: f32,
    pub cloud_height: f32,
    /// Seed for cloud motion parameters. `None` draws one at composition time.
    pub seed: Option<u64>,
    /// Give every cloud a random bob phase instead of starting in sync.
    pub randomize_phase: bool,
    pub orbit_ball: Option<OrbitParams>,
    pub variant: SceneVariant,
    /// Overrides the variant's camera preset. Its mode must match the variant.
    pub camera: Option<CameraRigConfig>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            tree_count: 10,
            cloud_count: 6,
            ring_radius: 3.5,
            tree_height: 0.0,
            cloud_height: 4.0,
            seed: None,
            randomize_phase: false,
            orbit_ball: None,
            variant: SceneVariant::FirstPerson,
            camera: None,
        }
    }
}

impl SceneParams {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loading scene params from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks values ring layout does not cover (it validates its own inputs).
    pub fn validate(&self) -> Result<()> {
        if !self.tree_height.is_finite() || !self.cloud_height.is_finite() {
            return Err(MeadowError::InvalidConfig(
                "ring heights must be finite".to_string(),
            ));
        }
        if let Some(orbit) = &self.orbit_ball
            && !(orbit.radius.is_finite() && orbit.radius > 0.0 && orbit.speed.is_finite() && orbit.height.is_finite())
        {
            return Err(MeadowError::InvalidConfig(format!(
                "orbit ball needs a positive radius and finite speed/height, got {orbit:?}"
            )));
        }
        if let Some(camera) = &self.camera {
            camera.validate()?;
        }
        Ok(())
    }
}
