//! Scene Composition
//!
//! Turns [`SceneParams`] into a [`SceneGraph`]: fixed props first (ground,
//! road, mountain), then the tree and cloud rings, then the optional orbiting
//! ball. Composition is pure apart from drawing a seed when none is given.

use serde::{Deserialize, Serialize};

use crate::config::SceneParams;
use crate::controls::rig::CameraRigConfig;
use crate::errors::{MeadowError, Result};
use crate::scene::environment::Environment;
use crate::scene::graph::SceneGraph;
use crate::scene::layout::{RingLayout, generate_anim_params, generate_anim_params_with_phase};
use crate::scene::props;

/// The two mutually exclusive ways of presenting the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneVariant {
    /// Orbit camera circling a pivot (a loaded model's root, or the origin).
    Orbitable,
    /// Walk-through camera driven by keyboard and joystick.
    #[default]
    FirstPerson,
}

impl SceneVariant {
    /// Camera rig preset for this variant.
    #[must_use]
    pub fn rig_config(self) -> CameraRigConfig {
        match self {
            Self::Orbitable => CameraRigConfig::orbit(),
            Self::FirstPerson => CameraRigConfig::first_person(),
        }
    }

    #[must_use]
    pub fn alternate(self) -> Self {
        match self {
            Self::Orbitable => Self::FirstPerson,
            Self::FirstPerson => Self::Orbitable,
        }
    }
}

pub struct SceneComposer;

impl SceneComposer {
    pub fn build(params: &SceneParams) -> Result<SceneGraph> {
        params.validate()?;

        let seed = params.seed.unwrap_or_else(rand::random);
        let mut graph = SceneGraph::new(params.variant, Environment::new(), seed);

        if let Some(camera) = &params.camera {
            if camera.mode != params.variant.rig_config().mode {
                return Err(MeadowError::InvalidConfig(format!(
                    "camera mode {:?} does not match scene variant {:?}",
                    camera.mode, params.variant
                )));
            }
            graph.set_camera_rig(camera.clone());
        }

        graph.insert(props::ground());
        graph.insert(props::road());
        graph.insert(props::mountain());

        let trees = RingLayout::new(params.tree_count, params.ring_radius, params.tree_height).positions()?;
        for (i, position) in trees.into_iter().enumerate() {
            graph.insert(props::tree(i, position));
        }

        let clouds = RingLayout::new(params.cloud_count, params.ring_radius, params.cloud_height).positions()?;
        let motions = if params.randomize_phase {
            generate_anim_params_with_phase(clouds.len(), seed)
        } else {
            generate_anim_params(clouds.len(), seed)
        };
        for (i, (position, motion)) in clouds.into_iter().zip(motions).enumerate() {
            graph.insert(props::cloud(i, position, motion.with_base_y(position.y)));
        }

        if let Some(orbit) = params.orbit_ball {
            graph.insert(props::orbit_ball(orbit));
        }

        log::debug!(
            "composed {:?} scene: {} entities ({} trees, {} clouds, orbit ball: {}), seed {seed}",
            params.variant,
            graph.len(),
            params.tree_count,
            params.cloud_count,
            params.orbit_ball.is_some(),
        );

        Ok(graph)
    }
}

/// Shorthand for [`SceneComposer::build`].
pub fn build(params: &SceneParams) -> Result<SceneGraph> {
    SceneComposer::build(params)
}
