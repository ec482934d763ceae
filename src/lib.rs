#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Procedural meadow scene: a ground disk with a ring road, rings of trees and
//! drifting clouds around a mountain, an optional orbiting ball, and one of two
//! camera rigs.
//!
//! The crate owns layout, per-frame animation and camera control. Rendering,
//! windowing, model loading and device polling live outside it; see
//! [`SceneGraph`] for what a renderer consumes and [`App`] for the frame loop.

pub mod animation;
pub mod app;
pub mod assets;
pub mod config;
pub mod controls;
pub mod errors;
pub mod scene;
pub mod utils;

pub use animation::{AnimationSystem, CLOUD_BOB_AMPLITUDE};
pub use app::App;
pub use assets::{PivotGate, PivotLoader};
pub use config::SceneParams;
pub use controls::{CameraRig, CameraRigConfig, FirstPersonControls, InputSources, OrbitControls, RigInput, RigMode};
pub use errors::{MeadowError, Result};
pub use scene::{
    AnimParams, Entity, EntityKey, EntityKind, OrbitParams, SceneComposer, SceneGraph, SceneVariant, Transform,
    generate_anim_params, generate_ring_positions,
};
pub use utils::{Clock, FixedStepClock, FrameTime, Timer};
