//! Camera Controls
//!
//! - [`RigInput`]: device-agnostic per-frame input deltas
//! - [`OrbitControls`]: orbit around a pivot, with optional auto-rotation
//! - [`FirstPersonControls`]: walk-through look and movement
//! - [`CameraRig`] / [`CameraRigConfig`]: selection of exactly one of the above

pub mod first_person;
pub mod input;
pub mod orbit;
pub mod rig;

pub use first_person::FirstPersonControls;
pub use input::{PointerButtons, RigInput};
pub use orbit::OrbitControls;
pub use rig::{CameraRig, CameraRigConfig, InputSources, RigMode};
