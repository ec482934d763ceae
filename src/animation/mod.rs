//! Animation Module
//!
//! Per-frame motion of scene entities:
//!
//! - [`motion`]: cloud spin/bob and orbit math behind the [`Animate`] trait
//! - [`system`]: [`AnimationSystem`], the per-tick driver over a scene graph

pub mod motion;
pub mod system;

pub use motion::{Animate, CLOUD_BOB_AMPLITUDE};
pub use system::AnimationSystem;
