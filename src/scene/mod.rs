//! Scene Module
//!
//! Procedural layout and composition of the meadow scene:
//! - Transform: position, Euler rotation and scale of an entity
//! - Entity: kind, declarative shape parts and optional motion
//! - Layout: ring placement and per-instance motion parameters
//! - Props: factories for ground, road, mountain, trees, clouds and the orbit ball
//! - SceneGraph: composed entities plus camera rig configuration
//! - SceneComposer: builds a SceneGraph from SceneParams

pub mod camera;
pub mod composer;
pub mod entity;
pub mod environment;
pub mod graph;
pub mod layout;
pub mod props;
pub mod shape;
pub mod transform;

pub use camera::Camera;
pub use composer::{SceneComposer, SceneVariant, build};
pub use entity::{AnimParams, Entity, EntityKind, Motion, OrbitParams};
pub use environment::Environment;
pub use graph::{EntityKey, SceneGraph};
pub use layout::{RingLayout, generate_anim_params, generate_ring_positions};
pub use shape::{Color, Part, ShadowFlags, Shape};
pub use transform::Transform;
