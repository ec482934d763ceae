//! External asset boundary.
//!
//! The scene never inspects loaded models; it only needs the root transform of
//! one as an orbit pivot. See [`PivotGate`].

pub mod pivot;

pub use pivot::{PivotGate, PivotLoader};
