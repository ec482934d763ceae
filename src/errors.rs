//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`MeadowError`] is deliberately narrow. Scene layout and
//! animation are pure computation, so almost every failure is a deterministic
//! validation of caller input:
//! - Layout parameters (ring count / radius / height)
//! - A missing orbit pivot (normally recovered by falling back to the origin)
//! - Configuration loading and validation
//!
//! # Usage
//!
//! Fallible APIs return [`Result<T>`] which is an alias for `std::result::Result<T, MeadowError>`.
//!
//! ```rust,ignore
//! use meadow::errors::Result;
//! use meadow::scene::layout::generate_ring_positions;
//!
//! fn trees() -> Result<()> {
//!     let positions = generate_ring_positions(10, 3.5, 0.0)?;
//!     assert_eq!(positions.len(), 10);
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum MeadowError {
    // ========================================================================
    // Layout Errors
    // ========================================================================
    /// A ring layout was requested with parameters it cannot satisfy.
    #[error("Invalid layout parameter `{parameter}` = {value}: {reason}")]
    InvalidLayoutParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: f32,
        /// Why the value was rejected
        reason: &'static str,
    },

    // ========================================================================
    // Camera Rig Errors
    // ========================================================================
    /// The orbit rig has no pivot reference bound (or it has not resolved yet).
    #[error("Orbit pivot reference is not available")]
    MissingPivotReference,

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Scene parameters failed semantic validation.
    #[error("Invalid scene configuration: {0}")]
    InvalidConfig(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, MeadowError>`.
pub type Result<T> = std::result::Result<T, MeadowError>;
