//! Utility Module
//!
//! - [`time`]: frame clocks ([`Timer`], [`FixedStepClock`]) and the [`FrameTime`] sample
//! - [`FpsCounter`]: frame rate measurement utility

pub mod fps_counter;
pub mod time;

pub use fps_counter::FpsCounter;
pub use time::{Clock, FixedStepClock, FrameTime, Timer};
