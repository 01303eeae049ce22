//! Water rendering module
//!
//! Offscreen reflection and refraction targets for a water surface shader,
//! and their configuration.

mod config;
mod water_frame_buffers;

pub use config::{WaterFramebufferConfig, DEFAULT_WATER_TARGET_EXTENT, MAX_WATER_TARGET_DIMENSION};
pub use water_frame_buffers::WaterFramebuffers;
