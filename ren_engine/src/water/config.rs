/// Water framebuffer configuration

use crate::error::{Error, Result};
use crate::graphics_device::Extent;

/// Default resolution of both water targets
pub const DEFAULT_WATER_TARGET_EXTENT: Extent = Extent::new(1280, 720);

/// Largest width or height a water target may have (GL sizes are `GLsizei`)
pub const MAX_WATER_TARGET_DIMENSION: u32 = i32::MAX as u32;

/// Resolutions of the reflection and refraction targets
///
/// The manager keeps its own copy: changing a config after construction has
/// no effect on targets that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterFramebufferConfig {
    /// Reflection target resolution
    pub reflection: Extent,
    /// Refraction target resolution
    pub refraction: Extent,
}

impl Default for WaterFramebufferConfig {
    fn default() -> Self {
        Self {
            reflection: DEFAULT_WATER_TARGET_EXTENT,
            refraction: DEFAULT_WATER_TARGET_EXTENT,
        }
    }
}

impl WaterFramebufferConfig {
    /// Set the reflection target resolution
    pub fn with_reflection(mut self, width: u32, height: u32) -> Self {
        self.reflection = Extent::new(width, height);
        self
    }

    /// Set the refraction target resolution
    pub fn with_refraction(mut self, width: u32, height: u32) -> Self {
        self.refraction = Extent::new(width, height);
        self
    }

    /// Reject zero-sized targets and targets too large for a `GLsizei`
    pub fn validate(&self) -> Result<()> {
        for (name, extent) in [("reflection", self.reflection), ("refraction", self.refraction)] {
            if extent.is_empty() {
                return Err(Error::InvalidResource(format!(
                    "{} target extent {}x{} has a zero dimension",
                    name, extent.width, extent.height
                )));
            }
            if extent.width > MAX_WATER_TARGET_DIMENSION
                || extent.height > MAX_WATER_TARGET_DIMENSION
            {
                return Err(Error::InvalidResource(format!(
                    "{} target extent {}x{} exceeds {} pixels per side",
                    name, extent.width, extent.height, MAX_WATER_TARGET_DIMENSION
                )));
            }
        }
        Ok(())
    }
}
