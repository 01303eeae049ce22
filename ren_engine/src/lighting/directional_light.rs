/// Directional light: passive data container.
///
/// Holds where the light comes from and its color. Shading code reads these
/// values; nothing is computed here.

use glam::Vec3;

/// Light arriving from a fixed position with a single color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    position: Vec3,
    color: Vec3,
}

impl DirectionalLight {
    /// Create a light from its position and linear RGB color
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }

    // ===== GETTERS =====

    /// Light position in world space.
    pub fn position(&self) -> &Vec3 {
        &self.position
    }

    /// Light color (linear RGB).
    pub fn color(&self) -> &Vec3 {
        &self.color
    }
}

#[cfg(test)]
#[path = "directional_light_tests.rs"]
mod tests;
