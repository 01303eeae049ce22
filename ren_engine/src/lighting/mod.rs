//! Lighting module
//!
//! Light data consumed by shading passes.

mod directional_light;

pub use directional_light::DirectionalLight;
