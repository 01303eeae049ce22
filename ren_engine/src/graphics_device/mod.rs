/// Graphics device module - immediate-mode GPU seam and its value types

// Module declarations
pub mod graphics_device;
pub mod handle;
pub mod texture;
pub mod viewport;
pub mod window;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use handle::*;
pub use texture::*;
pub use viewport::*;
pub use window::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
