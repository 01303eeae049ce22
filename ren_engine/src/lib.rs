/*!
# Ren Engine

Core types for the Ren real-time renderer: water render targets, input
dispatch and light data.

This crate is backend-agnostic. GPU work goes through the immediate-mode
`GraphicsDevice` trait, and the window is seen only through its live size
(`WindowSizeProvider`). The OpenGL implementation of both lives in
`ren_engine_renderer_gl`.

## Architecture

- **GraphicsDevice**: immediate-mode GPU seam (framebuffers, textures, renderbuffers, viewport)
- **FramebufferTarget**: one offscreen color + depth render target
- **WaterFramebuffers**: reflection and refraction targets for a water shader
- **InputManager**: winit input translated and dispatched to listeners
- **DirectionalLight**: light position and color
- **Engine**: global logger slot

All GPU-facing types are single-threaded and must be used on the thread
where the graphics context is current.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_device;
pub mod target;
pub mod water;
pub mod input;
pub mod lighting;

// Main ren namespace module
pub mod ren {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger slot
    pub use crate::engine::Engine;

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Graphics device seam and value types
    pub mod graphics {
        pub use crate::graphics_device::*;
    }

    // Offscreen render targets
    pub mod target {
        pub use crate::target::*;
    }

    // Water render targets
    pub mod water {
        pub use crate::water::*;
    }

    // Input dispatch
    pub mod input {
        pub use crate::input::*;
    }

    // Light data
    pub mod lighting {
        pub use crate::lighting::*;
    }
}

// Re-export math library at crate root
pub use glam;
