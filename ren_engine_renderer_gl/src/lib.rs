/*!
# Ren Engine - OpenGL Backend

OpenGL implementation of the Ren engine device seam.

This crate implements `GraphicsDevice` on top of the `glow` bindings and
`WindowSizeProvider` on top of a `winit` window. Creating the window, the
GL context and the `glow::Context` itself is left to the application.

```no_run
use std::rc::Rc;
use std::sync::Arc;
use ren_engine::ren::water::{WaterFramebufferConfig, WaterFramebuffers};
use ren_engine_renderer_gl::{GlGraphicsDevice, WinitWindowSize};

# fn setup(gl: glow::Context, window: Arc<winit::window::Window>) -> ren_engine::ren::Result<()> {
let device = Rc::new(GlGraphicsDevice::new(gl));
let window = Rc::new(WinitWindowSize::new(window));
let mut water = WaterFramebuffers::new(device, window, WaterFramebufferConfig::default())?;

water.bind_reflection();
// draw the mirrored scene...
water.unbind();

water.clean_up();
# Ok(())
# }
```
*/

mod gl_format;
mod gl_graphics_device;
mod gl_window;

pub use gl_graphics_device::GlGraphicsDevice;
pub use gl_window::WinitWindowSize;
