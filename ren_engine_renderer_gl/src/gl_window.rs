/// Window size provider over a winit window

use std::sync::Arc;

use ren_engine::ren::graphics::WindowSizeProvider;
use winit::window::Window;

/// Live drawable size of a winit window, in physical pixels
#[derive(Debug, Clone)]
pub struct WinitWindowSize {
    window: Arc<Window>,
}

impl WinitWindowSize {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

impl WindowSizeProvider for WinitWindowSize {
    fn width(&self) -> u32 {
        self.window.inner_size().width
    }

    fn height(&self) -> u32 {
        self.window.inner_size().height
    }
}
