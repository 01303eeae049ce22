/// Window size provider - live dimensions of the default framebuffer

use crate::graphics_device::Extent;

/// Source of the window's current drawable size
///
/// Implementations must answer with the size at the time of the call, not a
/// cached value from creation: the default viewport is restored from it after
/// every offscreen pass, and the window may have been resized in between.
pub trait WindowSizeProvider {
    /// Current width in pixels
    fn width(&self) -> u32;

    /// Current height in pixels
    fn height(&self) -> u32;

    /// Current size in pixels
    fn extent(&self) -> Extent {
        Extent::new(self.width(), self.height())
    }
}
