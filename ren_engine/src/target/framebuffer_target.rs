/// Framebuffer target: one offscreen color + depth render target.
///
/// Owns a framebuffer object, its color texture and its depth store. The
/// three GPU objects are created together and released together through
/// `destroy()`, which consumes the target so the release happens at most
/// once. There is no `Drop` release: the graphics context may already be
/// gone when a value goes out of scope.

use crate::error::Result;
use crate::graphics_device::{
    Extent, FramebufferHandle, FramebufferStatus, GraphicsDevice, RenderbufferHandle,
    TextureFormat, TextureHandle, Viewport,
};
use crate::{engine_debug, engine_error};
use super::attachment::{create_framebuffer, create_texture_attachment, DepthAttachment};

/// Target whose depth is a sampleable 32-bit float texture
pub type SampledDepthTarget = FramebufferTarget<TextureHandle>;

/// Target whose depth is an attachment-only renderbuffer
pub type DepthBufferTarget = FramebufferTarget<RenderbufferHandle>;

/// Offscreen render target with a color texture and a depth store of type `D`
#[derive(Debug)]
pub struct FramebufferTarget<D: DepthAttachment> {
    framebuffer: FramebufferHandle,
    color: TextureHandle,
    depth: D,
    extent: Extent,
}

impl<D: DepthAttachment> FramebufferTarget<D> {
    /// Create the framebuffer and both attachments at `extent`
    ///
    /// Leaves the new framebuffer bound; the caller restores the default
    /// framebuffer. If an object cannot be created, the objects created so
    /// far are deleted before the error is returned.
    pub fn new(device: &dyn GraphicsDevice, extent: Extent) -> Result<Self> {
        let framebuffer = create_framebuffer(device)?;

        let color = match create_texture_attachment(device, TextureFormat::RGB8_UNORM, extent) {
            Ok(color) => color,
            Err(err) => {
                engine_error!("ren::FramebufferTarget",
                    "Color attachment failed, releasing {}: {}", framebuffer, err);
                device.delete_framebuffer(framebuffer);
                return Err(err);
            }
        };

        let depth = match D::create(device, extent) {
            Ok(depth) => depth,
            Err(err) => {
                engine_error!("ren::FramebufferTarget",
                    "{} failed, releasing {} and {}: {}", D::LABEL, framebuffer, color, err);
                device.delete_framebuffer(framebuffer);
                device.delete_texture(color);
                return Err(err);
            }
        };

        engine_debug!("ren::FramebufferTarget",
            "Created {}x{} target ({}, color {}, {} {})",
            extent.width, extent.height, framebuffer, color, D::LABEL, depth);

        Ok(Self { framebuffer, color, depth, extent })
    }

    /// Make this target the draw target and cover it with the viewport
    ///
    /// Unbinds any 2D texture first so the target's own color texture is
    /// never bound for sampling while it is being rendered into.
    pub fn bind(&self, device: &dyn GraphicsDevice) {
        device.bind_texture(None);
        device.bind_framebuffer(Some(self.framebuffer));
        device.set_viewport(Viewport::from_extent(self.extent));
    }

    /// Bind this target and query its completeness
    ///
    /// Diagnostic only. Leaves this target bound.
    pub fn status(&self, device: &dyn GraphicsDevice) -> FramebufferStatus {
        device.bind_framebuffer(Some(self.framebuffer));
        device.framebuffer_status()
    }

    /// Release the framebuffer, the color texture and the depth store
    pub fn destroy(self, device: &dyn GraphicsDevice) {
        device.delete_framebuffer(self.framebuffer);
        device.delete_texture(self.color);
        self.depth.release(device);
    }

    /// Framebuffer object handle
    pub fn framebuffer(&self) -> FramebufferHandle {
        self.framebuffer
    }

    /// Color texture, for sampling in a later pass
    pub fn color_texture(&self) -> TextureHandle {
        self.color
    }

    /// Depth store handle
    pub fn depth(&self) -> D {
        self.depth
    }

    /// Resolution baked into the attachments
    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn width(&self) -> u32 {
        self.extent.width
    }

    pub fn height(&self) -> u32 {
        self.extent.height
    }
}

#[cfg(test)]
#[path = "framebuffer_target_tests.rs"]
mod tests;
