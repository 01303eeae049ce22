/// Attachment construction protocols for offscreen render targets
///
/// Every helper here acts on the framebuffer that is currently bound: the
/// caller binds a freshly created framebuffer first, then adds attachments.

use std::fmt;

use crate::error::Result;
use crate::graphics_device::{
    Attachment, Extent, FramebufferHandle, GraphicsDevice, RenderbufferFormat,
    RenderbufferHandle, TextureFilter, TextureFormat, TextureHandle,
};

/// Allocate a framebuffer, bind it and declare color attachment 0 as its
/// single draw buffer
pub(crate) fn create_framebuffer(device: &dyn GraphicsDevice) -> Result<FramebufferHandle> {
    let framebuffer = device.create_framebuffer()?;
    device.bind_framebuffer(Some(framebuffer));
    device.draw_buffer(Attachment::Color0);
    Ok(framebuffer)
}

/// Attachment point a texture of this format is attached at
pub(crate) fn attachment_for(format: TextureFormat) -> Attachment {
    if format.is_depth() {
        Attachment::Depth
    } else {
        Attachment::Color0
    }
}

/// Allocate a texture, give it storage and linear filtering, and attach it
/// to the bound framebuffer at the point its format calls for
///
/// No mipmaps: these textures are resampled once per frame at a single scale.
pub(crate) fn create_texture_attachment(
    device: &dyn GraphicsDevice,
    format: TextureFormat,
    extent: Extent,
) -> Result<TextureHandle> {
    let attachment = attachment_for(format);
    let texture = device.create_texture()?;
    device.bind_texture(Some(texture));
    device.allocate_texture_storage(format, extent.width, extent.height);
    device.set_texture_filter(TextureFilter::Linear, TextureFilter::Linear);
    device.attach_texture(attachment, texture);
    Ok(texture)
}

/// Allocate a depth renderbuffer and attach it to the bound framebuffer
pub(crate) fn create_depth_buffer_attachment(
    device: &dyn GraphicsDevice,
    extent: Extent,
) -> Result<RenderbufferHandle> {
    let renderbuffer = device.create_renderbuffer()?;
    device.bind_renderbuffer(Some(renderbuffer));
    // Generic depth: the driver picks the bit depth, unlike the D32_FLOAT depth texture.
    // TODO: pick an explicit depth format here so reflection and refraction depth precision match.
    device.allocate_renderbuffer_storage(RenderbufferFormat::Depth, extent.width, extent.height);
    device.attach_renderbuffer(Attachment::Depth, renderbuffer);
    Ok(renderbuffer)
}

/// Depth store of a framebuffer target
///
/// Implemented by `TextureHandle` (sampleable depth, 32-bit float) and by
/// `RenderbufferHandle` (attachment-only depth, not sampleable).
pub trait DepthAttachment: Copy + fmt::Display + fmt::Debug {
    /// Short label used in logs
    const LABEL: &'static str;

    /// Create the depth store and attach it to the bound framebuffer
    fn create(device: &dyn GraphicsDevice, extent: Extent) -> Result<Self>;

    /// Release the depth store
    fn release(self, device: &dyn GraphicsDevice);
}

impl DepthAttachment for TextureHandle {
    const LABEL: &'static str = "depth texture";

    fn create(device: &dyn GraphicsDevice, extent: Extent) -> Result<Self> {
        create_texture_attachment(device, TextureFormat::D32_FLOAT, extent)
    }

    fn release(self, device: &dyn GraphicsDevice) {
        device.delete_texture(self);
    }
}

impl DepthAttachment for RenderbufferHandle {
    const LABEL: &'static str = "depth buffer";

    fn create(device: &dyn GraphicsDevice, extent: Extent) -> Result<Self> {
        create_depth_buffer_attachment(device, extent)
    }

    fn release(self, device: &dyn GraphicsDevice) {
        device.delete_renderbuffer(self);
    }
}
