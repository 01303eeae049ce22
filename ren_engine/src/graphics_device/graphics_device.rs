/// GraphicsDevice trait - immediate-mode GPU interface

use crate::error::Result;
use crate::graphics_device::{
    Attachment, FramebufferHandle, FramebufferStatus, RenderbufferFormat,
    RenderbufferHandle, TextureFilter, TextureFormat, TextureHandle, Viewport,
};

/// Immediate-mode graphics device
///
/// Thin seam over a stateful graphics API (OpenGL-style). Every call acts on
/// process-wide binding state owned by the context: the bound framebuffer,
/// the bound 2D texture, the bound renderbuffer and the viewport. Calls that
/// name "the bound X" act on whatever the last `bind_*` call selected.
///
/// The context is not thread-safe. Implementations are used from the thread
/// that owns the context, and the context must be current on that thread.
///
/// Object creation reports failure through `Result`; everything else follows
/// immediate-mode conventions and is unchecked: errors surface through the
/// backend's own diagnostics, not through return values.
pub trait GraphicsDevice {
    // ===== FRAMEBUFFERS =====

    /// Allocate a framebuffer object
    fn create_framebuffer(&self) -> Result<FramebufferHandle>;

    /// Bind a framebuffer as the draw and read target
    ///
    /// `None` binds the default (window) framebuffer.
    fn bind_framebuffer(&self, framebuffer: Option<FramebufferHandle>);

    /// Select the single color attachment the bound framebuffer draws into
    fn draw_buffer(&self, attachment: Attachment);

    /// Query completeness of the bound framebuffer
    fn framebuffer_status(&self) -> FramebufferStatus;

    /// Release a framebuffer object
    fn delete_framebuffer(&self, framebuffer: FramebufferHandle);

    // ===== TEXTURES =====

    /// Allocate a texture object
    fn create_texture(&self) -> Result<TextureHandle>;

    /// Bind a texture to the 2D texture target
    ///
    /// `None` unbinds any 2D texture.
    fn bind_texture(&self, texture: Option<TextureHandle>);

    /// Allocate uninitialized storage for the bound 2D texture (mip level 0)
    fn allocate_texture_storage(&self, format: TextureFormat, width: u32, height: u32);

    /// Set magnification and minification filters of the bound 2D texture
    fn set_texture_filter(&self, mag: TextureFilter, min: TextureFilter);

    /// Attach a texture (mip level 0) to the bound framebuffer
    fn attach_texture(&self, attachment: Attachment, texture: TextureHandle);

    /// Release a texture object
    fn delete_texture(&self, texture: TextureHandle);

    // ===== RENDERBUFFERS =====

    /// Allocate a renderbuffer object
    fn create_renderbuffer(&self) -> Result<RenderbufferHandle>;

    /// Bind a renderbuffer to the renderbuffer target
    fn bind_renderbuffer(&self, renderbuffer: Option<RenderbufferHandle>);

    /// Allocate storage for the bound renderbuffer
    fn allocate_renderbuffer_storage(&self, format: RenderbufferFormat, width: u32, height: u32);

    /// Attach a renderbuffer to the bound framebuffer
    fn attach_renderbuffer(&self, attachment: Attachment, renderbuffer: RenderbufferHandle);

    /// Release a renderbuffer object
    fn delete_renderbuffer(&self, renderbuffer: RenderbufferHandle);

    // ===== STATE =====

    /// Set the viewport of the bound framebuffer
    fn set_viewport(&self, viewport: Viewport);
}
