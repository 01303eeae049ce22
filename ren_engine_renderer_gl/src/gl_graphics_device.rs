/// GraphicsDevice - OpenGL implementation over glow

use glow::HasContext;
use ren_engine::ren::Result;
use ren_engine::ren::graphics::{
    Attachment, FramebufferHandle, FramebufferStatus, GraphicsDevice, RenderbufferFormat,
    RenderbufferHandle, TextureFilter, TextureFormat, TextureHandle, Viewport,
};
use ren_engine::{engine_err, engine_info};

use crate::gl_format::{
    attachment_to_gl, framebuffer_status_from_gl, gl_size, renderbuffer_format_to_gl,
    texture_filter_to_gl, texture_format_to_gl,
};

/// OpenGL graphics device
///
/// Wraps a `glow::Context` whose GL context is current on the calling
/// thread. Every method issues GL calls directly; nothing is cached.
pub struct GlGraphicsDevice {
    gl: glow::Context,
}

impl GlGraphicsDevice {
    /// Wrap a loaded GL context
    pub fn new(gl: glow::Context) -> Self {
        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        engine_info!("ren::gl", "OpenGL device ready ({})", version);
        Self { gl }
    }

    /// Underlying glow context, for draw calls outside the device seam
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }
}

// ===== HANDLE CONVERSION =====

fn native_framebuffer(framebuffer: FramebufferHandle) -> glow::NativeFramebuffer {
    glow::NativeFramebuffer(framebuffer.non_zero())
}

fn native_texture(texture: TextureHandle) -> glow::NativeTexture {
    glow::NativeTexture(texture.non_zero())
}

fn native_renderbuffer(renderbuffer: RenderbufferHandle) -> glow::NativeRenderbuffer {
    glow::NativeRenderbuffer(renderbuffer.non_zero())
}

impl GraphicsDevice for GlGraphicsDevice {
    // ===== FRAMEBUFFERS =====

    fn create_framebuffer(&self) -> Result<FramebufferHandle> {
        let framebuffer = unsafe { self.gl.create_framebuffer() }
            .map_err(|e| engine_err!("ren::gl", "Failed to create framebuffer: {}", e))?;
        Ok(FramebufferHandle::from_non_zero(framebuffer.0))
    }

    fn bind_framebuffer(&self, framebuffer: Option<FramebufferHandle>) {
        unsafe {
            self.gl
                .bind_framebuffer(glow::FRAMEBUFFER, framebuffer.map(native_framebuffer));
        }
    }

    fn draw_buffer(&self, attachment: Attachment) {
        unsafe { self.gl.draw_buffer(attachment_to_gl(attachment)) };
    }

    fn framebuffer_status(&self) -> FramebufferStatus {
        let status = unsafe { self.gl.check_framebuffer_status(glow::FRAMEBUFFER) };
        framebuffer_status_from_gl(status)
    }

    fn delete_framebuffer(&self, framebuffer: FramebufferHandle) {
        unsafe { self.gl.delete_framebuffer(native_framebuffer(framebuffer)) };
    }

    // ===== TEXTURES =====

    fn create_texture(&self) -> Result<TextureHandle> {
        let texture = unsafe { self.gl.create_texture() }
            .map_err(|e| engine_err!("ren::gl", "Failed to create texture: {}", e))?;
        Ok(TextureHandle::from_non_zero(texture.0))
    }

    fn bind_texture(&self, texture: Option<TextureHandle>) {
        unsafe { self.gl.bind_texture(glow::TEXTURE_2D, texture.map(native_texture)) };
    }

    fn allocate_texture_storage(&self, format: TextureFormat, width: u32, height: u32) {
        let gl_format = texture_format_to_gl(format);
        unsafe {
            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                gl_format.internal_format,
                gl_size(width),
                gl_size(height),
                0,
                gl_format.format,
                gl_format.ty,
                None,
            );
        }
    }

    fn set_texture_filter(&self, mag: TextureFilter, min: TextureFilter) {
        unsafe {
            self.gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                texture_filter_to_gl(mag),
            );
            self.gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                texture_filter_to_gl(min),
            );
        }
    }

    fn attach_texture(&self, attachment: Attachment, texture: TextureHandle) {
        unsafe {
            self.gl.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                attachment_to_gl(attachment),
                glow::TEXTURE_2D,
                Some(native_texture(texture)),
                0,
            );
        }
    }

    fn delete_texture(&self, texture: TextureHandle) {
        unsafe { self.gl.delete_texture(native_texture(texture)) };
    }

    // ===== RENDERBUFFERS =====

    fn create_renderbuffer(&self) -> Result<RenderbufferHandle> {
        let renderbuffer = unsafe { self.gl.create_renderbuffer() }
            .map_err(|e| engine_err!("ren::gl", "Failed to create renderbuffer: {}", e))?;
        Ok(RenderbufferHandle::from_non_zero(renderbuffer.0))
    }

    fn bind_renderbuffer(&self, renderbuffer: Option<RenderbufferHandle>) {
        unsafe {
            self.gl
                .bind_renderbuffer(glow::RENDERBUFFER, renderbuffer.map(native_renderbuffer));
        }
    }

    fn allocate_renderbuffer_storage(&self, format: RenderbufferFormat, width: u32, height: u32) {
        unsafe {
            self.gl.renderbuffer_storage(
                glow::RENDERBUFFER,
                renderbuffer_format_to_gl(format),
                gl_size(width),
                gl_size(height),
            );
        }
    }

    fn attach_renderbuffer(&self, attachment: Attachment, renderbuffer: RenderbufferHandle) {
        unsafe {
            self.gl.framebuffer_renderbuffer(
                glow::FRAMEBUFFER,
                attachment_to_gl(attachment),
                glow::RENDERBUFFER,
                Some(native_renderbuffer(renderbuffer)),
            );
        }
    }

    fn delete_renderbuffer(&self, renderbuffer: RenderbufferHandle) {
        unsafe { self.gl.delete_renderbuffer(native_renderbuffer(renderbuffer)) };
    }

    // ===== STATE =====

    fn set_viewport(&self, viewport: Viewport) {
        unsafe {
            self.gl.viewport(
                viewport.x,
                viewport.y,
                gl_size(viewport.width),
                gl_size(viewport.height),
            );
        }
    }
}
