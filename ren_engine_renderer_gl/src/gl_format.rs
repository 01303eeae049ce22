/// Engine enums to OpenGL enums

use ren_engine::ren::graphics::{
    Attachment, FramebufferStatus, RenderbufferFormat, TextureFilter, TextureFormat,
};

/// Arguments of `glTexImage2D` that describe a texture format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GlTextureFormat {
    pub internal_format: i32,
    pub format: u32,
    pub ty: u32,
}

/// Convert engine TextureFormat to the `glTexImage2D` format triple
pub(crate) fn texture_format_to_gl(format: TextureFormat) -> GlTextureFormat {
    match format {
        TextureFormat::RGB8_UNORM => GlTextureFormat {
            internal_format: glow::RGB as i32,
            format: glow::RGB,
            ty: glow::UNSIGNED_BYTE,
        },
        TextureFormat::D32_FLOAT => GlTextureFormat {
            internal_format: glow::DEPTH_COMPONENT32F as i32,
            format: glow::DEPTH_COMPONENT,
            ty: glow::FLOAT,
        },
    }
}

/// Convert a pixel size to `GLsizei`, saturating at `i32::MAX`
pub(crate) fn gl_size(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Convert engine RenderbufferFormat to a renderbuffer internal format
pub(crate) fn renderbuffer_format_to_gl(format: RenderbufferFormat) -> u32 {
    match format {
        RenderbufferFormat::Depth => glow::DEPTH_COMPONENT,
    }
}

pub(crate) fn texture_filter_to_gl(filter: TextureFilter) -> i32 {
    match filter {
        TextureFilter::Nearest => glow::NEAREST as i32,
        TextureFilter::Linear => glow::LINEAR as i32,
    }
}

pub(crate) fn attachment_to_gl(attachment: Attachment) -> u32 {
    match attachment {
        Attachment::Color0 => glow::COLOR_ATTACHMENT0,
        Attachment::Depth => glow::DEPTH_ATTACHMENT,
    }
}

/// Convert a `glCheckFramebufferStatus` result
pub(crate) fn framebuffer_status_from_gl(status: u32) -> FramebufferStatus {
    match status {
        glow::FRAMEBUFFER_COMPLETE => FramebufferStatus::Complete,
        glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => FramebufferStatus::IncompleteAttachment,
        glow::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => FramebufferStatus::MissingAttachment,
        glow::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => FramebufferStatus::IncompleteDrawBuffer,
        glow::FRAMEBUFFER_UNSUPPORTED => FramebufferStatus::Unsupported,
        other => FramebufferStatus::Other(other),
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
