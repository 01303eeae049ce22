/// Texture, renderbuffer and attachment vocabulary

/// Storage format of a 2D texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    /// 8-bit unsigned RGB color
    RGB8_UNORM,
    /// 32-bit float depth, sampleable
    D32_FLOAT,
}

impl TextureFormat {
    /// Returns true for depth formats
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::D32_FLOAT)
    }
}

/// Storage format of a renderbuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderbufferFormat {
    /// Generic depth storage; the driver picks the bit depth
    Depth,
}

/// Texture sampling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    Nearest,
    Linear,
}

/// Framebuffer attachment point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// Color attachment 0
    Color0,
    /// Depth attachment
    Depth,
}

/// Completeness of the currently bound framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferStatus {
    /// Framebuffer can be rendered to
    Complete,
    /// An attachment is not renderable (bad format, zero size, deleted object)
    IncompleteAttachment,
    /// No image is attached at all
    MissingAttachment,
    /// Draw buffer names an attachment point with nothing attached
    IncompleteDrawBuffer,
    /// Format combination not supported by the implementation
    Unsupported,
    /// Any other backend-specific status code
    Other(u32),
}

impl FramebufferStatus {
    /// Returns true if the framebuffer is complete
    pub fn is_complete(&self) -> bool {
        matches!(self, FramebufferStatus::Complete)
    }
}
