/// Viewport and extent value types

/// Width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Extent {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Rectangle of the bound render target that draw calls map onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// X offset in pixels (lower left origin)
    pub x: i32,
    /// Y offset in pixels (lower left origin)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Viewport covering a full target of the given size, anchored at the origin
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Viewport covering a full target of the given extent
    pub const fn from_extent(extent: Extent) -> Self {
        Self::from_size(extent.width, extent.height)
    }

    /// Size part of the viewport
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }
}
