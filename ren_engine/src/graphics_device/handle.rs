/// Opaque GPU object handles
///
/// Handles are plain identifiers handed out by a `GraphicsDevice`. They are
/// never zero: the value 0 names the default object (the window framebuffer,
/// "no texture") and is expressed as `None` at the API instead.
///
/// Handles carry no ownership. Whoever created an object is responsible for
/// deleting it through the same device, exactly once.

use std::fmt;
use std::num::NonZeroU32;

macro_rules! gpu_handle {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Wrap a raw object name, returning `None` for 0
            pub fn new(raw: u32) -> Option<Self> {
                NonZeroU32::new(raw).map(Self)
            }

            /// Wrap an already non-zero object name
            pub fn from_non_zero(raw: NonZeroU32) -> Self {
                Self(raw)
            }

            /// Raw object name as seen by the graphics API
            pub fn raw(self) -> u32 {
                self.0.get()
            }

            /// Raw object name as a `NonZeroU32`
            pub fn non_zero(self) -> NonZeroU32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $label, self.0)
            }
        }
    };
}

gpu_handle!(
    /// Framebuffer object handle
    FramebufferHandle,
    "framebuffer"
);

gpu_handle!(
    /// Texture object handle (sampleable)
    TextureHandle,
    "texture"
);

gpu_handle!(
    /// Renderbuffer object handle (attachment-only storage, not sampleable)
    RenderbufferHandle,
    "renderbuffer"
);
