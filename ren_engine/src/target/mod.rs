//! Offscreen render target module
//!
//! A framebuffer target bundles a framebuffer object with a color texture
//! and a depth store. The depth store is either a sampleable depth texture
//! or an attachment-only depth renderbuffer.

mod attachment;
mod framebuffer_target;

pub use attachment::DepthAttachment;
pub use framebuffer_target::{DepthBufferTarget, FramebufferTarget, SampledDepthTarget};
