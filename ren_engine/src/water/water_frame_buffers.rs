/// Water framebuffers: reflection and refraction offscreen targets
///
/// The water shader samples two pre-rendered views of the scene: the
/// reflection (scene mirrored across the water plane) and the refraction
/// (scene below the surface, with its depth for soft edges and fog). This
/// manager owns both targets and the switching between them and the window.
///
/// # Lifecycle
///
/// Both targets are created eagerly in `new()` and live until `clean_up()`,
/// which must be called while the graphics context is still current. After
/// `clean_up()` every other operation panics. Dropping a live manager only
/// logs a leak warning: the context may already be gone at that point, so
/// GPU objects are never released from `Drop`.

use std::rc::Rc;

use crate::error::Result;
use crate::graphics_device::{
    Extent, FramebufferStatus, GraphicsDevice, TextureHandle, Viewport, WindowSizeProvider,
};
use crate::target::{DepthBufferTarget, SampledDepthTarget};
use crate::{engine_debug, engine_error, engine_info, engine_warn};
use super::config::WaterFramebufferConfig;

/// Both targets, present until `clean_up()`
#[derive(Debug)]
struct WaterTargets {
    /// Color + depth renderbuffer (depth is never sampled)
    reflection: DepthBufferTarget,
    /// Color + sampleable depth texture
    refraction: SampledDepthTarget,
}

/// Manager of the water reflection and refraction render targets
///
/// Holds the graphics device and the window it restores the viewport from.
/// Both are reference counted and single-threaded, like the context itself.
pub struct WaterFramebuffers {
    device: Rc<dyn GraphicsDevice>,
    window: Rc<dyn WindowSizeProvider>,
    config: WaterFramebufferConfig,
    targets: Option<WaterTargets>,
}

impl WaterFramebuffers {
    /// Create both water targets at the configured resolutions
    ///
    /// On return the default framebuffer is bound and the viewport covers
    /// the window. If any GPU object cannot be created, everything created
    /// so far is released and the error is returned.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidResource` if a configured extent has a zero
    ///   dimension or a side above `MAX_WATER_TARGET_DIMENSION` (checked
    ///   before any GPU object is allocated)
    /// - the device's error if a framebuffer, texture or renderbuffer
    ///   cannot be created
    pub fn new(
        device: Rc<dyn GraphicsDevice>,
        window: Rc<dyn WindowSizeProvider>,
        config: WaterFramebufferConfig,
    ) -> Result<Self> {
        config.validate()?;

        let reflection = match DepthBufferTarget::new(device.as_ref(), config.reflection) {
            Ok(reflection) => reflection,
            Err(err) => {
                engine_error!("ren::WaterFramebuffers",
                    "Reflection target creation failed: {}", err);
                restore_window_target(device.as_ref(), window.as_ref());
                return Err(err);
            }
        };
        restore_window_target(device.as_ref(), window.as_ref());

        let refraction = match SampledDepthTarget::new(device.as_ref(), config.refraction) {
            Ok(refraction) => refraction,
            Err(err) => {
                engine_error!("ren::WaterFramebuffers",
                    "Refraction target creation failed, releasing reflection target: {}", err);
                reflection.destroy(device.as_ref());
                restore_window_target(device.as_ref(), window.as_ref());
                return Err(err);
            }
        };
        restore_window_target(device.as_ref(), window.as_ref());

        engine_info!("ren::WaterFramebuffers",
            "Water framebuffers created (reflection {}x{}, refraction {}x{})",
            config.reflection.width, config.reflection.height,
            config.refraction.width, config.refraction.height);

        Ok(Self {
            device,
            window,
            config,
            targets: Some(WaterTargets { reflection, refraction }),
        })
    }

    // ===== RENDER PASSES =====

    /// Redirect rendering into the reflection target
    ///
    /// Unbinds any 2D texture, binds the reflection framebuffer and sets the
    /// viewport to the reflection resolution.
    ///
    /// # Panics
    ///
    /// Panics if called after `clean_up()`.
    pub fn bind_reflection(&self) {
        self.targets().reflection.bind(self.device.as_ref());
    }

    /// Redirect rendering into the refraction target
    ///
    /// # Panics
    ///
    /// Panics if called after `clean_up()`.
    pub fn bind_refraction(&self) {
        self.targets().refraction.bind(self.device.as_ref());
    }

    /// Return rendering to the window
    ///
    /// Binds the default framebuffer and restores the viewport from the
    /// window's size at the time of the call.
    ///
    /// # Panics
    ///
    /// Panics if called after `clean_up()`.
    pub fn unbind(&self) {
        self.targets();
        restore_window_target(self.device.as_ref(), self.window.as_ref());
    }

    // ===== TEXTURES =====

    /// Color texture of the reflection target
    ///
    /// # Panics
    ///
    /// Panics if called after `clean_up()`.
    pub fn reflection_texture(&self) -> TextureHandle {
        self.targets().reflection.color_texture()
    }

    /// Color texture of the refraction target
    ///
    /// # Panics
    ///
    /// Panics if called after `clean_up()`.
    pub fn refraction_texture(&self) -> TextureHandle {
        self.targets().refraction.color_texture()
    }

    /// Depth texture of the refraction target
    ///
    /// # Panics
    ///
    /// Panics if called after `clean_up()`.
    pub fn refraction_depth_texture(&self) -> TextureHandle {
        self.targets().refraction.depth()
    }

    // ===== TEARDOWN =====

    /// Release all six GPU objects
    ///
    /// Order: reflection framebuffer, color texture, depth renderbuffer,
    /// then refraction framebuffer, color texture, depth texture. Must run
    /// while the graphics context is current. A second call only logs a
    /// warning.
    pub fn clean_up(&mut self) {
        let Some(targets) = self.targets.take() else {
            engine_warn!("ren::WaterFramebuffers", "clean_up called twice, ignoring");
            return;
        };

        let device = self.device.as_ref();
        targets.reflection.destroy(device);
        targets.refraction.destroy(device);

        engine_info!("ren::WaterFramebuffers", "Water framebuffers released");
    }

    // ===== QUERIES =====

    /// Whether `clean_up()` has not run yet
    pub fn is_live(&self) -> bool {
        self.targets.is_some()
    }

    /// Resolutions the targets were created with
    pub fn config(&self) -> &WaterFramebufferConfig {
        &self.config
    }

    pub fn reflection_extent(&self) -> Extent {
        self.config.reflection
    }

    pub fn refraction_extent(&self) -> Extent {
        self.config.refraction
    }

    /// Completeness of the reflection framebuffer
    ///
    /// Diagnostic query: binds the target, asks the device, then returns
    /// rendering to the window.
    ///
    /// # Panics
    ///
    /// Panics if called after `clean_up()`.
    pub fn reflection_status(&self) -> FramebufferStatus {
        let status = self.targets().reflection.status(self.device.as_ref());
        self.unbind();
        self.log_status("reflection", status);
        status
    }

    /// Completeness of the refraction framebuffer
    ///
    /// # Panics
    ///
    /// Panics if called after `clean_up()`.
    pub fn refraction_status(&self) -> FramebufferStatus {
        let status = self.targets().refraction.status(self.device.as_ref());
        self.unbind();
        self.log_status("refraction", status);
        status
    }

    fn log_status(&self, name: &str, status: FramebufferStatus) {
        if status.is_complete() {
            engine_debug!("ren::WaterFramebuffers", "{} framebuffer complete", name);
        } else {
            engine_warn!("ren::WaterFramebuffers", "{} framebuffer incomplete: {:?}", name, status);
        }
    }

    fn targets(&self) -> &WaterTargets {
        match &self.targets {
            Some(targets) => targets,
            None => panic!("WaterFramebuffers used after clean_up"),
        }
    }
}

impl Drop for WaterFramebuffers {
    fn drop(&mut self) {
        if self.targets.is_some() {
            engine_warn!("ren::WaterFramebuffers",
                "Dropped without clean_up, 6 GPU objects leaked");
        }
    }
}

impl std::fmt::Debug for WaterFramebuffers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaterFramebuffers")
            .field("config", &self.config)
            .field("targets", &self.targets)
            .finish_non_exhaustive()
    }
}

/// Bind the default framebuffer and cover the window with the viewport
fn restore_window_target(device: &dyn GraphicsDevice, window: &dyn WindowSizeProvider) {
    device.bind_framebuffer(None);
    device.set_viewport(Viewport::from_extent(window.extent()));
}

#[cfg(test)]
#[path = "water_frame_buffers_tests.rs"]
mod tests;
