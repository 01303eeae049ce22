/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Emulates the binding state of an immediate-mode context and keeps a ledger
/// of every object created and deleted, so tests can assert exact allocation
/// counts, attachment wiring and viewport state. Deleting an object that is
/// not alive panics, which turns any double free into a test failure.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::engine_bail;
use crate::graphics_device::{
    Attachment, Extent, FramebufferHandle, FramebufferStatus, GraphicsDevice,
    RenderbufferFormat, RenderbufferHandle, TextureFilter, TextureFormat,
    TextureHandle, Viewport, WindowSizeProvider,
};

// ============================================================================
// Ledger types
// ============================================================================

/// Kind of GPU object tracked by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Framebuffer,
    Texture,
    Renderbuffer,
}

/// Object attached to a framebuffer attachment point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attached {
    Texture(TextureHandle),
    Renderbuffer(RenderbufferHandle),
}

/// Storage allocated for a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureStorage {
    pub format: TextureFormat,
    pub width: u32,
    pub height: u32,
}

/// Storage allocated for a renderbuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderbufferStorage {
    pub format: RenderbufferFormat,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Default)]
struct MockState {
    bound_framebuffer: Option<FramebufferHandle>,
    bound_texture: Option<TextureHandle>,
    bound_renderbuffer: Option<RenderbufferHandle>,
    viewport: Option<Viewport>,

    live_framebuffers: HashSet<FramebufferHandle>,
    live_textures: HashSet<TextureHandle>,
    live_renderbuffers: HashSet<RenderbufferHandle>,

    created: HashMap<ObjectKind, usize>,
    deleted: HashMap<ObjectKind, usize>,

    texture_storage: HashMap<TextureHandle, TextureStorage>,
    texture_filters: HashMap<TextureHandle, (TextureFilter, TextureFilter)>,
    renderbuffer_storage: HashMap<RenderbufferHandle, RenderbufferStorage>,
    attachments: HashMap<FramebufferHandle, HashMap<Attachment, Attached>>,
    draw_buffers: HashMap<FramebufferHandle, Attachment>,

    /// Number of successful creations allowed before create_* starts failing
    fail_after: Option<usize>,
    creations: usize,
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that tracks binding state and object lifetimes without a GPU
#[derive(Debug)]
pub struct MockGraphicsDevice {
    next_name: Cell<u32>,
    state: RefCell<MockState>,
    commands: RefCell<Vec<String>>,
}

impl MockGraphicsDevice {
    /// Create a new mock device with the default framebuffer bound
    pub fn new() -> Self {
        Self {
            next_name: Cell::new(1),
            state: RefCell::new(MockState::default()),
            commands: RefCell::new(Vec::new()),
        }
    }

    /// Make every object creation after the first `count` ones fail
    pub fn fail_creation_after(&self, count: usize) {
        self.state.borrow_mut().fail_after = Some(count);
    }

    /// Currently bound framebuffer (`None` = default framebuffer)
    pub fn bound_framebuffer(&self) -> Option<FramebufferHandle> {
        self.state.borrow().bound_framebuffer
    }

    /// Currently bound 2D texture
    pub fn bound_texture(&self) -> Option<TextureHandle> {
        self.state.borrow().bound_texture
    }

    /// Last viewport set, if any
    pub fn viewport(&self) -> Option<Viewport> {
        self.state.borrow().viewport
    }

    /// Number of objects of this kind ever created
    pub fn created(&self, kind: ObjectKind) -> usize {
        self.state.borrow().created.get(&kind).copied().unwrap_or(0)
    }

    /// Number of objects of this kind deleted
    pub fn deleted(&self, kind: ObjectKind) -> usize {
        self.state.borrow().deleted.get(&kind).copied().unwrap_or(0)
    }

    /// Number of objects of this kind still alive
    pub fn live(&self, kind: ObjectKind) -> usize {
        let state = self.state.borrow();
        match kind {
            ObjectKind::Framebuffer => state.live_framebuffers.len(),
            ObjectKind::Texture => state.live_textures.len(),
            ObjectKind::Renderbuffer => state.live_renderbuffers.len(),
        }
    }

    /// Total number of live objects across all kinds
    pub fn live_total(&self) -> usize {
        self.live(ObjectKind::Framebuffer)
            + self.live(ObjectKind::Texture)
            + self.live(ObjectKind::Renderbuffer)
    }

    pub fn is_texture_alive(&self, texture: TextureHandle) -> bool {
        self.state.borrow().live_textures.contains(&texture)
    }

    pub fn texture_storage(&self, texture: TextureHandle) -> Option<TextureStorage> {
        self.state.borrow().texture_storage.get(&texture).copied()
    }

    pub fn texture_filter(&self, texture: TextureHandle) -> Option<(TextureFilter, TextureFilter)> {
        self.state.borrow().texture_filters.get(&texture).copied()
    }

    pub fn renderbuffer_storage(&self, renderbuffer: RenderbufferHandle) -> Option<RenderbufferStorage> {
        self.state.borrow().renderbuffer_storage.get(&renderbuffer).copied()
    }

    /// Object attached to `framebuffer` at `attachment`
    pub fn attachment(&self, framebuffer: FramebufferHandle, attachment: Attachment) -> Option<Attached> {
        self.state
            .borrow()
            .attachments
            .get(&framebuffer)
            .and_then(|points| points.get(&attachment).copied())
    }

    /// Draw buffer declared for `framebuffer`
    pub fn draw_buffer_of(&self, framebuffer: FramebufferHandle) -> Option<Attachment> {
        self.state.borrow().draw_buffers.get(&framebuffer).copied()
    }

    /// Recorded command log
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Forget the recorded command log
    pub fn clear_commands(&self) {
        self.commands.borrow_mut().clear();
    }

    fn record(&self, command: String) {
        self.commands.borrow_mut().push(command);
    }

    fn allocate_name(&self, kind: ObjectKind) -> Result<u32> {
        let mut state = self.state.borrow_mut();
        if let Some(limit) = state.fail_after {
            if state.creations >= limit {
                drop(state);
                engine_bail!("ren::mock", "create {:?}: simulated allocation failure", kind);
            }
        }
        state.creations += 1;
        *state.created.entry(kind).or_insert(0) += 1;

        let name = self.next_name.get();
        self.next_name.set(name + 1);
        Ok(name)
    }

    fn count_delete(state: &mut MockState, kind: ObjectKind) {
        *state.deleted.entry(kind).or_insert(0) += 1;
    }
}

impl Default for MockGraphicsDevice {
    fn default() -> Self {
        Self::new()
    }
}

fn name_of(framebuffer: Option<FramebufferHandle>) -> String {
    match framebuffer {
        Some(handle) => handle.raw().to_string(),
        None => "default".to_string(),
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_framebuffer(&self) -> Result<FramebufferHandle> {
        let name = self.allocate_name(ObjectKind::Framebuffer)?;
        let handle = FramebufferHandle::new(name).expect("mock names start at 1");
        self.state.borrow_mut().live_framebuffers.insert(handle);
        self.record(format!("create_framebuffer {}", name));
        Ok(handle)
    }

    fn bind_framebuffer(&self, framebuffer: Option<FramebufferHandle>) {
        let mut state = self.state.borrow_mut();
        if let Some(handle) = framebuffer {
            assert!(
                state.live_framebuffers.contains(&handle),
                "bind_framebuffer: {} is not alive",
                handle
            );
        }
        state.bound_framebuffer = framebuffer;
        drop(state);
        self.record(format!("bind_framebuffer {}", name_of(framebuffer)));
    }

    fn draw_buffer(&self, attachment: Attachment) {
        let mut state = self.state.borrow_mut();
        let framebuffer = state
            .bound_framebuffer
            .expect("draw_buffer: no framebuffer object bound");
        state.draw_buffers.insert(framebuffer, attachment);
        drop(state);
        self.record(format!("draw_buffer {:?}", attachment));
    }

    fn framebuffer_status(&self) -> FramebufferStatus {
        let state = self.state.borrow();
        let Some(framebuffer) = state.bound_framebuffer else {
            return FramebufferStatus::Complete;
        };

        let points = match state.attachments.get(&framebuffer) {
            Some(points) if !points.is_empty() => points,
            _ => return FramebufferStatus::MissingAttachment,
        };

        if let Some(draw) = state.draw_buffers.get(&framebuffer) {
            if !points.contains_key(draw) {
                return FramebufferStatus::IncompleteDrawBuffer;
            }
        }

        let all_alive = points.values().all(|attached| match attached {
            Attached::Texture(t) => state.live_textures.contains(t),
            Attached::Renderbuffer(r) => state.live_renderbuffers.contains(r),
        });
        if all_alive {
            FramebufferStatus::Complete
        } else {
            FramebufferStatus::IncompleteAttachment
        }
    }

    fn delete_framebuffer(&self, framebuffer: FramebufferHandle) {
        let mut state = self.state.borrow_mut();
        assert!(
            state.live_framebuffers.remove(&framebuffer),
            "delete_framebuffer: {} deleted twice or never created",
            framebuffer
        );
        Self::count_delete(&mut state, ObjectKind::Framebuffer);
        if state.bound_framebuffer == Some(framebuffer) {
            state.bound_framebuffer = None;
        }
        drop(state);
        self.record(format!("delete_framebuffer {}", framebuffer.raw()));
    }

    fn create_texture(&self) -> Result<TextureHandle> {
        let name = self.allocate_name(ObjectKind::Texture)?;
        let handle = TextureHandle::new(name).expect("mock names start at 1");
        self.state.borrow_mut().live_textures.insert(handle);
        self.record(format!("create_texture {}", name));
        Ok(handle)
    }

    fn bind_texture(&self, texture: Option<TextureHandle>) {
        self.state.borrow_mut().bound_texture = texture;
        self.record(match texture {
            Some(handle) => format!("bind_texture {}", handle.raw()),
            None => "bind_texture none".to_string(),
        });
    }

    fn allocate_texture_storage(&self, format: TextureFormat, width: u32, height: u32) {
        let mut state = self.state.borrow_mut();
        let texture = state
            .bound_texture
            .expect("allocate_texture_storage: no texture bound");
        state
            .texture_storage
            .insert(texture, TextureStorage { format, width, height });
        drop(state);
        self.record(format!("texture_storage {:?} {}x{}", format, width, height));
    }

    fn set_texture_filter(&self, mag: TextureFilter, min: TextureFilter) {
        let mut state = self.state.borrow_mut();
        let texture = state
            .bound_texture
            .expect("set_texture_filter: no texture bound");
        state.texture_filters.insert(texture, (mag, min));
        drop(state);
        self.record(format!("texture_filter {:?} {:?}", mag, min));
    }

    fn attach_texture(&self, attachment: Attachment, texture: TextureHandle) {
        let mut state = self.state.borrow_mut();
        let framebuffer = state
            .bound_framebuffer
            .expect("attach_texture: no framebuffer object bound");
        state
            .attachments
            .entry(framebuffer)
            .or_default()
            .insert(attachment, Attached::Texture(texture));
        drop(state);
        self.record(format!("attach_texture {:?} {}", attachment, texture.raw()));
    }

    fn delete_texture(&self, texture: TextureHandle) {
        let mut state = self.state.borrow_mut();
        assert!(
            state.live_textures.remove(&texture),
            "delete_texture: {} deleted twice or never created",
            texture
        );
        Self::count_delete(&mut state, ObjectKind::Texture);
        if state.bound_texture == Some(texture) {
            state.bound_texture = None;
        }
        drop(state);
        self.record(format!("delete_texture {}", texture.raw()));
    }

    fn create_renderbuffer(&self) -> Result<RenderbufferHandle> {
        let name = self.allocate_name(ObjectKind::Renderbuffer)?;
        let handle = RenderbufferHandle::new(name).expect("mock names start at 1");
        self.state.borrow_mut().live_renderbuffers.insert(handle);
        self.record(format!("create_renderbuffer {}", name));
        Ok(handle)
    }

    fn bind_renderbuffer(&self, renderbuffer: Option<RenderbufferHandle>) {
        self.state.borrow_mut().bound_renderbuffer = renderbuffer;
        self.record(match renderbuffer {
            Some(handle) => format!("bind_renderbuffer {}", handle.raw()),
            None => "bind_renderbuffer none".to_string(),
        });
    }

    fn allocate_renderbuffer_storage(&self, format: RenderbufferFormat, width: u32, height: u32) {
        let mut state = self.state.borrow_mut();
        let renderbuffer = state
            .bound_renderbuffer
            .expect("allocate_renderbuffer_storage: no renderbuffer bound");
        state
            .renderbuffer_storage
            .insert(renderbuffer, RenderbufferStorage { format, width, height });
        drop(state);
        self.record(format!("renderbuffer_storage {:?} {}x{}", format, width, height));
    }

    fn attach_renderbuffer(&self, attachment: Attachment, renderbuffer: RenderbufferHandle) {
        let mut state = self.state.borrow_mut();
        let framebuffer = state
            .bound_framebuffer
            .expect("attach_renderbuffer: no framebuffer object bound");
        state
            .attachments
            .entry(framebuffer)
            .or_default()
            .insert(attachment, Attached::Renderbuffer(renderbuffer));
        drop(state);
        self.record(format!("attach_renderbuffer {:?} {}", attachment, renderbuffer.raw()));
    }

    fn delete_renderbuffer(&self, renderbuffer: RenderbufferHandle) {
        let mut state = self.state.borrow_mut();
        assert!(
            state.live_renderbuffers.remove(&renderbuffer),
            "delete_renderbuffer: {} deleted twice or never created",
            renderbuffer
        );
        Self::count_delete(&mut state, ObjectKind::Renderbuffer);
        if state.bound_renderbuffer == Some(renderbuffer) {
            state.bound_renderbuffer = None;
        }
        drop(state);
        self.record(format!("delete_renderbuffer {}", renderbuffer.raw()));
    }

    fn set_viewport(&self, viewport: Viewport) {
        self.state.borrow_mut().viewport = Some(viewport);
        self.record(format!("viewport {}x{}", viewport.width, viewport.height));
    }
}

// ============================================================================
// Mock Window
// ============================================================================

/// Window whose size can be changed between calls
#[derive(Debug)]
pub struct MockWindow {
    size: Cell<Extent>,
}

impl MockWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self { size: Cell::new(Extent::new(width, height)) }
    }

    /// Simulate a window resize
    pub fn resize(&self, width: u32, height: u32) {
        self.size.set(Extent::new(width, height));
    }
}

impl WindowSizeProvider for MockWindow {
    fn width(&self) -> u32 {
        self.size.get().width
    }

    fn height(&self) -> u32 {
        self.size.get().height
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
