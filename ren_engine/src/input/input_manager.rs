/// Input manager - fan-out of window input to subscribed listeners
///
/// Owned by the application and fed from the window's event loop, either
/// event by event through `handle_window_event()` or through the six
/// `handle_*` intakes directly. Backend codes are translated to `Key`,
/// `KeyMods` and `MouseButton` before any listener sees them.
///
/// Listeners are notified in subscription order. The manager only holds
/// weak references: a listener dropped by its owner is skipped and pruned
/// on the next dispatch.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{ModifiersState, PhysicalKey};

use crate::{engine_debug, engine_warn};
use super::keys::{Key, KeyMods, MouseButton};
use super::listener::{InputListener, KeyListener, MouseListener};

/// Input dispatch hub
#[derive(Default)]
pub struct InputManager {
    key_listeners: Vec<Weak<RefCell<dyn KeyListener>>>,
    mouse_listeners: Vec<Weak<RefCell<dyn MouseListener>>>,
    /// Modifier state tracked from `ModifiersChanged` events
    modifiers: ModifiersState,
    /// Last cursor position seen
    cursor: (f64, f64),
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== SUBSCRIPTION =====

    /// Subscribe a keyboard listener
    pub fn attach_key_listener<L: KeyListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) {
        self.attach(InputListener::key(listener));
    }

    /// Unsubscribe a keyboard listener
    pub fn detach_key_listener<L: KeyListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) {
        self.detach(&InputListener::key(listener));
    }

    /// Subscribe a mouse listener
    pub fn attach_mouse_listener<L: MouseListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) {
        self.attach(InputListener::mouse(listener));
    }

    /// Unsubscribe a mouse listener
    pub fn detach_mouse_listener<L: MouseListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) {
        self.detach(&InputListener::mouse(listener));
    }

    /// Subscribe a listener
    ///
    /// A listener that is already subscribed, or already dropped, is ignored.
    pub fn attach(&mut self, listener: InputListener) {
        if !listener.is_alive() {
            engine_warn!("ren::InputManager", "Ignoring attach of a dropped listener");
            return;
        }

        match listener {
            InputListener::Key(listener) => {
                if !self.key_listeners.iter().any(|l| Weak::ptr_eq(l, &listener)) {
                    self.key_listeners.push(listener);
                    engine_debug!("ren::InputManager",
                        "Key listener attached ({} total)", self.key_listeners.len());
                }
            }
            InputListener::Mouse(listener) => {
                if !self.mouse_listeners.iter().any(|l| Weak::ptr_eq(l, &listener)) {
                    self.mouse_listeners.push(listener);
                    engine_debug!("ren::InputManager",
                        "Mouse listener attached ({} total)", self.mouse_listeners.len());
                }
            }
        }
    }

    /// Unsubscribe a listener, matched by identity
    pub fn detach(&mut self, listener: &InputListener) {
        match listener {
            InputListener::Key(listener) => {
                self.key_listeners.retain(|l| !Weak::ptr_eq(l, listener));
            }
            InputListener::Mouse(listener) => {
                self.mouse_listeners.retain(|l| !Weak::ptr_eq(l, listener));
            }
        }
    }

    /// Number of keyboard listeners still alive
    pub fn key_listener_count(&self) -> usize {
        self.key_listeners.iter().filter(|l| l.strong_count() > 0).count()
    }

    /// Number of mouse listeners still alive
    pub fn mouse_listener_count(&self) -> usize {
        self.mouse_listeners.iter().filter(|l| l.strong_count() > 0).count()
    }

    // ===== INTAKE =====

    pub fn handle_key_pressed(&mut self, key: PhysicalKey, mods: ModifiersState) {
        let (key, mods) = (Key::from_winit(key), KeyMods::from_winit(mods));
        self.notify_key(|listener| listener.on_key_pressed(key, mods));
    }

    pub fn handle_key_released(&mut self, key: PhysicalKey, mods: ModifiersState) {
        let (key, mods) = (Key::from_winit(key), KeyMods::from_winit(mods));
        self.notify_key(|listener| listener.on_key_released(key, mods));
    }

    pub fn handle_mouse_pressed(&mut self, button: WinitMouseButton, mods: ModifiersState) {
        let (button, mods) = (MouseButton::from_winit(button), KeyMods::from_winit(mods));
        self.notify_mouse(|listener| listener.on_mouse_pressed(button, mods));
    }

    pub fn handle_mouse_released(&mut self, button: WinitMouseButton, mods: ModifiersState) {
        let (button, mods) = (MouseButton::from_winit(button), KeyMods::from_winit(mods));
        self.notify_mouse(|listener| listener.on_mouse_released(button, mods));
    }

    /// Cursor position in pixels, origin at the top left of the window
    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
        self.notify_mouse(|listener| listener.on_cursor_moved(x, y));
    }

    pub fn handle_scroll(&mut self, x_offset: f64, y_offset: f64) {
        self.notify_mouse(|listener| listener.on_scroll(x_offset, y_offset));
    }

    /// Route a winit window event to the matching intake
    ///
    /// Key repeats arrive as presses. Scroll in lines and in pixels are both
    /// forwarded as plain offsets. Events without an input meaning are ignored.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }
            WindowEvent::KeyboardInput { event, .. } => match event.state {
                ElementState::Pressed => self.handle_key_pressed(event.physical_key, self.modifiers),
                ElementState::Released => self.handle_key_released(event.physical_key, self.modifiers),
            },
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.handle_mouse_pressed(*button, self.modifiers),
                ElementState::Released => self.handle_mouse_released(*button, self.modifiers),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(x, y) => self.handle_scroll(*x as f64, *y as f64),
                MouseScrollDelta::PixelDelta(offset) => self.handle_scroll(offset.x, offset.y),
            },
            _ => {}
        }
    }

    // ===== STATE =====

    /// Last cursor position seen, (0, 0) before any movement
    pub fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }

    /// Modifiers currently held, as tracked from window events
    pub fn modifiers(&self) -> KeyMods {
        KeyMods::from_winit(self.modifiers)
    }

    // ===== DISPATCH =====

    fn notify_key(&mut self, mut notify: impl FnMut(&mut dyn KeyListener)) {
        self.key_listeners.retain(|l| l.strong_count() > 0);
        for listener in self.key_listeners.iter().filter_map(Weak::upgrade) {
            match listener.try_borrow_mut() {
                Ok(mut listener) => notify(&mut *listener),
                Err(_) => engine_warn!("ren::InputManager",
                    "Key listener is borrowed elsewhere, skipping event"),
            }
        }
    }

    fn notify_mouse(&mut self, mut notify: impl FnMut(&mut dyn MouseListener)) {
        self.mouse_listeners.retain(|l| l.strong_count() > 0);
        for listener in self.mouse_listeners.iter().filter_map(Weak::upgrade) {
            match listener.try_borrow_mut() {
                Ok(mut listener) => notify(&mut *listener),
                Err(_) => engine_warn!("ren::InputManager",
                    "Mouse listener is borrowed elsewhere, skipping event"),
            }
        }
    }
}

impl std::fmt::Debug for InputManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputManager")
            .field("key_listeners", &self.key_listeners.len())
            .field("mouse_listeners", &self.mouse_listeners.len())
            .field("modifiers", &self.modifiers)
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
#[path = "input_manager_tests.rs"]
mod tests;
