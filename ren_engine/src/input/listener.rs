/// Input listener traits and the subscription handle

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::keys::{Key, KeyMods, MouseButton};

/// Receives keyboard events
pub trait KeyListener {
    fn on_key_pressed(&mut self, key: Key, mods: KeyMods);

    fn on_key_released(&mut self, key: Key, mods: KeyMods);
}

/// Receives mouse events
///
/// Cursor and scroll values are passed through from the window unchanged:
/// the cursor in pixels from the top left corner, scroll as wheel offsets.
pub trait MouseListener {
    fn on_mouse_pressed(&mut self, button: MouseButton, mods: KeyMods);

    fn on_mouse_released(&mut self, button: MouseButton, mods: KeyMods);

    fn on_cursor_moved(&mut self, _x: f64, _y: f64) {}

    fn on_scroll(&mut self, _x_offset: f64, _y_offset: f64) {}
}

/// Non-owning subscription to the input hub, by capability
///
/// The hub never keeps a listener alive: the owner holds the `Rc`, and a
/// listener whose last `Rc` is dropped simply stops receiving events.
#[derive(Clone)]
pub enum InputListener {
    Key(Weak<RefCell<dyn KeyListener>>),
    Mouse(Weak<RefCell<dyn MouseListener>>),
}

impl InputListener {
    /// Subscription for a keyboard listener
    pub fn key<L: KeyListener + 'static>(listener: &Rc<RefCell<L>>) -> Self {
        let listener: Rc<RefCell<dyn KeyListener>> = listener.clone();
        InputListener::Key(Rc::downgrade(&listener))
    }

    /// Subscription for a mouse listener
    pub fn mouse<L: MouseListener + 'static>(listener: &Rc<RefCell<L>>) -> Self {
        let listener: Rc<RefCell<dyn MouseListener>> = listener.clone();
        InputListener::Mouse(Rc::downgrade(&listener))
    }

    /// Whether the listener's owner still holds it
    pub fn is_alive(&self) -> bool {
        match self {
            InputListener::Key(listener) => listener.strong_count() > 0,
            InputListener::Mouse(listener) => listener.strong_count() > 0,
        }
    }
}

impl std::fmt::Debug for InputListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (kind, alive) = match self {
            InputListener::Key(_) => ("Key", self.is_alive()),
            InputListener::Mouse(_) => ("Mouse", self.is_alive()),
        };
        f.debug_struct("InputListener")
            .field("kind", &kind)
            .field("alive", &alive)
            .finish()
    }
}
