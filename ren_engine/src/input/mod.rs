//! Input module
//!
//! Translates window input into a stable key, modifier and mouse button
//! vocabulary and dispatches it to subscribed listeners.

mod input_manager;
mod keys;
mod listener;

pub use input_manager::InputManager;
pub use keys::{Key, KeyMods, MouseButton};
pub use listener::{InputListener, KeyListener, MouseListener};
