//! Keyboard state, cursor lock and the key bindings that drive scene actions.

pub mod bindings;
pub mod cursor;
pub mod keyboard;

pub use bindings::{KeyBindingError, SceneAction, SceneBindings, parse_key_code};
pub use cursor::CursorState;
pub use keyboard::{KeyboardState, RawKeyEvent};
