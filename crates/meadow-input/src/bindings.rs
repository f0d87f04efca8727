//! Key bindings for discrete scene actions.
//!
//! Bindings are configured by key name (the `Debug` name of winit's
//! [`KeyCode`], e.g. `"KeyR"`) and resolved once at startup.

use winit::keyboard::KeyCode;

use crate::keyboard::KeyboardState;

/// Discrete actions the scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneAction {
    /// Rebuild the terrain from a fresh random seed.
    RegenerateTerrain,
    /// Switch player gravity on or off.
    ToggleGravity,
    /// Release or recapture the mouse cursor.
    ToggleCursor,
}

impl SceneAction {
    pub const ALL: [SceneAction; 3] = [
        SceneAction::RegenerateTerrain,
        SceneAction::ToggleGravity,
        SceneAction::ToggleCursor,
    ];
}

/// Errors raised while resolving configured key names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyBindingError {
    #[error("unknown key name {name:?} for {action:?}")]
    UnknownKey { action: SceneAction, name: String },

    #[error("{key:?} is bound to both {first:?} and {second:?}")]
    Conflict {
        key: KeyCode,
        first: SceneAction,
        second: SceneAction,
    },
}

/// Resolve a key name to a [`KeyCode`].
pub fn parse_key_code(name: &str) -> Option<KeyCode> {
    Some(match name {
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        "Digit0" => KeyCode::Digit0,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        "Digit5" => KeyCode::Digit5,
        "Digit6" => KeyCode::Digit6,
        "Digit7" => KeyCode::Digit7,
        "Digit8" => KeyCode::Digit8,
        "Digit9" => KeyCode::Digit9,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        "F5" => KeyCode::F5,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        _ => return None,
    })
}

/// Which key triggers each [`SceneAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneBindings {
    pub regenerate: KeyCode,
    pub toggle_gravity: KeyCode,
    pub toggle_cursor: KeyCode,
}

impl Default for SceneBindings {
    fn default() -> Self {
        Self {
            regenerate: KeyCode::KeyR,
            toggle_gravity: KeyCode::KeyG,
            toggle_cursor: KeyCode::Escape,
        }
    }
}

impl SceneBindings {
    /// Resolve bindings from key names, rejecting unknown names and keys bound
    /// to more than one action.
    pub fn from_names(
        regenerate: &str,
        toggle_gravity: &str,
        toggle_cursor: &str,
    ) -> Result<Self, KeyBindingError> {
        let resolve = |action: SceneAction, name: &str| {
            parse_key_code(name).ok_or_else(|| KeyBindingError::UnknownKey {
                action,
                name: name.to_string(),
            })
        };

        let bindings = Self {
            regenerate: resolve(SceneAction::RegenerateTerrain, regenerate)?,
            toggle_gravity: resolve(SceneAction::ToggleGravity, toggle_gravity)?,
            toggle_cursor: resolve(SceneAction::ToggleCursor, toggle_cursor)?,
        };
        bindings.check_conflicts()?;
        Ok(bindings)
    }

    /// Key bound to `action`.
    pub fn key_for(&self, action: SceneAction) -> KeyCode {
        match action {
            SceneAction::RegenerateTerrain => self.regenerate,
            SceneAction::ToggleGravity => self.toggle_gravity,
            SceneAction::ToggleCursor => self.toggle_cursor,
        }
    }

    /// Actions whose key went down this frame, in [`SceneAction::ALL`] order.
    pub fn triggered(&self, keyboard: &KeyboardState) -> Vec<SceneAction> {
        SceneAction::ALL
            .into_iter()
            .filter(|&action| keyboard.just_pressed(self.key_for(action)))
            .collect()
    }

    fn check_conflicts(&self) -> Result<(), KeyBindingError> {
        for (i, &first) in SceneAction::ALL.iter().enumerate() {
            for &second in &SceneAction::ALL[i + 1..] {
                let key = self.key_for(first);
                if key == self.key_for(second) {
                    return Err(KeyBindingError::Conflict { key, first, second });
                }
            }
        }
        Ok(())
    }
}
