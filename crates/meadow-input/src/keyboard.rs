//! Frame-coherent keyboard state tracker.
//!
//! [`KeyboardState`] accumulates key events during a frame and answers three
//! questions for any key code: is it held, was it just pressed this frame, and
//! was it just released this frame. Keys are tracked by physical position so
//! WASD works the same on every layout; keys without a known code are ignored.

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal description of a key event for processing.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is an auto-repeat event.
    pub repeat: bool,
}

impl RawKeyEvent {
    /// A non-repeat press of `code`.
    pub fn press(code: KeyCode) -> Self {
        Self {
            key: PhysicalKey::Code(code),
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    /// A release of `code`.
    pub fn release(code: KeyCode) -> Self {
        Self {
            key: PhysicalKey::Code(code),
            state: ElementState::Released,
            repeat: false,
        }
    }
}

/// Per-frame keyboard state.
///
/// Forward events with [`process_raw`](Self::process_raw), query, then call
/// [`clear_transients`](Self::clear_transients) at the end of the frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
    just_released: HashSet<KeyCode>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a [`RawKeyEvent`]. Repeats and unidentified keys are ignored.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        let PhysicalKey::Code(code) = event.key else {
            return;
        };
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                if self.pressed.insert(code) {
                    self.just_pressed.insert(code);
                }
            }
            ElementState::Released => {
                if self.pressed.remove(&code) {
                    self.just_released.insert(code);
                }
            }
        }
    }

    /// `true` while the key is held down.
    #[must_use]
    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    /// `true` only during the frame the key went down.
    #[must_use]
    pub fn just_pressed(&self, code: KeyCode) -> bool {
        self.just_pressed.contains(&code)
    }

    /// `true` only during the frame the key went up.
    #[must_use]
    pub fn just_released(&self, code: KeyCode) -> bool {
        self.just_released.contains(&code)
    }

    /// `+1.0` if only `positive` is held, `-1.0` if only `negative` is, else `0.0`.
    #[must_use]
    pub fn axis(&self, negative: KeyCode, positive: KeyCode) -> f32 {
        let mut value = 0.0;
        if self.is_pressed(positive) {
            value += 1.0;
        }
        if self.is_pressed(negative) {
            value -= 1.0;
        }
        value
    }

    /// Clears the just-pressed and just-released sets.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn test_initial_state_no_keys_pressed() {
        let kb = KeyboardState::new();
        for code in [KeyCode::KeyW, KeyCode::KeyR, KeyCode::Escape] {
            assert!(!kb.is_pressed(code));
            assert!(!kb.just_pressed(code));
            assert!(!kb.just_released(code));
        }
    }

    #[test]
    fn test_press_then_release() {
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::press(KeyCode::KeyR));
        assert!(kb.is_pressed(KeyCode::KeyR));
        assert!(kb.just_pressed(KeyCode::KeyR));

        kb.clear_transients();
        kb.process_raw(RawKeyEvent::release(KeyCode::KeyR));
        assert!(!kb.is_pressed(KeyCode::KeyR));
        assert!(!kb.just_pressed(KeyCode::KeyR));
        assert!(kb.just_released(KeyCode::KeyR));
    }

    #[test]
    fn test_just_pressed_lasts_one_frame() {
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::press(KeyCode::Space));
        kb.clear_transients();
        assert!(!kb.just_pressed(KeyCode::Space));
        assert!(kb.is_pressed(KeyCode::Space));
    }

    #[test]
    fn test_repeat_events_ignored() {
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::press(KeyCode::KeyG));
        kb.clear_transients();
        kb.process_raw(RawKeyEvent {
            repeat: true,
            ..RawKeyEvent::press(KeyCode::KeyG)
        });
        assert!(!kb.just_pressed(KeyCode::KeyG));
        assert!(kb.is_pressed(KeyCode::KeyG));
    }

    #[test]
    fn test_release_without_press_is_not_transient() {
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent::release(KeyCode::KeyA));
        assert!(!kb.just_released(KeyCode::KeyA));
    }

    #[test]
    fn test_unidentified_key_ignored() {
        let mut kb = KeyboardState::new();
        kb.process_raw(RawKeyEvent {
            key: PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            state: ElementState::Pressed,
            repeat: false,
        });
        assert_eq!(kb.pressed.len(), 0);
    }

    #[test]
    fn test_axis() {
        let mut kb = KeyboardState::new();
        assert_eq!(kb.axis(KeyCode::KeyS, KeyCode::KeyW), 0.0);
        kb.process_raw(RawKeyEvent::press(KeyCode::KeyW));
        assert_eq!(kb.axis(KeyCode::KeyS, KeyCode::KeyW), 1.0);
        kb.process_raw(RawKeyEvent::press(KeyCode::KeyS));
        assert_eq!(kb.axis(KeyCode::KeyS, KeyCode::KeyW), 0.0);
        kb.process_raw(RawKeyEvent::release(KeyCode::KeyW));
        assert_eq!(kb.axis(KeyCode::KeyS, KeyCode::KeyW), -1.0);
    }
}
