//! Mouse cursor lock/visibility state.

/// Whether the cursor is captured for mouse look.
///
/// Starts locked and hidden; [`toggle`](Self::toggle) flips both flags so the
/// player can release the mouse and take it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    /// Cursor confined to the window and mouse motion drives the camera.
    pub locked: bool,
    /// Cursor drawn on screen.
    pub visible: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            locked: true,
            visible: false,
        }
    }
}

impl CursorState {
    /// Flip lock and visibility.
    pub fn toggle(&mut self) {
        self.locked = !self.locked;
        self.visible = !self.visible;
    }

    /// Whether mouse motion should rotate the camera.
    #[must_use]
    pub fn captures_mouse(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locked_and_hidden() {
        let cursor = CursorState::default();
        assert!(cursor.locked);
        assert!(!cursor.visible);
        assert!(cursor.captures_mouse());
    }

    #[test]
    fn test_toggle_flips_both() {
        let mut cursor = CursorState::default();
        cursor.toggle();
        assert!(!cursor.locked);
        assert!(cursor.visible);
        assert!(!cursor.captures_mouse());
        cursor.toggle();
        assert_eq!(cursor, CursorState::default());
    }
}
