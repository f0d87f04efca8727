//! Switchable gravity composed into the player controller.

/// Gravity on/off switch with the strength to restore when switched on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityState {
    /// Whether gravity currently applies.
    pub enabled: bool,
    /// Strength applied while enabled.
    pub base_value: f32,
}

impl GravityState {
    /// Enabled gravity of the given strength.
    pub fn new(base_value: f32) -> Self {
        Self {
            enabled: true,
            base_value,
        }
    }

    /// Strength in effect this tick: `base_value` when enabled, else zero.
    pub fn effective(&self) -> f32 {
        if self.enabled { self.base_value } else { 0.0 }
    }

    /// Flip the switch and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

impl Default for GravityState {
    fn default() -> Self {
        Self::new(1.0)
    }
}
