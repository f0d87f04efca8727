//! Terrain elevation sampling with center flattening.

use crate::noise_field::NoiseField;

/// Fraction of the full hill amplitude kept at the disk center.
pub const CENTER_ATTENUATION: f64 = 0.2;

/// Attenuation factor for ring fraction `t`: a linear ramp from
/// [`CENTER_ATTENUATION`] at the center (`t = 0`) to `1.0` at the rim (`t = 1`).
#[inline]
pub fn radial_attenuation(t: f64) -> f64 {
    CENTER_ATTENUATION + (1.0 - CENTER_ATTENUATION) * t
}

/// Samples terrain height from a noise field scaled by amplitude and frequency.
#[derive(Clone, Debug)]
pub struct HeightSampler {
    field: NoiseField,
    amplitude: f64,
    frequency: f64,
}

impl HeightSampler {
    pub fn new(field: NoiseField, amplitude: f64, frequency: f64) -> Self {
        Self {
            field,
            amplitude,
            frequency,
        }
    }

    /// Full-amplitude height at `(x, z)`, ignoring the center flattening.
    pub fn sample_unattenuated(&self, x: f64, z: f64) -> f64 {
        self.field.sample(x * self.frequency, z * self.frequency) * self.amplitude
    }

    /// Height at `(x, z)` for a vertex at ring fraction `t`.
    pub fn sample(&self, x: f64, z: f64, t: f64) -> f64 {
        self.sample_unattenuated(x, z) * radial_attenuation(t)
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn field(&self) -> &NoiseField {
        &self.field
    }
}
