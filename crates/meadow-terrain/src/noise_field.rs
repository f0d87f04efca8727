//! Seeded multi-octave coherent noise.
//!
//! Composites octaves of Perlin gradient noise (fractal Brownian motion) and
//! normalizes the sum so that samples stay within `[-1, 1]`.

use noise::{NoiseFn, Perlin};

use crate::seed::Seed;

/// Frequency multiplier between successive octaves.
pub const LACUNARITY: f64 = 2.0;
/// Amplitude multiplier between successive octaves.
pub const PERSISTENCE: f64 = 0.5;

/// Octave count of the elevation field.
pub const HEIGHT_OCTAVES: u32 = 3;
/// Octave count of the boundary-shape field.
pub const RADIAL_OCTAVES: u32 = 2;

/// A deterministic 2D noise function fixed by `(seed, octaves)`.
///
/// Equal `(seed, x, y)` always yields an equal sample. The field is immutable
/// once constructed; a new seed means a new field.
#[derive(Clone)]
pub struct NoiseField {
    noise: Perlin,
    seed: Seed,
    octaves: u32,
    amplitude_sum: f64,
}

impl NoiseField {
    /// Create a field with the given seed and octave count (at least one octave).
    pub fn new(seed: Seed, octaves: u32) -> Self {
        let octaves = octaves.max(1);
        let mut amplitude_sum = 0.0;
        let mut amplitude = 1.0;
        for _ in 0..octaves {
            amplitude_sum += amplitude;
            amplitude *= PERSISTENCE;
        }

        Self {
            noise: Perlin::new(seed),
            seed,
            octaves,
            amplitude_sum,
        }
    }

    /// Sample the field at `(x, y)`. The result lies within `[-1, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;

        for _ in 0..self.octaves {
            total += self.noise.get([x * frequency, y * frequency]) * amplitude;
            frequency *= LACUNARITY;
            amplitude *= PERSISTENCE;
        }

        total / self.amplitude_sum
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("seed", &self.seed)
            .field("octaves", &self.octaves)
            .finish()
    }
}
