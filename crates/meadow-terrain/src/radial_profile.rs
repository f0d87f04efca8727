//! Per-angle boundary radius of the terrain disk.
//!
//! The raw profile perturbs a base radius with low-frequency noise sampled
//! around the circle. A circular moving average then removes jagged steps
//! between neighboring segments while keeping the organic outline.

use crate::noise_field::NoiseField;

/// Maximum boundary perturbation as a fraction of the base radius.
pub const RADIAL_PERTURBATION: f64 = 0.15;

/// Half-width of the circular moving-average window (`2 * 3 + 1` samples).
pub const SMOOTHING_WINDOW: usize = 3;

/// Boundary radius for each angular segment, ordered by angle.
///
/// Entries are non-negative and circular: the first and last segments are
/// neighbors.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialProfile {
    radii: Vec<f64>,
}

impl RadialProfile {
    /// Wrap precomputed radii. Negative entries are clamped to zero.
    pub fn from_radii(radii: Vec<f64>) -> Self {
        Self {
            radii: radii.into_iter().map(|r| r.max(0.0)).collect(),
        }
    }

    /// Circular moving average with the given half-width.
    ///
    /// Indices wrap modulo the segment count, so the seam at angle 0 is
    /// smoothed like any other neighborhood.
    pub fn smoothed(&self, window: usize) -> Self {
        let n = self.radii.len();
        if n == 0 {
            return self.clone();
        }

        let span = 2 * window + 1;
        let radii = (0..n)
            .map(|i| {
                let acc: f64 = (0..span)
                    .map(|k| self.radii[(i + n * span + k - window) % n])
                    .sum();
                (acc / span as f64).max(0.0)
            })
            .collect();

        Self { radii }
    }

    /// Radius of `segment`, wrapping around the circle. `None` for an empty
    /// profile.
    pub fn radius(&self, segment: usize) -> Option<f64> {
        let n = self.radii.len();
        (n > 0).then(|| self.radii[segment % n])
    }

    pub fn segment_count(&self) -> usize {
        self.radii.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.radii
    }

    /// Mean radius over all segments.
    pub fn mean(&self) -> f64 {
        if self.radii.is_empty() {
            return 0.0;
        }
        self.radii.iter().sum::<f64>() / self.radii.len() as f64
    }

    /// Population variance of the radii.
    pub fn variance(&self) -> f64 {
        if self.radii.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        self.radii.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / self.radii.len() as f64
    }

    /// Largest absolute difference between circularly adjacent segments.
    pub fn max_adjacent_delta(&self) -> f64 {
        let n = self.radii.len();
        (0..n)
            .map(|i| (self.radii[(i + 1) % n] - self.radii[i]).abs())
            .fold(0.0, f64::max)
    }
}

/// Builds a [`RadialProfile`] from a boundary-shape noise field.
#[derive(Clone, Debug)]
pub struct RadialProfileBuilder {
    /// Number of angular segments around the disk.
    pub segments: usize,
    /// Unperturbed disk radius.
    pub base_radius: f64,
    /// Perturbation amplitude as a fraction of `base_radius`.
    pub perturbation: f64,
    /// Moving-average half-width.
    pub window: usize,
}

impl RadialProfileBuilder {
    pub fn new(segments: usize, base_radius: f64) -> Self {
        Self {
            segments,
            base_radius,
            perturbation: RADIAL_PERTURBATION,
            window: SMOOTHING_WINDOW,
        }
    }

    /// The perturbed but unsmoothed profile.
    ///
    /// Segment `i` samples the field at `(i / segments, 0)`.
    pub fn build_raw(&self, field: &NoiseField) -> RadialProfile {
        let scale = self.base_radius * self.perturbation;
        let radii = (0..self.segments)
            .map(|i| {
                let a01 = i as f64 / self.segments as f64;
                self.base_radius + field.sample(a01, 0.0) * scale
            })
            .collect();
        RadialProfile::from_radii(radii)
    }

    /// The final, smoothed profile.
    pub fn build(&self, field: &NoiseField) -> RadialProfile {
        self.build_raw(field).smoothed(self.window)
    }
}
