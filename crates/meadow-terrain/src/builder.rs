//! Polar-grid terrain mesh generation.
//!
//! The disk is sampled as `ring_count + 1` concentric rings of
//! `angular_segments` vertices each. Ring `k` sits at fraction
//! `t = k / ring_count` of the boundary radius for its angle, so the outer ring
//! follows the smoothed [`RadialProfile`] exactly. Ring 0 collapses onto the
//! center but keeps one vertex per segment; the resulting degenerate triangles
//! are part of the mesh layout.

use std::f64::consts::TAU;

use glam::{Vec2, Vec3};
use tracing::{debug, info};

use crate::error::TerrainError;
use crate::height::HeightSampler;
use crate::mesh::MeshData;
use crate::noise_field::{HEIGHT_OCTAVES, NoiseField, RADIAL_OCTAVES};
use crate::radial_profile::{RadialProfile, RadialProfileBuilder};
use crate::seed::{Seed, height_seed, radial_seed, random_seed};

/// Default base radius of the disk.
pub const DEFAULT_RADIUS: f64 = 50.0;
/// Default radial spacing between rings.
pub const DEFAULT_GRID_STEP: f64 = 2.0;
/// Default hill amplitude.
pub const DEFAULT_HEIGHT_AMP: f64 = 4.0;
/// Default elevation noise frequency.
pub const DEFAULT_HEIGHT_FREQ: f64 = 0.03;
/// Default angular resolution.
pub const DEFAULT_ANGULAR_SEGMENTS: usize = 64;
/// Smallest accepted angular resolution.
pub const MIN_ANGULAR_SEGMENTS: usize = 4;

/// Shape parameters of the terrain disk.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainParams {
    /// Base radius before boundary perturbation.
    pub radius: f64,
    /// Radial spacing between rings.
    pub grid_step: f64,
    /// Maximum hill height.
    pub height_amp: f64,
    /// Frequency scaling of the elevation noise.
    pub height_freq: f64,
    /// Number of vertices per ring.
    pub angular_segments: usize,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            grid_step: DEFAULT_GRID_STEP,
            height_amp: DEFAULT_HEIGHT_AMP,
            height_freq: DEFAULT_HEIGHT_FREQ,
            angular_segments: DEFAULT_ANGULAR_SEGMENTS,
        }
    }
}

impl TerrainParams {
    /// Check every parameter against its valid domain.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TerrainError::invalid(
                "radius",
                self.radius,
                "must be finite and positive",
            ));
        }
        if !self.grid_step.is_finite() || self.grid_step <= 0.0 {
            return Err(TerrainError::invalid(
                "grid_step",
                self.grid_step,
                "must be finite and positive",
            ));
        }
        if !self.height_amp.is_finite() {
            return Err(TerrainError::invalid(
                "height_amp",
                self.height_amp,
                "must be finite",
            ));
        }
        if !self.height_freq.is_finite() {
            return Err(TerrainError::invalid(
                "height_freq",
                self.height_freq,
                "must be finite",
            ));
        }
        if self.angular_segments < MIN_ANGULAR_SEGMENTS {
            return Err(TerrainError::invalid(
                "angular_segments",
                self.angular_segments,
                "must be at least 4",
            ));
        }
        match self.checked_vertex_count() {
            Some(count) if count <= u32::MAX as usize => Ok(()),
            _ => Err(TerrainError::invalid(
                "grid_step",
                self.grid_step,
                "too fine for the radius: vertex count exceeds u32 indices",
            )),
        }
    }

    /// Number of rings outside the center, `floor(radius / grid_step)`, at least 1.
    pub fn ring_count(&self) -> usize {
        ((self.radius / self.grid_step).floor() as usize).max(1)
    }

    /// Vertex count of a mesh built with these parameters, saturating at
    /// `usize::MAX`.
    pub fn vertex_count(&self) -> usize {
        self.checked_vertex_count().unwrap_or(usize::MAX)
    }

    /// Triangle count of a mesh built with these parameters, saturating at
    /// `usize::MAX`.
    pub fn triangle_count(&self) -> usize {
        self.ring_count()
            .saturating_mul(self.angular_segments)
            .saturating_mul(2)
    }

    fn checked_vertex_count(&self) -> Option<usize> {
        self.ring_count()
            .checked_add(1)?
            .checked_mul(self.angular_segments)
    }
}

/// The two noise-driven inputs of one terrain instance.
#[derive(Clone, Debug)]
pub struct TerrainFields {
    /// Elevation sampler (seed `S`).
    pub height: HeightSampler,
    /// Boundary-shape field (seed `S + 1337`).
    pub radial: NoiseField,
}

impl TerrainFields {
    pub fn new(seed: Seed, params: &TerrainParams) -> Self {
        Self {
            height: HeightSampler::new(
                NoiseField::new(height_seed(seed), HEIGHT_OCTAVES),
                params.height_amp,
                params.height_freq,
            ),
            radial: NoiseField::new(radial_seed(seed), RADIAL_OCTAVES),
        }
    }
}

/// Builds terrain meshes and tracks the seed of the current terrain.
#[derive(Debug)]
pub struct TerrainMeshBuilder {
    params: TerrainParams,
    seed: Seed,
    fields: TerrainFields,
}

impl TerrainMeshBuilder {
    /// Validate `params` and prepare fields for `seed`, or a random seed if `None`.
    pub fn new(params: TerrainParams, seed: Option<Seed>) -> Result<Self, TerrainError> {
        params.validate()?;
        let seed = seed.unwrap_or_else(random_seed);
        let fields = TerrainFields::new(seed, &params);
        Ok(Self {
            params,
            seed,
            fields,
        })
    }

    /// Seed of the current terrain.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn fields(&self) -> &TerrainFields {
        &self.fields
    }

    /// Boundary profile of the current terrain.
    pub fn profile(&self) -> RadialProfile {
        self.profile_builder().build(&self.fields.radial)
    }

    /// Mesh of the current terrain.
    pub fn current(&self) -> MeshData {
        self.build(&self.fields)
    }

    /// Build the mesh for `seed`. Pure in `(params, seed)`; the current seed
    /// is left untouched.
    pub fn generate(&self, seed: Seed) -> MeshData {
        if seed == self.seed {
            return self.current();
        }
        self.build(&TerrainFields::new(seed, &self.params))
    }

    /// Reseed and rebuild from scratch. Draws a random seed when `seed` is
    /// `None`. Returns the new mesh and the seed actually used.
    pub fn regenerate(&mut self, seed: Option<Seed>) -> (MeshData, Seed) {
        let seed = seed.unwrap_or_else(random_seed);
        self.fields = TerrainFields::new(seed, &self.params);
        self.seed = seed;

        let mesh = self.current();
        info!(
            seed,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "Terrain regenerated"
        );
        (mesh, seed)
    }

    fn profile_builder(&self) -> RadialProfileBuilder {
        RadialProfileBuilder::new(self.params.angular_segments, self.params.radius)
    }

    fn build(&self, fields: &TerrainFields) -> MeshData {
        let segments = self.params.angular_segments;
        let ring_count = self.params.ring_count();
        let radius = self.params.radius;
        let profile = self.profile_builder().build(&fields.radial);

        let mut mesh = MeshData {
            positions: Vec::with_capacity(self.params.vertex_count()),
            uvs: Vec::with_capacity(self.params.vertex_count()),
            normals: Vec::new(),
            indices: Vec::with_capacity(self.params.triangle_count() * 3),
        };

        // Vertex index of (ring, segment) is ring * segments + segment.
        for ring in 0..=ring_count {
            let t = ring as f64 / ring_count as f64;
            for (seg, &boundary) in profile.as_slice().iter().enumerate() {
                let angle = TAU * seg as f64 / segments as f64;
                let (sin, cos) = angle.sin_cos();
                let r = boundary * t;
                let x = cos * r;
                let z = sin * r;
                let y = fields.height.sample(x, z, t);

                mesh.positions.push(Vec3::new(x as f32, y as f32, z as f32));
                mesh.uvs.push(Vec2::new(
                    ((x + radius) / (2.0 * radius)) as f32,
                    ((z + radius) / (2.0 * radius)) as f32,
                ));
            }
        }

        for ring in 0..ring_count {
            let current = (ring * segments) as u32;
            let next = ((ring + 1) * segments) as u32;
            for seg in 0..segments {
                let seg_next = (seg + 1) % segments;
                let a = current + seg as u32;
                let b = current + seg_next as u32;
                let c = next + seg as u32;
                let d = next + seg_next as u32;
                mesh.indices.extend_from_slice(&[a, c, d, a, d, b]);
            }
        }

        mesh.recompute_normals();

        debug!(
            rings = ring_count,
            segments,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "Built terrain mesh"
        );
        mesh
    }
}
