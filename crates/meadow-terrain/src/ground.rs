//! Handoff of terrain meshes to a renderer and the single current ground.
//!
//! The renderer/physics side is abstracted as a [`MeshConsumer`]. A
//! [`GroundSlot`] owns the builder, the consumer and the one live ground; on
//! regeneration the new mesh is fully built before the old ground is retired
//! and the new one spawned, so two grounds are never live at once.

use tracing::debug;

use crate::builder::TerrainMeshBuilder;
use crate::mesh::MeshData;
use crate::seed::Seed;

/// Surface appearance requested for the ground entity.
#[derive(Clone, Debug, PartialEq)]
pub struct GroundMaterial {
    /// Texture name resolved by the consumer (e.g. `"grass"`).
    pub texture: String,
    /// Linear RGBA tint multiplied with the texture.
    pub tint: [f32; 4],
}

impl Default for GroundMaterial {
    fn default() -> Self {
        Self {
            texture: "grass".to_string(),
            tint: [0.0, 0.95, 0.0, 1.0],
        }
    }
}

/// Displays terrain meshes with a mesh collider.
///
/// Meshes arrive with normals already derived from the triangle winding.
pub trait MeshConsumer {
    /// Identifies a spawned ground entity.
    type Handle;

    /// Display `mesh` with a collision volume and the given material.
    fn spawn_ground(&mut self, mesh: &MeshData, material: &GroundMaterial) -> Self::Handle;

    /// Disable and destroy a ground entity, including its collider.
    fn retire_ground(&mut self, handle: Self::Handle);
}

struct LiveGround<H> {
    mesh: MeshData,
    seed: Seed,
    handle: H,
}

/// Owns the current terrain and replaces it as a whole.
pub struct GroundSlot<C: MeshConsumer> {
    builder: TerrainMeshBuilder,
    material: GroundMaterial,
    consumer: C,
    live: Option<LiveGround<C::Handle>>,
}

impl<C: MeshConsumer> GroundSlot<C> {
    /// Build the builder's current terrain and hand it to `consumer`.
    pub fn spawn(builder: TerrainMeshBuilder, material: GroundMaterial, mut consumer: C) -> Self {
        let seed = builder.seed();
        let mesh = builder.current();
        let handle = consumer.spawn_ground(&mesh, &material);
        debug!(seed, "Spawned initial ground");

        Self {
            builder,
            material,
            consumer,
            live: Some(LiveGround { mesh, seed, handle }),
        }
    }

    /// Regenerate with `seed` (or a random seed) and swap the live ground.
    ///
    /// Returns the seed actually used.
    pub fn replace(&mut self, seed: Option<Seed>) -> Seed {
        let (mesh, seed) = self.builder.regenerate(seed);

        if let Some(old) = self.live.take() {
            debug!(old_seed = old.seed, new_seed = seed, "Retiring ground");
            self.consumer.retire_ground(old.handle);
        }

        let handle = self.consumer.spawn_ground(&mesh, &self.material);
        self.live = Some(LiveGround { mesh, seed, handle });
        seed
    }

    /// Mesh of the live ground.
    pub fn mesh(&self) -> Option<&MeshData> {
        self.live.as_ref().map(|g| &g.mesh)
    }

    /// Seed of the live ground.
    pub fn seed(&self) -> Option<Seed> {
        self.live.as_ref().map(|g| g.seed)
    }

    pub fn handle(&self) -> Option<&C::Handle> {
        self.live.as_ref().map(|g| &g.handle)
    }

    pub fn builder(&self) -> &TerrainMeshBuilder {
        &self.builder
    }

    pub fn material(&self) -> &GroundMaterial {
        &self.material
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }
}
