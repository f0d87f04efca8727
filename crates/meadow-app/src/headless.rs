//! Mesh consumer for runs without a renderer.

use meadow_terrain::{GroundMaterial, GroundVertex, MeshConsumer, MeshData};
use tracing::info;

/// Identifies a ground spawned by [`HeadlessConsumer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroundHandle(pub u64);

/// Packs each mesh into the interleaved vertex layout a renderer would
/// upload, then logs statistics instead of uploading it.
#[derive(Debug, Default)]
pub struct HeadlessConsumer {
    next_id: u64,
    live: Vec<GroundHandle>,
    spawned: u64,
    retired: u64,
    vertex_bytes: usize,
}

impl HeadlessConsumer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grounds spawned and not yet retired.
    pub fn live(&self) -> &[GroundHandle] {
        &self.live
    }

    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    pub fn retired(&self) -> u64 {
        self.retired
    }

    /// Size of the most recent interleaved vertex buffer.
    pub fn vertex_bytes(&self) -> usize {
        self.vertex_bytes
    }
}

impl MeshConsumer for HeadlessConsumer {
    type Handle = GroundHandle;

    fn spawn_ground(&mut self, mesh: &MeshData, material: &GroundMaterial) -> GroundHandle {
        let handle = GroundHandle(self.next_id);
        self.next_id += 1;
        self.spawned += 1;
        self.live.push(handle);

        let vertices = mesh.interleaved();
        self.vertex_bytes = bytemuck::cast_slice::<GroundVertex, u8>(&vertices).len();

        let (min_y, max_y) = mesh
            .positions
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        info!(
            handle = handle.0,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            vertex_bytes = self.vertex_bytes,
            min_y,
            max_y,
            texture = %material.texture,
            "Ground spawned"
        );
        handle
    }

    fn retire_ground(&mut self, handle: GroundHandle) {
        self.live.retain(|&h| h != handle);
        self.retired += 1;
        info!(handle = handle.0, "Ground retired");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meadow_terrain::{TerrainMeshBuilder, TerrainParams};

    #[test]
    fn test_spawn_and_retire() {
        let mesh = TerrainMeshBuilder::new(TerrainParams::default(), Some(7))
            .unwrap()
            .current();
        let material = GroundMaterial::default();
        let mut consumer = HeadlessConsumer::new();

        let first = consumer.spawn_ground(&mesh, &material);
        let second = consumer.spawn_ground(&mesh, &material);
        assert_ne!(first, second);
        assert_eq!(consumer.live(), &[first, second]);

        assert_eq!(
            consumer.vertex_bytes(),
            mesh.vertex_count() * std::mem::size_of::<GroundVertex>()
        );

        consumer.retire_ground(first);
        assert_eq!(consumer.live(), &[second]);
        assert_eq!(consumer.spawned(), 2);
        assert_eq!(consumer.retired(), 1);
    }
}
