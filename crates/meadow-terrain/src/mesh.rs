//! Engine-independent ground mesh: positions, UVs, triangle indices and
//! normals recomputed from triangle geometry.

use glam::{Vec2, Vec3};

/// Interleaved vertex ready for GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GroundVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

const _: () = assert!(
    std::mem::size_of::<GroundVertex>() == 32,
    "GroundVertex layout changed"
);

/// Output of one terrain build.
///
/// `positions`, `uvs` and `normals` are parallel arrays. `indices` holds three
/// entries per triangle. Triangles are wound clockwise when viewed from +Y;
/// [`recompute_normals`](Self::recompute_normals) treats that winding as the
/// front face, so a flat ground has normals pointing up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions in world units.
    pub positions: Vec<Vec3>,
    /// Texture coordinates, one per position.
    pub uvs: Vec<Vec2>,
    /// Smooth vertex normals, one per position.
    pub normals: Vec<Vec3>,
    /// Triangle list, 3 indices per triangle.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns `true` if every index references an existing vertex and the
    /// attribute arrays are parallel.
    pub fn is_consistent(&self) -> bool {
        let n = self.positions.len();
        self.uvs.len() == n
            && self.normals.len() == n
            && self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| (i as usize) < n)
    }

    /// Recompute area-weighted smooth normals from the triangle list.
    ///
    /// Degenerate triangles contribute nothing. Vertices touched only by
    /// degenerate triangles get `+Y`.
    pub fn recompute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];

        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let p0 = self.positions[a];
            let p1 = self.positions[b];
            let p2 = self.positions[c];
            // Clockwise front face: swap the edge order of the usual CCW cross product.
            let face = (p2 - p0).cross(p1 - p0);
            acc[a] += face;
            acc[b] += face;
            acc[c] += face;
        }

        self.normals = acc
            .into_iter()
            .map(|n| {
                let n = n.normalize_or_zero();
                if n == Vec3::ZERO { Vec3::Y } else { n }
            })
            .collect();
    }

    /// Interleave the attribute arrays into a single vertex buffer.
    pub fn interleaved(&self) -> Vec<GroundVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| GroundVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }

    /// Surface height at `(x, z)`, interpolated inside the triangle whose XZ
    /// projection contains the point. `None` outside the mesh.
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        const EDGE_TOLERANCE: f32 = 1e-5;
        let p = Vec2::new(x, z);

        for [a, b, c] in self.triangles() {
            let pa = self.positions[a as usize];
            let pb = self.positions[b as usize];
            let pc = self.positions[c as usize];

            let a2 = Vec2::new(pa.x, pa.z);
            let v0 = Vec2::new(pb.x, pb.z) - a2;
            let v1 = Vec2::new(pc.x, pc.z) - a2;
            let v2 = p - a2;

            let det = v0.perp_dot(v1);
            if det.abs() < f32::EPSILON {
                continue;
            }

            let wb = v2.perp_dot(v1) / det;
            let wc = v0.perp_dot(v2) / det;
            let wa = 1.0 - wb - wc;

            if wa >= -EDGE_TOLERANCE && wb >= -EDGE_TOLERANCE && wc >= -EDGE_TOLERANCE {
                return Some(wa * pa.y + wb * pb.y + wc * pc.y);
            }
        }

        None
    }
}
