//! Ground height lookup used for standing and landing.

use meadow_terrain::MeshData;

/// Reports the walkable surface height below a horizontal position.
pub trait GroundQuery {
    /// Surface height at `(x, z)`, or `None` where there is no ground.
    fn ground_height(&self, x: f32, z: f32) -> Option<f32>;
}

impl GroundQuery for MeshData {
    fn ground_height(&self, x: f32, z: f32) -> Option<f32> {
        self.height_at(x, z)
    }
}

impl<G: GroundQuery + ?Sized> GroundQuery for &G {
    fn ground_height(&self, x: f32, z: f32) -> Option<f32> {
        (**self).ground_height(x, z)
    }
}

impl<G: GroundQuery> GroundQuery for Option<G> {
    fn ground_height(&self, x: f32, z: f32) -> Option<f32> {
        self.as_ref().and_then(|g| g.ground_height(x, z))
    }
}

/// An infinite horizontal plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatGround {
    pub height: f32,
}

impl GroundQuery for FlatGround {
    fn ground_height(&self, _x: f32, _z: f32) -> Option<f32> {
        Some(self.height)
    }
}
