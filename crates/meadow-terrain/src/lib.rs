//! Procedural disk terrain: seeded noise fields, a smoothed radial boundary,
//! polar-grid mesh synthesis and whole-mesh regeneration.

mod builder;
mod error;
mod ground;
mod height;
mod mesh;
mod noise_field;
mod radial_profile;
mod seed;

pub use builder::{
    DEFAULT_ANGULAR_SEGMENTS, DEFAULT_GRID_STEP, DEFAULT_HEIGHT_AMP, DEFAULT_HEIGHT_FREQ,
    DEFAULT_RADIUS, MIN_ANGULAR_SEGMENTS, TerrainFields, TerrainMeshBuilder, TerrainParams,
};
pub use error::TerrainError;
pub use ground::{GroundMaterial, GroundSlot, MeshConsumer};
pub use height::{CENTER_ATTENUATION, HeightSampler, radial_attenuation};
pub use mesh::{GroundVertex, MeshData};
pub use noise_field::{HEIGHT_OCTAVES, NoiseField, RADIAL_OCTAVES};
pub use radial_profile::{
    RADIAL_PERTURBATION, RadialProfile, RadialProfileBuilder, SMOOTHING_WINDOW,
};
pub use seed::{MAX_RANDOM_SEED, RADIAL_SEED_OFFSET, Seed, radial_seed, random_seed};
