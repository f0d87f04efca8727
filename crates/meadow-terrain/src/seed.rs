//! Terrain seeds and the derivation of per-field seeds.

use rand::Rng;

/// Seed driving every noise field of one terrain instance.
pub type Seed = u32;

/// Offset added to the terrain seed for the boundary-shape field so that
/// boundary and elevation variation stay uncorrelated.
pub const RADIAL_SEED_OFFSET: Seed = 1337;

/// Upper bound (inclusive) for seeds drawn by [`random_seed`].
pub const MAX_RANDOM_SEED: Seed = 1_000_000;

/// Seed of the elevation field.
#[inline]
pub fn height_seed(seed: Seed) -> Seed {
    seed
}

/// Seed of the boundary-shape field. Wraps at `u32::MAX`.
#[inline]
pub fn radial_seed(seed: Seed) -> Seed {
    seed.wrapping_add(RADIAL_SEED_OFFSET)
}

/// Draw a fresh seed in `0..=MAX_RANDOM_SEED` from the thread-local RNG.
pub fn random_seed() -> Seed {
    rand::rng().random_range(0..=MAX_RANDOM_SEED)
}
