//! First-person player: mouse look, WASD walking, jumping and a gravity
//! toggle, standing on whatever ground a [`GroundQuery`] reports.

pub mod first_person;
pub mod gravity;
pub mod ground;

pub use first_person::{FirstPersonController, GRAVITY_SCALE, MoveInput, SNAP_DISTANCE};
pub use gravity::GravityState;
pub use ground::{FlatGround, GroundQuery};
