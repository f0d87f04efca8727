//! Meadow scene shell.
//!
//! Assembles the terrain, the player and input handling into a [`Scene`],
//! advanced at a fixed rate by [`FixedStep`].

pub mod fixed_step;
pub mod headless;
pub mod scene;

pub use fixed_step::{FIXED_DT, FixedStep, MAX_FRAME_TIME};
pub use headless::{GroundHandle, HeadlessConsumer};
pub use scene::{FALL_RESET_Y, Scene, SceneError, SkyDef};
