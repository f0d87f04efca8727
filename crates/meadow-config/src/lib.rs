//! Configuration for the Meadow scene.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and tolerate missing or unknown fields in either direction.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, InputConfig, PlayerConfig, SceneConfig, TerrainConfig,
    default_config_dir,
};
pub use error::ConfigError;
