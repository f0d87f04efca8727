//! Command-line argument parsing for the Meadow scene.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Meadow command-line arguments.
///
/// Terrain and logging flags override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "meadow", about = "Procedural meadow terrain")]
pub struct CliArgs {
    /// Terrain seed (random when neither this nor the config sets one).
    #[arg(long)]
    pub seed: Option<u32>,

    /// Base disk radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Radial spacing between vertex rings.
    #[arg(long)]
    pub grid_step: Option<f64>,

    /// Maximum hill height.
    #[arg(long)]
    pub height_amp: Option<f64>,

    /// Elevation noise frequency.
    #[arg(long)]
    pub height_freq: Option<f64>,

    /// Number of random-seed regenerations to run after startup.
    #[arg(long, default_value_t = 0)]
    pub regenerations: u32,

    /// Simulated seconds of player movement per terrain.
    #[arg(long, default_value_t = 2.0)]
    pub sim_seconds: f64,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.terrain.seed = Some(seed);
        }
        if let Some(radius) = args.radius {
            self.terrain.radius = radius;
        }
        if let Some(step) = args.grid_step {
            self.terrain.grid_step = step;
        }
        if let Some(amp) = args.height_amp {
            self.terrain.height_amp = amp;
        }
        if let Some(freq) = args.height_freq {
            self.terrain.height_freq = freq;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
