//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration.
pub const CONFIG_FILE_NAME: &str = "config.ron";

const APP_NAME: &str = "meadow";

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain generation parameters.
    pub terrain: TerrainConfig,
    /// First-person player settings.
    pub player: PlayerConfig,
    /// Ground and sky appearance.
    pub scene: SceneConfig,
    /// Key bindings for scene actions.
    pub input: InputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Fixed seed; `None` draws a random seed at startup.
    pub seed: Option<u32>,
    /// Base disk radius before boundary perturbation.
    pub radius: f64,
    /// Radial spacing between vertex rings.
    pub grid_step: f64,
    /// Maximum hill height.
    pub height_amp: f64,
    /// Elevation noise frequency.
    pub height_freq: f64,
    /// Vertices per ring.
    pub angular_segments: usize,
}

/// First-person player configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Spawn position (feet) in world units.
    pub spawn_position: [f32; 3],
    /// Walk speed in units per second.
    pub speed: f32,
    /// Gravity strength when gravity is enabled.
    pub gravity: f32,
    /// Jump apex height in world units.
    pub jump_height: f32,
    /// Radians of rotation per pixel of mouse motion.
    pub mouse_sensitivity: f32,
}

/// Ground and sky appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Ground texture name.
    pub ground_texture: String,
    /// Ground tint (linear RGBA).
    pub ground_tint: [f32; 4],
    /// Sky dome texture name.
    pub sky_texture: String,
}

/// Key names (winit `KeyCode` debug names such as `"KeyR"` or `"Escape"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Regenerates the terrain with a random seed.
    pub regenerate_key: String,
    /// Toggles player gravity.
    pub toggle_gravity_key: String,
    /// Toggles cursor lock and visibility.
    pub toggle_cursor_key: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g., "debug", "info,meadow_terrain=trace").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: None,
            radius: 50.0,
            grid_step: 2.0,
            height_amp: 4.0,
            height_freq: 0.03,
            angular_segments: 64,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn_position: [0.0, 1.0, 0.0],
            speed: 7.0,
            gravity: 0.7,
            jump_height: 1.5,
            mouse_sensitivity: 0.003,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ground_texture: "grass".to_string(),
            ground_tint: [0.0, 0.95, 0.0, 1.0],
            sky_texture: "sky_sunset".to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            regenerate_key: "KeyR".to_string(),
            toggle_gravity_key: "KeyG".to_string(),
            toggle_cursor_key: "Escape".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Per-user config directory, `<os config dir>/meadow`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(ConfigError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("radius: 50.0"));
        assert!(ron_str.contains("ground_texture: \"grass\""));
        assert!(ron_str.contains("sky_texture: \"sky_sunset\""));
    }

    #[test]
    fn test_defaults_match_scene_constants() {
        let config = Config::default();
        assert_eq!(config.terrain.seed, None);
        assert_eq!(config.terrain.grid_step, 2.0);
        assert_eq!(config.terrain.height_amp, 4.0);
        assert_eq!(config.terrain.height_freq, 0.03);
        assert_eq!(config.terrain.angular_segments, 64);
        assert_eq!(config.player.speed, 7.0);
        assert_eq!(config.player.gravity, 0.7);
        assert_eq!(config.player.jump_height, 1.5);
        assert_eq!(config.player.spawn_position, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_config_roundtrip_with_seed() {
        let mut config = Config::default();
        config.terrain.seed = Some(42);
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(terrain: (radius: 80.0))").unwrap();
        assert_eq!(config.terrain.radius, 80.0);
        assert_eq!(config.terrain.grid_step, 2.0);
        assert_eq!(config.player, PlayerConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.seed = Some(7);
        config.terrain.radius = 64.0;
        config.scene.sky_texture = "sky_default".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_unreadable_config_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_ron_produces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
