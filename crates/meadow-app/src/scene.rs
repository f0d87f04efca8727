//! The meadow scene: one terrain disk, a sky and a first-person player.
//!
//! The scene owns the current ground through a [`GroundSlot`] and routes
//! keyboard input to scene actions and player movement. Nothing here talks to
//! a GPU; whatever displays the ground is the [`MeshConsumer`].

use glam::Vec3;
use meadow_config::{Config, PlayerConfig, SceneConfig, TerrainConfig};
use meadow_input::{
    CursorState, KeyBindingError, KeyboardState, RawKeyEvent, SceneAction, SceneBindings,
};
use meadow_player::{FirstPersonController, GravityState, MoveInput};
use meadow_terrain::{
    GroundMaterial, GroundSlot, MeshConsumer, MeshData, Seed, TerrainError, TerrainMeshBuilder,
    TerrainParams,
};
use tracing::{debug, info};
use winit::keyboard::KeyCode;

/// Players below this height are returned to the spawn point.
pub const FALL_RESET_Y: f32 = -50.0;

/// Errors raised while assembling a [`Scene`].
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("terrain: {0}")]
    Terrain(#[from] TerrainError),

    #[error("key bindings: {0}")]
    Bindings(#[from] KeyBindingError),
}

/// Skybox selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkyDef {
    /// Texture name resolved by the renderer.
    pub texture: String,
}

/// Terrain shape from the `[terrain]` config section.
pub fn terrain_params(config: &TerrainConfig) -> TerrainParams {
    TerrainParams {
        radius: config.radius,
        grid_step: config.grid_step,
        height_amp: config.height_amp,
        height_freq: config.height_freq,
        angular_segments: config.angular_segments,
    }
}

/// Ground material from the `[scene]` config section.
pub fn ground_material(config: &SceneConfig) -> GroundMaterial {
    GroundMaterial {
        texture: config.ground_texture.clone(),
        tint: config.ground_tint,
    }
}

/// Player controller from the `[player]` config section.
pub fn player_controller(config: &PlayerConfig) -> FirstPersonController {
    FirstPersonController {
        speed: config.speed,
        jump_height: config.jump_height,
        mouse_sensitivity: config.mouse_sensitivity,
        gravity: GravityState::new(config.gravity),
        ..FirstPersonController::at(Vec3::from_array(config.spawn_position))
    }
}

/// Movement intent from WASD and Space. A jump is requested only on the
/// frame Space goes down.
pub fn move_input(keyboard: &KeyboardState) -> MoveInput {
    MoveInput {
        forward: keyboard.axis(KeyCode::KeyS, KeyCode::KeyW),
        strafe: keyboard.axis(KeyCode::KeyA, KeyCode::KeyD),
        jump: keyboard.just_pressed(KeyCode::Space),
    }
}

/// A terrain disk with a player standing on it.
pub struct Scene<C: MeshConsumer> {
    ground: GroundSlot<C>,
    sky: SkyDef,
    player: FirstPersonController,
    spawn_position: Vec3,
    cursor: CursorState,
    bindings: SceneBindings,
    keyboard: KeyboardState,
}

impl<C: MeshConsumer> Scene<C> {
    /// Generate the first ground (config seed, or random) and place the
    /// player at the spawn position.
    pub fn new(config: &Config, consumer: C) -> Result<Self, SceneError> {
        let bindings = SceneBindings::from_names(
            &config.input.regenerate_key,
            &config.input.toggle_gravity_key,
            &config.input.toggle_cursor_key,
        )?;
        let builder =
            TerrainMeshBuilder::new(terrain_params(&config.terrain), config.terrain.seed)?;
        let ground = GroundSlot::spawn(builder, ground_material(&config.scene), consumer);
        let player = player_controller(&config.player);

        info!(
            seed = ground.builder().seed(),
            sky = %config.scene.sky_texture,
            "Scene created"
        );

        Ok(Self {
            ground,
            sky: SkyDef {
                texture: config.scene.sky_texture.clone(),
            },
            spawn_position: player.position,
            player,
            cursor: CursorState::default(),
            bindings,
            keyboard: KeyboardState::new(),
        })
    }

    /// Record a key event for the next [`tick`](Self::tick).
    pub fn process_key(&mut self, event: RawKeyEvent) {
        self.keyboard.process_raw(event);
    }

    /// Rotate the view when the cursor is captured.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        if self.cursor.captures_mouse() {
            self.player.apply_mouse_delta(dx, dy);
        }
    }

    /// Dispatch actions whose key went down since the last tick.
    pub fn handle_actions(&mut self) -> Vec<SceneAction> {
        let actions = self.bindings.triggered(&self.keyboard);
        for &action in &actions {
            match action {
                SceneAction::RegenerateTerrain => {
                    self.regenerate(None);
                }
                SceneAction::ToggleGravity => {
                    let enabled = self.player.toggle_gravity();
                    info!(enabled, "Gravity toggled");
                }
                SceneAction::ToggleCursor => {
                    self.cursor.toggle();
                    debug!(locked = self.cursor.locked, "Cursor toggled");
                }
            }
        }
        actions
    }

    /// Replace the ground with a new terrain. Returns the seed used.
    pub fn regenerate(&mut self, seed: Option<Seed>) -> Seed {
        let seed = self.ground.replace(seed);
        info!(seed, "Terrain regenerated");
        seed
    }

    /// Run actions, then step the player against the current ground.
    pub fn tick(&mut self, dt: f32) -> Vec<SceneAction> {
        let actions = self.handle_actions();
        let input = move_input(&self.keyboard);
        self.player.step(&input, &self.ground.mesh(), dt);

        if self.player.position.y < FALL_RESET_Y {
            debug!(y = self.player.position.y, "Player fell off, respawning");
            self.respawn();
        }

        self.keyboard.clear_transients();
        actions
    }

    /// Put the player back at the spawn position, at rest.
    pub fn respawn(&mut self) {
        self.player.position = self.spawn_position;
        self.player.vertical_velocity = 0.0;
        self.player.grounded = false;
    }

    /// Seed of the live ground.
    pub fn seed(&self) -> Option<Seed> {
        self.ground.seed()
    }

    pub fn mesh(&self) -> Option<&MeshData> {
        self.ground.mesh()
    }

    pub fn ground(&self) -> &GroundSlot<C> {
        &self.ground
    }

    pub fn sky(&self) -> &SkyDef {
        &self.sky
    }

    pub fn player(&self) -> &FirstPersonController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut FirstPersonController {
        &mut self.player
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn bindings(&self) -> &SceneBindings {
        &self.bindings
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }
}
