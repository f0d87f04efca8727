//! Headless meadow run: builds the scene, lets the player settle on the
//! terrain, then regenerates as many times as requested.

use std::process::ExitCode;

use clap::Parser;
use meadow_app::{FIXED_DT, FixedStep, HeadlessConsumer, Scene};
use meadow_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(|| default_config_dir().ok());

    // Load or create config, then apply CLI overrides
    let mut config = match config_dir.as_deref() {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        None => {
            eprintln!("No config directory available, using defaults");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    meadow_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    let mut scene = match Scene::new(&config, HeadlessConsumer::new()) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Failed to create scene: {e}");
            return ExitCode::FAILURE;
        }
    };

    simulate(&mut scene, args.sim_seconds);

    for run in 1..=args.regenerations {
        let seed = scene.regenerate(None);
        info!(run, seed, "Regeneration");
        simulate(&mut scene, args.sim_seconds);
    }

    let consumer = scene.ground().consumer();
    info!(
        seed = scene.seed(),
        spawned = consumer.spawned(),
        retired = consumer.retired(),
        "Done"
    );
    ExitCode::SUCCESS
}

/// Run the player for `seconds` of simulated time at the fixed rate.
fn simulate(scene: &mut Scene<HeadlessConsumer>, seconds: f64) {
    let mut stepper = FixedStep::new();
    let frames = (seconds.max(0.0) / FIXED_DT).round() as u64;
    for _ in 0..frames {
        stepper.advance(FIXED_DT, |dt| {
            scene.tick(dt as f32);
        });
    }

    let player = scene.player();
    info!(
        frames = stepper.frame_count(),
        steps = stepper.update_count(),
        sim_time = stepper.total_sim_time(),
        x = player.position.x,
        y = player.position.y,
        z = player.position.z,
        eye_y = player.eye_position().y,
        grounded = player.grounded,
        "Player settled"
    );
}
