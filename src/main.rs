//! Gleam House headless runner.
//!
//! Simulates the level at a fixed step using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for 2D vectors and matrices
//! - **configparser** and **clap** for configuration
//!
//! There is no window: input comes from a scripted list of held keys and the
//! interesting state is reported through the log.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (or `--config PATH`) and the level layout
//! 2. Build the ECS world, register observers and state hooks
//! 3. Enter `Setup`, which spawns the level and moves on to `Playing`
//! 4. Step the schedule until the `quit_game` flag is raised or the frame
//!    limit is reached
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --debug --script "D:110,W:90,SPACE:1"
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use gleamhouse::components::player::Player;
use gleamhouse::components::transform2d::Transform2D;
use gleamhouse::game;
use gleamhouse::resources::debugmode::DebugMode;
use gleamhouse::resources::gameconfig::GameConfig;
use gleamhouse::resources::gamestate::GameState;
use gleamhouse::resources::inputscript::InputScript;
use gleamhouse::resources::levellayout::LevelLayout;
use gleamhouse::resources::worldsignals::WorldSignals;
use gleamhouse::systems::time::update_world_time;

/// Walks from the hall to the torch, through the corridor and up to the star.
const DEFAULT_SCRIPT: &str = "D:110,W:90,SPACE:1,S:30,D:240,W:40,D:90";

/// Gleam House
#[derive(Parser)]
#[command(version, about = "Headless Gleam House simulation")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Level layout as JSON. The built-in house is used when absent.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Stop after this many steps, overriding the configuration.
    #[arg(long, value_name = "N")]
    frames: Option<u32>,

    /// Held keys per step, e.g. "D:40,W+D:10,-:5,SPACE:1".
    #[arg(long, value_name = "STEPS", default_value = DEFAULT_SCRIPT)]
    script: String,

    /// Log world-space bounds every step.
    #[arg(long)]
    debug: bool,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        if cli.config.is_some() {
            error!("{}", e);
            std::process::exit(1);
        }
        warn!("{}; using defaults", e);
    }
    if let Some(frames) = cli.frames {
        config.max_frames = frames;
    }

    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let layout = match &cli.level {
        Some(path) => match LevelLayout::load_from_file(path) {
            Ok(layout) => layout,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => LevelLayout::gleam_house(),
    };

    let script = match InputScript::parse(&cli.script) {
        Ok(script) => script,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let max_frames = config.max_frames;
    let dt = config.step_seconds();

    // --------------- ECS world + resources ---------------
    let mut world = game::create_world(config, layout);
    world.insert_resource(script);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    game::start(&mut world);

    let mut update = game::build_update_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    let mut frames = 0;
    while frames < max_frames && !world.resource::<WorldSignals>().has_flag("quit_game") {
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
        frames += 1;
    }

    let mut players = world.query_filtered::<&Transform2D, With<Player>>();
    for transform in players.iter(&world) {
        info!("Player ended at {:?}", transform.position());
    }
    let signals = world.resource::<WorldSignals>();
    info!(
        "Stopped after {} steps in state {:?} (level finished: {}, torch held: {})",
        frames,
        world.resource::<GameState>().get(),
        signals.has_flag("level_finished"),
        signals.has_flag("torch_held")
    );
}
