//! Headless maze shooter runner

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use arena_engine::foundation::logging;
use arena_engine::foundation::time::Stopwatch;
use maze_shooter::{FrameEvent, GameConfig, InputEvent, Key, Simulation};

const DEFAULT_FRAMES: &str = "600";
const DEFAULT_FIRE_EVERY: &str = "15";
const JUMP_EVERY: u64 = 90;

/// Headless driver: walks toward the nearest enemy and shoots at it
struct Autopilot {
    fire_every: u64,
}

impl Autopilot {
    fn drive(&self, sim: &mut Simulation, frame: u64) {
        if frame == 0 {
            sim.handle_input(InputEvent::KeyDown(Key::W));
        }

        let eye = sim.player().eye;
        let target = sim
            .enemies()
            .iter()
            .map(|enemy| enemy.position)
            .min_by(|a, b| (a - eye).norm_squared().total_cmp(&(b - eye).norm_squared()));

        match target {
            Some(target) => {
                sim.player_mut().view.face(eye, target);
                if self.fire_every > 0 && frame % self.fire_every == 0 {
                    sim.shoot();
                }
            }
            None => sim.handle_input(InputEvent::KeyUp(Key::W)),
        }

        if frame % JUMP_EVERY == JUMP_EVERY / 2 {
            sim.handle_input(InputEvent::KeyDown(Key::Space));
            sim.handle_input(InputEvent::KeyUp(Key::Space));
        }
    }
}

fn main() -> Result<()> {
    let matches = Command::new("maze_shooter")
        .about("Runs the maze shooter headless with a simple autopilot")
        .arg(
            Arg::new("frames")
                .short('f')
                .long("frames")
                .value_name("COUNT")
                .help("Frames to simulate")
                .value_parser(clap::value_parser!(u64))
                .default_value(DEFAULT_FRAMES),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Enemy placement seed, overrides the config file")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Game config file (.toml or .ron)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("NAME")
                .help("Print a score submission for this player name when done"),
        )
        .arg(
            Arg::new("fire-every")
                .long("fire-every")
                .value_name("FRAMES")
                .help("Frames between autopilot shots, 0 to hold fire")
                .value_parser(clap::value_parser!(u64))
                .default_value(DEFAULT_FIRE_EVERY),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Skip per-event log lines")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    logging::init();

    let config_path = matches.get_one::<PathBuf>("config");
    let mut config = GameConfig::load(config_path.map(PathBuf::as_path))
        .with_context(|| format!("Failed to load game config {config_path:?}"))?;
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.simulation.seed = *seed;
    }

    let frames = matches.get_one::<u64>("frames").copied().unwrap_or_default();
    let autopilot = Autopilot {
        fire_every: matches.get_one::<u64>("fire-every").copied().unwrap_or_default(),
    };
    let quiet = matches.get_flag("quiet");

    let mut sim = Simulation::new(config).context("Failed to start simulation")?;
    let stopwatch = Stopwatch::start_new();

    for frame in 0..frames {
        autopilot.drive(&mut sim, frame);
        for event in sim.step() {
            if quiet {
                continue;
            }
            match event {
                FrameEvent::EnemyKilled { .. } => log::info!("Frame {frame}: {event:?}"),
                _ => log::debug!("Frame {frame}: {} {event:?}", event.name()),
            }
        }
    }

    log::info!(
        "Simulated {} frames ({:.1}s) in {:.1}ms, score {}",
        sim.frame(),
        sim.time(),
        stopwatch.elapsed_millis(),
        sim.score()
    );

    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);

    if let Some(name) = matches.get_one::<String>("name") {
        match sim.submission(name) {
            Some(submission) => println!("{}", submission.to_json()?),
            None => log::warn!("Blank player name, no score submission"),
        }
    }

    Ok(())
}
