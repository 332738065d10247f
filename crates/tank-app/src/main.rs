//! Headless tank battle runner.
//!
//! Usage: tank-app [--seed <n>] [--seconds <s>] [--config <file>] [--fast] [--json]
//!
//! Runs the game loop on its own thread with the autopilot at the controls
//! and prints a summary of the final state.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tank_app::autopilot::Autopilot;
use tank_app::game_loop::{spawn_game_loop, FRAME_DURATION};
use tank_app::state::{AppState, GameLoopCommand};
use tank_core::config::GameConfig;
use tank_core::constants::FRAME_RATE;
use tank_core::enums::GameMode;
use tank_sim::engine::SimConfig;

struct Options {
    seed: u64,
    seconds: f64,
    config: Option<String>,
    fast: bool,
    json: bool,
}

fn print_usage() {
    eprintln!(
        "Usage: tank-app [--seed <n>] [--seconds <s>] [--config <file>] [--fast] [--json]"
    );
}

fn parse_args() -> Result<Options> {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        seed: 42,
        seconds: 30.0,
        config: None,
        fast: false,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--seed" && i + 1 < args.len() {
            options.seed = args[i + 1]
                .parse()
                .with_context(|| format!("invalid seed: {}", args[i + 1]))?;
            i += 2;
        } else if args[i] == "--seconds" && i + 1 < args.len() {
            options.seconds = args[i + 1]
                .parse()
                .with_context(|| format!("invalid duration: {}", args[i + 1]))?;
            if options.seconds.is_nan() || options.seconds <= 0.0 {
                bail!("--seconds must be positive");
            }
            i += 2;
        } else if args[i] == "--config" && i + 1 < args.len() {
            options.config = Some(args[i + 1].clone());
            i += 2;
        } else if args[i] == "--fast" {
            options.fast = true;
            i += 1;
        } else if args[i] == "--json" {
            options.json = true;
            i += 1;
        } else if args[i] == "--help" || args[i] == "-h" {
            print_usage();
            std::process::exit(0);
        } else {
            print_usage();
            bail!("unexpected argument: {}", args[i]);
        }
    }
    Ok(options)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = parse_args()?;
    let game = match &options.config {
        Some(path) => GameConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path))?,
        None => GameConfig::default(),
    };

    let state = AppState::new();
    let handle = spawn_game_loop(
        SimConfig {
            seed: options.seed,
            game,
        },
        &state,
        !options.fast,
    )
    .context("failed to spawn game loop")?;

    let target_ticks = (options.seconds * FRAME_RATE as f64).ceil() as u64;
    let poll = if options.fast {
        Duration::from_micros(200)
    } else {
        FRAME_DURATION
    };
    let mut autopilot = Autopilot::new();
    let mut last_tick = None;
    let mut frames_seen = 0u64;

    while state.is_running() {
        if let Some(snapshot) = state.snapshot() {
            if last_tick != Some((snapshot.time.tick, snapshot.mode)) {
                last_tick = Some((snapshot.time.tick, snapshot.mode));
                frames_seen += 1;
                autopilot.observe(&snapshot);
                state.send(GameLoopCommand::Input(autopilot.input()));
            }
            if snapshot.time.tick >= target_ticks {
                break;
            }
        }
        std::thread::sleep(poll);
    }

    state.send(GameLoopCommand::Shutdown);
    if handle.join().is_err() {
        bail!("game loop thread panicked");
    }

    let snapshot = state
        .snapshot()
        .context("game loop produced no snapshot")?;
    tracing::info!("observed {} frames", frames_seen);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let result = match (snapshot.mode, snapshot.victory()) {
            (GameMode::GameOver, true) => "victory",
            (GameMode::GameOver, false) => "defeat",
            _ => "in progress",
        };
        println!("seed:        {}", options.seed);
        println!("ticks:       {}", snapshot.time.tick);
        println!("sim seconds: {:.2}", snapshot.time.elapsed_secs);
        println!("level:       {}", snapshot.hud.level);
        println!("score:       {}", snapshot.hud.score);
        println!("lives:       {}", snapshot.hud.lives);
        println!(
            "enemies:     {} on field",
            snapshot.enemies.iter().filter(|e| e.vehicle.alive).count()
        );
        println!("result:      {}", result);
    }
    Ok(())
}
