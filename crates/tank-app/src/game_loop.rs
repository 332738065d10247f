//! Game loop thread: runs the engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Input arrives via `mpsc` channel; the last `Input` received
//! stays held until the next one.

use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tank_core::constants::FRAME_RATE;
use tank_core::events::GameEvent;
use tank_core::input::InputSnapshot;
use tank_core::state::GameSnapshot;
use tank_sim::engine::{GameEngine, SimConfig};

use crate::state::{AppState, GameLoopCommand};

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Frame delta fed to the engine (seconds).
const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

/// Spawn the game loop on its own thread and attach it to `state`.
///
/// With `paced` false the loop runs frames back to back.
pub fn spawn_game_loop(
    config: SimConfig,
    state: &AppState,
    paced: bool,
) -> std::io::Result<JoinHandle<()>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::clone(&state.latest_snapshot);
    let running = Arc::clone(&state.running);

    running.store(true, Ordering::SeqCst);
    let handle = std::thread::Builder::new()
        .name("tank-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, paced);
            running.store(false, Ordering::SeqCst);
        });
    let handle = match handle {
        Ok(handle) => handle,
        Err(err) => {
            state.running.store(false, Ordering::SeqCst);
            return Err(err);
        }
    };

    if let Ok(mut tx) = state.command_tx.lock() {
        *tx = Some(cmd_tx);
    }
    Ok(handle)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
    paced: bool,
) {
    tracing::info!("game loop started (seed {})", config.seed);
    let mut engine = GameEngine::new(config);
    let mut input = InputSnapshot::default();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain pending commands; the newest input wins
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(held)) => input = held,
                Ok(GameLoopCommand::Shutdown) => {
                    tracing::info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame
        let snapshot = engine.frame(FRAME_DT, input);
        log_events(&snapshot.events);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        if !paced {
            continue;
        }
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::HudChanged { hud } => tracing::info!(
                "score {} | lives {} | level {}",
                hud.score,
                hud.lives,
                hud.level
            ),
            GameEvent::ModeChanged { mode } => tracing::info!("mode: {:?}", mode),
            GameEvent::GameOver { victory } => {
                tracing::info!("{}", if *victory { "victory" } else { "game over" })
            }
            GameEvent::EnemySpawned { id, kind, position } => {
                tracing::debug!("{:?} {:?} spawned at {}", kind, id, position)
            }
            GameEvent::TileDestroyed { col, row } => {
                tracing::debug!("brick destroyed at ({}, {})", col, row)
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tank_core::enums::GameMode;
    use tank_core::input::Control;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        let fire = InputSnapshot::default().with(Control::Fire);
        tx.send(GameLoopCommand::Input(fire)).unwrap();
        tx.send(GameLoopCommand::Input(InputSnapshot::default()))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], GameLoopCommand::Input(held) if held.fire));
        assert!(matches!(commands[1], GameLoopCommand::Input(held) if !held.fire));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_runs_and_shuts_down() {
        let state = AppState::new();
        let handle = spawn_game_loop(SimConfig::default(), &state, false).unwrap();
        assert!(state.send(GameLoopCommand::Input(
            InputSnapshot::default().with(Control::Fire)
        )));

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut playing = false;
        while Instant::now() < deadline {
            if state
                .snapshot()
                .is_some_and(|snapshot| snapshot.mode == GameMode::Playing)
            {
                playing = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(playing, "loop never entered Playing");

        assert!(state.send(GameLoopCommand::Shutdown));
        handle.join().unwrap();
        assert!(!state.is_running());
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = GameEngine::new(SimConfig::default());
        let fire = InputSnapshot::default().with(Control::Fire);
        for _ in 0..120 {
            engine.frame(FRAME_DT, fire);
        }

        let snapshot = engine.frame(FRAME_DT, fire);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
