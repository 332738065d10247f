//! Game engine: the per-frame entry point.
//!
//! `GameEngine` owns the session and the mode machine, clamps the frame
//! delta, and produces `GameSnapshot`s. Completely headless, enabling
//! deterministic testing.

use tank_ai::fsm::StateMachine;
use tank_core::config::GameConfig;
use tank_core::enums::GameMode;
use tank_core::input::InputSnapshot;
use tank_core::state::GameSnapshot;
use tank_core::types::SimTime;

use crate::modes;
use crate::session::Session;
use crate::systems;

/// Configuration for starting a new game.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same game.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

pub struct GameEngine {
    modes: StateMachine<GameMode, Session>,
    session: Session,
    time: SimTime,
}

impl GameEngine {
    /// New engine in Menu with the first level loaded.
    pub fn new(config: SimConfig) -> Self {
        let mut session = Session::new(config.game, config.seed);
        let modes = modes::build(&mut session);
        Self {
            modes,
            session,
            time: SimTime::default(),
        }
    }

    /// Run one frame of `dt` seconds with the given held controls.
    ///
    /// `dt` is clamped to `[0, max_frame_dt]`; a NaN delta counts as zero.
    pub fn frame(&mut self, dt: f32, input: InputSnapshot) -> GameSnapshot {
        let max_dt = self.session.config.session.max_frame_dt;
        let dt = if dt.is_nan() { 0.0 } else { dt.clamp(0.0, max_dt) };

        self.session.set_input(input);
        self.modes.update(&mut self.session, dt);
        if self.modes.current() == GameMode::Playing {
            self.time.advance(dt);
        }

        systems::snapshot::build_snapshot(&mut self.session, self.modes.current(), self.time)
    }

    pub fn mode(&self) -> GameMode {
        self.modes.current()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}
