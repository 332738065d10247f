//! Scripted stand-in for a human player.
//!
//! Reads the latest snapshot and holds whatever controls a simple
//! "drive at the nearest enemy and keep firing" player would.

use glam::Vec2;
use tank_ai::steering::direction_to_target;
use tank_core::enums::GameMode;
use tank_core::input::{Control, InputSnapshot, InputSource};
use tank_core::state::GameSnapshot;
use tank_core::types::Direction;

/// Frames without progress before the autopilot tries a detour.
const STUCK_FRAMES: u32 = 20;

/// Frames spent on a detour once stuck.
const DETOUR_FRAMES: u32 = 30;

#[derive(Debug, Default)]
pub struct Autopilot {
    mode: GameMode,
    heading: Option<Direction>,
    fire: bool,
    last_position: Option<Vec2>,
    stuck_frames: u32,
    detour: Option<(Direction, u32)>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update held controls from the latest frame.
    pub fn observe(&mut self, snapshot: &GameSnapshot) {
        self.mode = snapshot.mode;
        if snapshot.mode != GameMode::Playing || !snapshot.player.alive {
            self.heading = None;
            self.fire = false;
            self.last_position = None;
            self.stuck_frames = 0;
            self.detour = None;
            return;
        }

        let position = snapshot.player.position;
        let target = snapshot
            .enemies
            .iter()
            .filter(|enemy| enemy.vehicle.alive)
            .map(|enemy| enemy.vehicle.position)
            .min_by(|a, b| {
                a.distance_squared(position)
                    .total_cmp(&b.distance_squared(position))
            });

        if self.last_position == Some(position) && self.heading.is_some() {
            self.stuck_frames += 1;
        } else {
            self.stuck_frames = 0;
        }
        self.last_position = Some(position);

        if let Some((dir, frames)) = self.detour {
            self.heading = Some(dir);
            self.detour = (frames > 1).then(|| (dir, frames - 1));
        } else if let Some(target) = target {
            let direct = direction_to_target(position, target);
            if self.stuck_frames >= STUCK_FRAMES {
                let detour = perpendicular(direct, snapshot.time.tick);
                tracing::debug!("autopilot stuck, detouring {:?}", detour);
                self.detour = Some((detour, DETOUR_FRAMES));
                self.stuck_frames = 0;
                self.heading = Some(detour);
            } else {
                self.heading = Some(direct);
            }
        } else {
            self.heading = None;
        }
        self.fire = target.is_some();
    }

    /// Controls to hold for the next frame.
    pub fn input(&self) -> InputSnapshot {
        InputSnapshot::capture(self)
    }
}

fn perpendicular(dir: Direction, tick: u64) -> Direction {
    let flip = tick % 2 == 0;
    match (dir, flip) {
        (Direction::Up | Direction::Down, true) => Direction::Left,
        (Direction::Up | Direction::Down, false) => Direction::Right,
        (Direction::Left | Direction::Right, true) => Direction::Up,
        (Direction::Left | Direction::Right, false) => Direction::Down,
    }
}

impl InputSource for Autopilot {
    fn is_held(&self, control: Control) -> bool {
        match self.mode {
            GameMode::Menu => control == Control::Fire,
            GameMode::GameOver => control == Control::Restart,
            GameMode::Playing => match control {
                Control::Up => self.heading == Some(Direction::Up),
                Control::Down => self.heading == Some(Direction::Down),
                Control::Left => self.heading == Some(Direction::Left),
                Control::Right => self.heading == Some(Direction::Right),
                Control::Fire => self.fire,
                Control::Restart => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tank_sim::engine::{GameEngine, SimConfig};

    fn playing_snapshot() -> GameSnapshot {
        let mut engine = GameEngine::new(SimConfig::default());
        let fire = InputSnapshot::default().with(Control::Fire);
        engine.frame(1.0 / 60.0, fire);
        engine.frame(1.0 / 60.0, fire)
    }

    #[test]
    fn test_menu_presses_fire() {
        let engine = GameEngine::new(SimConfig::default());
        assert_eq!(engine.mode(), GameMode::Menu);

        let autopilot = Autopilot::new();
        let input = autopilot.input();
        assert!(input.fire);
        assert!(!input.restart);
        assert!(!input.up && !input.down && !input.left && !input.right);
    }

    #[test]
    fn test_game_over_presses_restart() {
        let mut snapshot = playing_snapshot();
        snapshot.mode = GameMode::GameOver;

        let mut autopilot = Autopilot::new();
        autopilot.observe(&snapshot);
        let input = autopilot.input();
        assert!(input.restart);
        assert!(!input.fire);
    }

    #[test]
    fn test_playing_heads_for_nearest_enemy() {
        let mut snapshot = playing_snapshot();
        assert_eq!(snapshot.mode, GameMode::Playing);
        assert!(!snapshot.enemies.is_empty());

        let player = snapshot.player.position;
        let mut near = snapshot.enemies[0].clone();
        near.vehicle.position = player + Vec2::new(80.0, 10.0);
        near.vehicle.alive = true;
        let mut far = near.clone();
        far.vehicle.position = player + Vec2::new(0.0, -300.0);
        snapshot.enemies = vec![far, near];

        let mut autopilot = Autopilot::new();
        autopilot.observe(&snapshot);
        let input = autopilot.input();
        assert!(input.right);
        assert!(!input.up && !input.down && !input.left);
        assert!(input.fire);
    }

    #[test]
    fn test_no_enemies_holds_nothing() {
        let mut snapshot = playing_snapshot();
        snapshot.enemies.clear();

        let mut autopilot = Autopilot::new();
        autopilot.observe(&snapshot);
        assert_eq!(autopilot.input(), InputSnapshot::default());
    }

    #[test]
    fn test_stuck_player_detours() {
        let mut snapshot = playing_snapshot();
        let player = snapshot.player.position;
        let mut enemy = snapshot.enemies[0].clone();
        enemy.vehicle.position = player + Vec2::new(0.0, -200.0);
        enemy.vehicle.alive = true;
        snapshot.enemies = vec![enemy];

        let mut autopilot = Autopilot::new();
        for _ in 0..=STUCK_FRAMES {
            autopilot.observe(&snapshot);
        }
        let input = autopilot.input();
        assert!(input.left || input.right);
        assert!(!input.up);
    }

    #[test]
    fn test_autopilot_drives_engine() {
        let mut engine = GameEngine::new(SimConfig::default());
        let mut autopilot = Autopilot::new();
        let mut fired = false;
        for _ in 0..600 {
            let snapshot = engine.frame(1.0 / 60.0, autopilot.input());
            fired |= !snapshot.projectiles.is_empty();
            autopilot.observe(&snapshot);
        }
        assert_ne!(engine.mode(), GameMode::Menu);
        assert!(fired);
    }
}
