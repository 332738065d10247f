//! Player input system: facing, movement and fire from the held controls.

use glam::Vec2;

use tank_core::input::InputSnapshot;
use tank_core::types::Direction;

use crate::session::Session;

/// Facing and unnormalised movement axes for the held direction controls.
///
/// Every held control contributes to the axes. Facing is taken from the last
/// one in Up, Down, Left, Right order, or None when none is held.
pub fn steer(input: &InputSnapshot) -> (Option<Direction>, Vec2) {
    let mut axes = Vec2::ZERO;
    let mut facing = None;
    for (held, direction) in [
        (input.up, Direction::Up),
        (input.down, Direction::Down),
        (input.left, Direction::Left),
        (input.right, Direction::Right),
    ] {
        if held {
            axes += direction.unit();
            facing = Some(direction);
        }
    }
    (facing, axes)
}

pub fn run(session: &mut Session, dt: f32) {
    let input = session.input;
    let (facing, axes) = steer(&input);
    let player = &mut session.player;

    if let Some(facing) = facing {
        player.facing = facing;
    }
    if axes != Vec2::ZERO {
        let delta = axes.normalize_or_zero() * player.speed * dt;
        let others = session.enemies.iter().map(|enemy| &enemy.vehicle);
        player.attempt_move(delta, session.levels.map(), others);
    }
    if input.fire {
        player.fire(&session.config.projectile, &mut session.projectiles);
    }
}
