//! Axis-dominant steering: vehicles only ever face a cardinal direction.

use glam::Vec2;
use tank_core::types::Direction;

/// Cardinal direction from `from` toward `target`.
///
/// Picks the horizontal axis only when it strictly dominates, so diagonal
/// ties and the zero vector resolve vertically (zero gives Up).
pub fn direction_to_target(from: Vec2, target: Vec2) -> Direction {
    let delta = target - from;
    if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Opposite of [`direction_to_target`].
pub fn direction_away_from(from: Vec2, threat: Vec2) -> Direction {
    direction_to_target(from, threat).opposite()
}
