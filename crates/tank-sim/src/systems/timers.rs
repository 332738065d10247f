//! Timer system: cooldown, invulnerability, hit flash and death timers.

use crate::enemy::EnemyTank;
use crate::vehicle::Vehicle;

pub fn run(player: &mut Vehicle, enemies: &mut [EnemyTank], dt: f32) {
    player.tick_timers(dt);
    for enemy in enemies {
        enemy.vehicle.tick_timers(dt);
    }
}
