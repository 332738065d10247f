//! Enemy AI system: runs each living enemy's decision engine in list order
//! and applies its intent straight away, so later enemies see the moves of
//! earlier ones.

use tank_ai::enemy::Facts;
use tank_core::config::GameConfig;
use tank_terrain::TileMap;

use crate::enemy::EnemyTank;
use crate::projectile::Projectile;
use crate::vehicle::Vehicle;

pub fn run(
    player: &Vehicle,
    enemies: &mut [EnemyTank],
    map: &TileMap,
    projectiles: &mut Vec<Projectile>,
    config: &GameConfig,
    dt: f32,
) {
    for index in 0..enemies.len() {
        let (before, rest) = enemies.split_at_mut(index);
        let Some((enemy, after)) = rest.split_first_mut() else {
            continue;
        };
        let vehicle = &mut enemy.vehicle;
        if !vehicle.alive || vehicle.dying {
            continue;
        }

        let facts = Facts::observe(
            vehicle.position,
            player.position,
            vehicle.health,
            vehicle.max_health,
        );
        let intent = enemy.brain.think(vehicle.facing, facts, dt);
        vehicle.facing = intent.facing;

        if let Some(travel) = intent.travel {
            let others = std::iter::once(player)
                .chain(before.iter().map(|other| &other.vehicle))
                .chain(after.iter().map(|other| &other.vehicle));
            vehicle.attempt_move(travel, map, others);
        }
        if intent.fire {
            vehicle.fire(&config.projectile, projectiles);
        }
    }
}
