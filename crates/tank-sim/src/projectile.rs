//! Projectiles: straight-line movers resolved against the arena, the tile
//! grid and the vehicles, in that order.

use glam::Vec2;

use tank_core::config::{EffectsConfig, ProjectileConfig};
use tank_core::events::GameEvent;
use tank_core::state::ProjectileView;
use tank_core::types::{Body, Direction, Rect, VehicleId};
use tank_terrain::{TileHit, TileMap};

use crate::vehicle::Vehicle;

/// What happened to a projectile during one advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileOutcome {
    /// Already spent before this call; nothing changed.
    Inactive,
    Flying,
    LeftArena,
    HitTerrain(TileHit),
    HitVehicle {
        target: VehicleId,
        target_is_player: bool,
        killed: bool,
        at: Vec2,
    },
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
    pub damage: u32,
    pub direction: Direction,
    /// Vehicle that fired it. Never hit by its own projectile.
    pub owner: VehicleId,
    /// Faction of the owner at the moment of firing.
    pub owner_is_player: bool,
    pub alive: bool,
}

impl Projectile {
    pub fn new(
        position: Vec2,
        direction: Direction,
        owner: VehicleId,
        owner_is_player: bool,
        config: &ProjectileConfig,
    ) -> Self {
        Self {
            position,
            size: config.size,
            speed: config.speed,
            damage: config.damage,
            direction,
            owner,
            owner_is_player,
            alive: true,
        }
    }

    /// Move one step and resolve the first collision.
    ///
    /// At most one vehicle is hit per call: the first living non-owner in
    /// `targets` order whose rect overlaps.
    pub fn advance<'a>(
        &mut self,
        dt: f32,
        arena: &Rect,
        map: &mut TileMap,
        targets: impl IntoIterator<Item = &'a mut Vehicle>,
        effects: &EffectsConfig,
        events: &mut Vec<GameEvent>,
    ) -> ProjectileOutcome {
        if !self.alive {
            return ProjectileOutcome::Inactive;
        }
        self.position += self.direction.unit() * self.speed * dt;
        let rect = self.rect();

        if !rect.is_within(arena) {
            self.alive = false;
            return ProjectileOutcome::LeftArena;
        }

        let tile = map.resolve_projectile_hit(&rect);
        if tile.is_hit() {
            self.alive = false;
            return ProjectileOutcome::HitTerrain(tile);
        }

        let owner = self.owner;
        let hit = targets
            .into_iter()
            .find(|vehicle| vehicle.id != owner && vehicle.alive && rect.overlaps(&vehicle.rect()));
        match hit {
            Some(vehicle) => {
                let killed = vehicle.take_damage(self.damage, effects, events);
                self.alive = false;
                ProjectileOutcome::HitVehicle {
                    target: vehicle.id,
                    target_is_player: vehicle.is_player(),
                    killed,
                    at: self.position,
                }
            }
            None => ProjectileOutcome::Flying,
        }
    }

    pub fn view(&self) -> ProjectileView {
        ProjectileView {
            position: self.position,
            size: self.size,
            direction: self.direction,
            owner_is_player: self.owner_is_player,
        }
    }
}

impl Body for Projectile {
    fn center(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> f32 {
        self.size
    }
}
