//! Vehicles: the player's tank and every enemy share this type.

use glam::Vec2;

use tank_core::config::{EffectsConfig, EnemyStats, PlayerConfig, ProjectileConfig};
use tank_core::enums::Faction;
use tank_core::events::GameEvent;
use tank_core::state::VehicleView;
use tank_core::types::{Body, Direction, Rect, VehicleId};
use tank_terrain::TileMap;

use crate::projectile::Projectile;

/// Static parameters a vehicle is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSpec {
    pub size: f32,
    pub speed: f32,
    pub max_health: u32,
    /// Seconds between shots.
    pub fire_cooldown: f32,
}

impl From<&PlayerConfig> for VehicleSpec {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            size: config.size,
            speed: config.speed,
            max_health: config.max_health,
            fire_cooldown: config.fire_cooldown,
        }
    }
}

impl From<&EnemyStats> for VehicleSpec {
    fn from(stats: &EnemyStats) -> Self {
        Self {
            size: stats.size,
            speed: stats.speed,
            max_health: stats.max_health,
            fire_cooldown: stats.fire_cooldown,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub faction: Faction,
    /// Centre, in pixels.
    pub position: Vec2,
    pub size: f32,
    /// Pixels per second.
    pub speed: f32,
    pub facing: Direction,
    pub max_health: u32,
    pub health: u32,
    /// Time until the next shot is allowed.
    pub cooldown: f32,
    pub fire_cooldown: f32,
    pub invulnerability: f32,
    pub hit_flash: f32,
    /// False from the moment health reaches zero.
    pub alive: bool,
    /// Playing the death sequence: not collidable, not damageable, inert.
    pub dying: bool,
    pub death_timer: f32,
    /// Set once the session has reacted to this death.
    pub death_handled: bool,
}

impl Vehicle {
    pub fn new(
        id: VehicleId,
        faction: Faction,
        position: Vec2,
        spec: VehicleSpec,
        invulnerability: f32,
    ) -> Self {
        Self {
            id,
            faction,
            position,
            size: spec.size,
            speed: spec.speed,
            facing: Direction::Up,
            max_health: spec.max_health,
            health: spec.max_health,
            cooldown: 0.0,
            fire_cooldown: spec.fire_cooldown,
            invulnerability,
            hit_flash: 0.0,
            alive: true,
            dying: false,
            death_timer: 0.0,
            death_handled: false,
        }
    }

    /// Fresh player tank at the configured spawn point.
    pub fn player(id: VehicleId, config: &PlayerConfig) -> Self {
        Self::new(
            id,
            Faction::Player,
            config.spawn,
            VehicleSpec::from(config),
            config.spawn_invulnerability,
        )
    }

    pub fn is_player(&self) -> bool {
        self.faction == Faction::Player
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability > 0.0
    }

    /// The death sequence has run its full length.
    pub fn death_finished(&self) -> bool {
        self.dying && self.death_timer <= 0.0
    }

    /// Slide by `delta`, one axis at a time.
    ///
    /// The X step is kept only if the shifted rect is clear of the map and of
    /// every living vehicle in `others`; the Y step is then tried from the
    /// resulting position.
    pub fn attempt_move<'a, I>(&mut self, delta: Vec2, map: &TileMap, others: I)
    where
        I: IntoIterator<Item = &'a Vehicle> + Clone,
    {
        if !self.alive || self.dying {
            return;
        }
        let next_x = Vec2::new(self.position.x + delta.x, self.position.y);
        if self.is_clear_at(next_x, map, others.clone()) {
            self.position = next_x;
        }
        let next_y = Vec2::new(self.position.x, self.position.y + delta.y);
        if self.is_clear_at(next_y, map, others) {
            self.position = next_y;
        }
    }

    fn is_clear_at<'a>(
        &self,
        center: Vec2,
        map: &TileMap,
        others: impl IntoIterator<Item = &'a Vehicle>,
    ) -> bool {
        let rect = Rect::from_center(center, self.size);
        if map.is_blocked(&rect) {
            return false;
        }
        !others
            .into_iter()
            .any(|other| other.id != self.id && other.alive && rect.overlaps(&other.rect()))
    }

    /// Spawn a projectile just ahead of the barrel. Returns whether it fired.
    pub fn fire(&mut self, config: &ProjectileConfig, sink: &mut Vec<Projectile>) -> bool {
        if self.cooldown > 0.0 || !self.alive || self.dying {
            return false;
        }
        let offset = self.size / 2.0 + config.size / 2.0 + config.muzzle_margin;
        let origin = self.position + self.facing.unit() * offset;
        sink.push(Projectile::new(
            origin,
            self.facing,
            self.id,
            self.is_player(),
            config,
        ));
        self.cooldown = self.fire_cooldown;
        true
    }

    /// Apply damage. Returns true when this hit started the death sequence.
    pub fn take_damage(
        &mut self,
        amount: u32,
        effects: &EffectsConfig,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        if self.is_invulnerable() || self.dying {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        self.hit_flash = effects.hit_flash_duration;
        events.push(GameEvent::Hit {
            target: self.id,
            position: self.position,
        });
        if self.health == 0 {
            self.alive = false;
            self.dying = true;
            self.death_timer = effects.death_duration;
            self.death_handled = false;
            events.push(GameEvent::Death {
                target: self.id,
                position: self.position,
            });
            return true;
        }
        false
    }

    /// Decay every timer toward zero.
    pub fn tick_timers(&mut self, dt: f32) {
        self.cooldown = (self.cooldown - dt).max(0.0);
        self.invulnerability = (self.invulnerability - dt).max(0.0);
        self.hit_flash = (self.hit_flash - dt).max(0.0);
        if self.dying {
            self.death_timer = (self.death_timer - dt).max(0.0);
        }
    }

    pub fn view(&self, effects: &EffectsConfig) -> VehicleView {
        let death_progress = if self.dying && effects.death_duration > 0.0 {
            1.0 - self.death_timer / effects.death_duration
        } else if self.dying {
            1.0
        } else {
            0.0
        };
        VehicleView {
            id: self.id,
            faction: self.faction,
            position: self.position,
            size: self.size,
            facing: self.facing,
            health: self.health,
            max_health: self.max_health,
            alive: self.alive,
            dying: self.dying,
            invulnerable: self.is_invulnerable(),
            flashing: self.hit_flash > 0.0,
            death_progress,
        }
    }
}

impl Body for Vehicle {
    fn center(&self) -> Vec2 {
        self.position
    }

    fn size(&self) -> f32 {
        self.size
    }
}
