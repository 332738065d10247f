//! Game configuration: arena geometry, stat tables, AI tuning and levels.
//!
//! Everything here is static data consumed by the simulation. The defaults
//! reproduce the shipped game; a JSON file may override any section.

use std::collections::BTreeMap;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::campaign;
use crate::constants::*;
use crate::enums::EnemyKind;
use crate::error::{ConfigError, Result};
use crate::types::Rect;

/// Playable area in pixels. Projectiles leaving it are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl ArenaConfig {
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Tile grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Cell edge length in pixels.
    pub tile_size: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            tile_size: TILE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub size: f32,
    pub speed: f32,
    pub max_health: u32,
    pub fire_cooldown: f32,
    pub spawn_invulnerability: f32,
    pub spawn: Vec2,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            max_health: PLAYER_MAX_HEALTH,
            fire_cooldown: PLAYER_FIRE_COOLDOWN,
            spawn_invulnerability: PLAYER_SPAWN_INVULNERABILITY,
            spawn: Vec2::from(PLAYER_SPAWN),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub size: f32,
    pub speed: f32,
    pub damage: u32,
    pub muzzle_margin: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            size: PROJECTILE_SIZE,
            speed: PROJECTILE_SPEED,
            damage: PROJECTILE_DAMAGE,
            muzzle_margin: MUZZLE_MARGIN,
        }
    }
}

/// Durations of the visual feedback the core reports to the FX layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub hit_flash_duration: f32,
    pub death_duration: f32,
    pub shake_duration: f32,
    pub shake_magnitude: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            hit_flash_duration: HIT_FLASH_DURATION,
            death_duration: DEATH_DURATION,
            shake_duration: CAMERA_SHAKE_DURATION,
            shake_magnitude: CAMERA_SHAKE_MAGNITUDE,
        }
    }
}

/// Tuning shared by every enemy decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    pub retreat_threshold: f32,
    pub retreat_duration: f32,
    pub patrol_turn_min: f32,
    pub patrol_turn_max: f32,
    pub chase_speed_factor: f32,
    pub retreat_speed_factor: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            retreat_threshold: RETREAT_THRESHOLD,
            retreat_duration: RETREAT_DURATION,
            patrol_turn_min: PATROL_TURN_MIN,
            patrol_turn_max: PATROL_TURN_MAX,
            chase_speed_factor: CHASE_SPEED_FACTOR,
            retreat_speed_factor: RETREAT_SPEED_FACTOR,
        }
    }
}

/// Session-wide rules: lives, scoring, spawning and frame clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRules {
    pub starting_lives: u32,
    pub max_active_enemies: usize,
    pub kill_score: u32,
    pub max_frame_dt: f32,
    pub enemy_spawn_points: Vec<Vec2>,
    pub enemy_spawn_invulnerability: f32,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            max_active_enemies: MAX_ACTIVE_ENEMIES,
            kill_score: KILL_SCORE,
            max_frame_dt: MAX_FRAME_DT,
            enemy_spawn_points: ENEMY_SPAWN_POINTS.iter().copied().map(Vec2::from).collect(),
            enemy_spawn_invulnerability: ENEMY_SPAWN_INVULNERABILITY,
        }
    }
}

/// Static stats for one enemy kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub size: f32,
    pub speed: f32,
    pub max_health: u32,
    pub fire_cooldown: f32,
    pub detect_range: f32,
    pub attack_range: f32,
}

/// `count` enemies of one kind within a level's spawn table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveEntry {
    #[serde(rename = "type")]
    pub kind: EnemyKind,
    pub count: u32,
}

impl WaveEntry {
    pub fn new(kind: EnemyKind, count: u32) -> Self {
        Self { kind, count }
    }
}

/// One hand-authored level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    /// Text rows over `S` (steel), `B` (brick) and `.` (empty).
    pub layout: Vec<String>,
    /// Spawn table, consumed in declared order.
    pub enemies: Vec<WaveEntry>,
}

impl LevelDef {
    pub fn total_enemies(&self) -> u32 {
        self.enemies.iter().map(|entry| entry.count).sum()
    }
}

/// Complete static configuration for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub grid: GridSpec,
    pub player: PlayerConfig,
    pub projectile: ProjectileConfig,
    pub effects: EffectsConfig,
    pub ai: AiTuning,
    pub session: SessionRules,
    pub enemy_types: BTreeMap<EnemyKind, EnemyStats>,
    pub levels: Vec<LevelDef>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let enemy_types = [EnemyKind::Scout, EnemyKind::Heavy, EnemyKind::Sniper]
            .into_iter()
            .map(|kind| (kind, campaign::default_stats(kind)))
            .collect();
        Self {
            arena: ArenaConfig::default(),
            grid: GridSpec::default(),
            player: PlayerConfig::default(),
            projectile: ProjectileConfig::default(),
            effects: EffectsConfig::default(),
            ai: AiTuning::default(),
            session: SessionRules::default(),
            enemy_types,
            levels: campaign::default_levels(),
        }
    }
}

impl GameConfig {
    /// Parse, normalise and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: GameConfig = serde_json::from_str(json)?;
        config.truncate_layouts();
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Stat table lookup by tag.
    pub fn stats(&self, kind: EnemyKind) -> Option<&EnemyStats> {
        self.enemy_types.get(&kind)
    }

    /// Drop layout rows and columns past the grid edge.
    fn truncate_layouts(&mut self) {
        let (width, height) = (self.grid.width, self.grid.height);
        for level in &mut self.levels {
            if level.layout.len() > height {
                tracing::warn!(
                    "level {:?}: {} layout rows, ignoring rows past {}",
                    level.name,
                    level.layout.len(),
                    height
                );
                level.layout.truncate(height);
            }
            for (index, row) in level.layout.iter_mut().enumerate() {
                if row.chars().count() > width {
                    tracing::warn!(
                        "level {:?} row {}: ignoring columns past {}",
                        level.name,
                        index,
                        width
                    );
                    *row = row.chars().take(width).collect();
                }
            }
        }
    }

    /// Check the invariants the simulation relies on.
    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        if self.session.enemy_spawn_points.is_empty() {
            return Err(ConfigError::NoSpawnPoints);
        }
        if self.grid.width == 0 || self.grid.height == 0 || self.grid.tile_size <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "grid",
                reason: "dimensions and tile size must be positive",
            });
        }
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "arena",
                reason: "dimensions must be positive",
            });
        }
        if self.player.size <= 0.0 || self.player.speed <= 0.0 || self.player.max_health == 0 {
            return Err(ConfigError::InvalidValue {
                field: "player",
                reason: "size, speed and max_health must be positive",
            });
        }
        if self.projectile.size <= 0.0 || self.projectile.speed <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "projectile",
                reason: "size and speed must be positive",
            });
        }
        if self.ai.patrol_turn_min < 0.0 || self.ai.patrol_turn_min > self.ai.patrol_turn_max {
            return Err(ConfigError::InvalidValue {
                field: "ai.patrol_turn_min",
                reason: "must be non-negative and not above patrol_turn_max",
            });
        }
        if self.session.max_frame_dt <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "session.max_frame_dt",
                reason: "must be positive",
            });
        }
        for stats in self.enemy_types.values() {
            if stats.size <= 0.0 || stats.speed <= 0.0 || stats.max_health == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "enemy_types",
                    reason: "size, speed and max_health must be positive",
                });
            }
        }

        for level in &self.levels {
            if level.layout.len() < self.grid.height {
                return Err(ConfigError::LayoutRows {
                    level: level.name.clone(),
                    expected: self.grid.height,
                    found: level.layout.len(),
                });
            }
            for (row, text) in level.layout.iter().enumerate() {
                let found = text.chars().count();
                if found < self.grid.width {
                    return Err(ConfigError::LayoutColumns {
                        level: level.name.clone(),
                        row,
                        expected: self.grid.width,
                        found,
                    });
                }
            }
            for entry in &level.enemies {
                if !self.enemy_types.contains_key(&entry.kind) {
                    return Err(ConfigError::UnknownEnemyType {
                        level: level.name.clone(),
                        kind: entry.kind,
                    });
                }
            }
        }

        Ok(())
    }
}
