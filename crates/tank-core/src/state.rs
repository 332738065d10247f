//! Game state snapshot: everything a renderer or HUD needs after a frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Direction, SimTime, VehicleId};

/// Complete visible state produced by each frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub mode: GameMode,
    pub hud: HudView,
    /// Set once the playthrough has ended.
    pub outcome: Option<Outcome>,
    pub player: VehicleView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub map: MapView,
    /// Events emitted since the previous snapshot.
    pub events: Vec<GameEvent>,
}

impl GameSnapshot {
    pub fn victory(&self) -> bool {
        self.outcome == Some(Outcome::Victory)
    }
}

/// Plain values for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub lives: u32,
    /// 1-based level number.
    pub level: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleView {
    pub id: VehicleId,
    pub faction: Faction,
    pub position: Vec2,
    pub size: f32,
    pub facing: Direction,
    pub health: u32,
    pub max_health: u32,
    pub alive: bool,
    pub dying: bool,
    /// Draw the invulnerability outline.
    pub invulnerable: bool,
    /// Draw the hit flash overlay.
    pub flashing: bool,
    /// 0.0 at death, 1.0 when the death sequence has finished.
    pub death_progress: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub vehicle: VehicleView,
    pub kind: EnemyKind,
    pub ai_state: AiState,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub size: f32,
    pub direction: Direction,
    pub owner_is_player: bool,
}

/// Current tile grid as layout rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapView {
    pub width: usize,
    pub height: usize,
    pub tile_size: f32,
    pub rows: Vec<String>,
}
