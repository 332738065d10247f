//! Events emitted by the simulation for the FX and HUD layers.
//!
//! The core pushes these as they happen and never waits on them; the engine
//! drains them into each frame's snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, GameMode};
use crate::state::HudView;
use crate::types::VehicleId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A vehicle took damage.
    Hit { target: VehicleId, position: Vec2 },
    /// A vehicle's health reached zero; its death sequence starts.
    Death { target: VehicleId, position: Vec2 },
    /// The player was hit.
    CameraShake { duration: f32, magnitude: f32 },
    /// A destructible tile was consumed by a projectile.
    TileDestroyed { col: usize, row: usize },
    EnemySpawned {
        id: VehicleId,
        kind: EnemyKind,
        position: Vec2,
    },
    PlayerRespawned { lives: u32 },
    LevelStarted { index: usize, name: String },
    /// Score, lives or level changed.
    HudChanged { hud: HudView },
    ModeChanged { mode: GameMode },
    GameOver { victory: bool },
}
