//! Snapshot system: builds a complete `GameSnapshot` from the session.
//!
//! Read-only apart from draining the pending events.

use tank_core::enums::GameMode;
use tank_core::state::{GameSnapshot, MapView};
use tank_core::types::SimTime;

use crate::session::Session;

pub fn build_snapshot(session: &mut Session, mode: GameMode, time: SimTime) -> GameSnapshot {
    let effects = session.config.effects;
    let map = session.levels.map();
    GameSnapshot {
        time,
        mode,
        hud: session.hud(),
        outcome: session.outcome,
        player: session.player.view(&effects),
        enemies: session
            .enemies
            .iter()
            .map(|enemy| enemy.view(&effects))
            .collect(),
        projectiles: session.projectiles.iter().map(|p| p.view()).collect(),
        map: MapView {
            width: map.width(),
            height: map.height(),
            tile_size: map.tile_size(),
            rows: map.to_rows(),
        },
        events: session.drain_events(),
    }
}
