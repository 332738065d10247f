//! Wave spawning system: keeps the field topped up from the spawn queue and
//! moves to the next level once a level is cleared.

use tank_core::enums::Outcome;
use tank_core::events::GameEvent;

use crate::levels::LevelAdvance;
use crate::session::Session;

/// Spawn queued enemies until the concurrency cap is reached.
pub fn top_up(session: &mut Session) {
    let cap = session.config.session.max_active_enemies;
    while session.enemies.len() < cap && session.levels.queued() > 0 {
        let id = session.allocate_id();
        let Some(enemy) = session
            .levels
            .spawn_enemy(&session.config, &mut session.rng, id)
        else {
            break;
        };
        session.events.push(GameEvent::EnemySpawned {
            id,
            kind: enemy.kind,
            position: enemy.vehicle.position,
        });
        session.enemies.push(enemy);
    }
}

/// With nothing queued and nothing on the field, start the next level or
/// record the victory.
pub fn advance_if_cleared(session: &mut Session) {
    if session.levels.has_remaining_work(session.enemies.len()) {
        return;
    }
    match session.levels.advance_level() {
        LevelAdvance::Started(index) => {
            tracing::info!("level {} cleared", index);
            session.enemies.clear();
            session.projectiles.clear();
            session.spawn_player();
            session.push_level_started();
            session.push_hud();
        }
        LevelAdvance::CampaignComplete => {
            tracing::info!("campaign complete: final score {}", session.score);
            session.outcome = Some(Outcome::Victory);
        }
    }
}
