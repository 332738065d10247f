//! Lifecycle system: reacts to finished death sequences.

use tank_core::enums::Outcome;
use tank_core::events::GameEvent;

use crate::enemy::EnemyTank;
use crate::session::Session;

/// Once the player's death sequence has finished: spend a life, then respawn
/// or record the defeat.
pub fn handle_player_death(session: &mut Session) {
    let player = &mut session.player;
    if !player.death_finished() || player.death_handled {
        return;
    }
    player.death_handled = true;
    session.lives = session.lives.saturating_sub(1);

    if session.lives == 0 {
        tracing::info!("game over: final score {}", session.score);
        session.outcome = Some(Outcome::Defeat);
    } else {
        session.spawn_player();
        tracing::info!("player respawned, {} lives left", session.lives);
        session.events.push(GameEvent::PlayerRespawned {
            lives: session.lives,
        });
    }
    session.push_hud();
}

/// Drop enemies whose death sequence has finished.
pub fn remove_dead_enemies(enemies: &mut Vec<EnemyTank>) {
    enemies.retain(|enemy| !enemy.vehicle.death_finished());
}
