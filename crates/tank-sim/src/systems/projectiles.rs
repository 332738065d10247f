//! Projectile system: advance every projectile, apply scoring and feedback,
//! then drop the spent ones.

use tank_core::events::GameEvent;
use tank_terrain::TileHit;

use crate::projectile::ProjectileOutcome;
use crate::session::Session;

pub fn run(session: &mut Session, dt: f32) {
    let arena = session.config.arena.bounds();
    let effects = session.config.effects;
    let kill_score = session.config.session.kill_score;
    let mut hud_changed = false;

    for projectile in session.projectiles.iter_mut() {
        let targets = std::iter::once(&mut session.player)
            .chain(session.enemies.iter_mut().map(|enemy| &mut enemy.vehicle));
        let outcome = projectile.advance(
            dt,
            &arena,
            session.levels.map_mut(),
            targets,
            &effects,
            &mut session.events,
        );
        match outcome {
            ProjectileOutcome::HitTerrain(TileHit::Destroyed { col, row }) => {
                session.events.push(GameEvent::TileDestroyed { col, row });
            }
            ProjectileOutcome::HitVehicle {
                target_is_player,
                killed,
                ..
            } => {
                if target_is_player {
                    session.events.push(GameEvent::CameraShake {
                        duration: effects.shake_duration,
                        magnitude: effects.shake_magnitude,
                    });
                }
                if killed && projectile.owner_is_player && !target_is_player {
                    session.score += kill_score;
                    hud_changed = true;
                }
            }
            _ => {}
        }
    }

    session.projectiles.retain(|projectile| projectile.alive);
    if hud_changed {
        session.push_hud();
    }
}
