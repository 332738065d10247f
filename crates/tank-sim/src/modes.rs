//! Top-level game modes on the shared state machine.
//!
//! Menu waits for Fire, Playing runs the session tick, GameOver waits for
//! Restart. Entering Playing after a finished game resets the session.

use tank_ai::fsm::{StateDef, StateMachine};
use tank_core::enums::{GameMode, Outcome};
use tank_core::events::GameEvent;

use crate::session::Session;

fn menu_transition(session: &Session) -> Option<GameMode> {
    session.input.fire.then_some(GameMode::Playing)
}

fn enter_menu(session: &mut Session) {
    session.events.push(GameEvent::ModeChanged {
        mode: GameMode::Menu,
    });
}

fn playing_transition(session: &Session) -> Option<GameMode> {
    session.outcome.map(|_| GameMode::GameOver)
}

fn enter_playing(session: &mut Session) {
    if session.outcome.is_some() {
        session.reset();
    }
    session.events.push(GameEvent::ModeChanged {
        mode: GameMode::Playing,
    });
}

fn playing_update(session: &mut Session, dt: f32) {
    session.tick(dt);
}

fn game_over_transition(session: &Session) -> Option<GameMode> {
    session.input.restart.then_some(GameMode::Playing)
}

fn enter_game_over(session: &mut Session) {
    let victory = session.outcome == Some(Outcome::Victory);
    session.events.push(GameEvent::ModeChanged {
        mode: GameMode::GameOver,
    });
    session.events.push(GameEvent::GameOver { victory });
}

fn idle(_session: &mut Session, _dt: f32) {}

/// Mode machine starting in Menu.
pub fn build(session: &mut Session) -> StateMachine<GameMode, Session> {
    StateMachine::start(
        StateDef::new(GameMode::Menu, menu_transition, idle).on_enter(enter_menu),
        [
            StateDef::new(GameMode::Playing, playing_transition, playing_update)
                .on_enter(enter_playing),
            StateDef::new(GameMode::GameOver, game_over_transition, idle)
                .on_enter(enter_game_over),
        ],
        session,
    )
}
