//! Systems that run over the session each tick.
//!
//! Each system is a free function over the pieces of session state it needs.
//! `Session::tick` calls them in a fixed order; later systems see every
//! mutation made by earlier ones in the same tick.

pub mod enemy_ai;
pub mod lifecycle;
pub mod player_input;
pub mod projectiles;
pub mod snapshot;
pub mod timers;
pub mod wave_spawner;
