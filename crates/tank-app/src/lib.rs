//! Headless runner for the tank battle simulation.
//!
//! Hosts the engine on a dedicated game-loop thread, feeds it input over a
//! channel and keeps the latest snapshot in shared state for polling.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use tank_core as core;
