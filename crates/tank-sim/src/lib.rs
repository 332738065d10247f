//! Simulation engine for the tank battle.
//!
//! Owns the session state, runs the per-tick systems in a fixed order,
//! drives the Menu / Playing / GameOver mode machine and produces
//! `GameSnapshot`s for the frontend.

pub mod enemy;
pub mod engine;
pub mod levels;
pub mod modes;
pub mod projectile;
pub mod session;
pub mod systems;
pub mod vehicle;

pub use engine::{GameEngine, SimConfig};
pub use tank_core as core;
