//! Tile grid for the tank battle simulation.
//!
//! Layout parsing, point and rectangle queries against the grid, and
//! projectile impacts that consume destructible tiles.

pub use tank_core as core;

pub mod grid;
pub mod layout;

// Re-export key types for convenience.
pub use grid::{TileHit, TileMap};
pub use layout::{parse_layout, render_layout};
