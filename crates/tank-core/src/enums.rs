//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    /// Brick: removed by the first projectile that strikes it.
    Destructible,
    /// Steel, and everything outside the grid.
    Indestructible,
}

impl Tile {
    /// Layout symbol: `S` steel, `B` brick, `.` empty.
    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Destructible => 'B',
            Tile::Indestructible => 'S',
        }
    }

    /// Parse a layout symbol. Unknown symbols are empty ground.
    pub fn from_symbol(symbol: char) -> Tile {
        match symbol {
            'B' => Tile::Destructible,
            'S' => Tile::Indestructible,
            _ => Tile::Empty,
        }
    }
}

/// Enemy type tag, used as the key into the enemy stat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    /// Light and quick.
    Scout,
    /// Slow, four hit points.
    Heavy,
    /// Long detection and attack range, fast reload.
    Sniper,
}

/// Which side a vehicle (and its projectiles) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// Enemy behaviour state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiState {
    /// Wander in a random cardinal direction, turning on a timer.
    #[default]
    Patrol,
    /// Close in on the player.
    Chase,
    /// Hold position, face the player and fire.
    Attack,
    /// Run away from the player for a fixed duration.
    Retreat,
}

/// Top-level game mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// How a playthrough ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}
