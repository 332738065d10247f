//! Default tuning parameters. `GameConfig::default()` is built from these.

// --- Arena & grid ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f32 = 640.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f32 = 480.0;

/// Grid columns.
pub const GRID_WIDTH: usize = 20;

/// Grid rows.
pub const GRID_HEIGHT: usize = 15;

/// Cell edge length in pixels.
pub const TILE_SIZE: f32 = 32.0;

// --- Frame timing ---

/// Largest frame delta the simulation will integrate (seconds).
pub const MAX_FRAME_DT: f32 = 0.05;

/// Nominal frame rate of the headless runner (Hz).
pub const FRAME_RATE: u32 = 60;

// --- Player ---

pub const PLAYER_SIZE: f32 = 26.0;

/// Pixels per second.
pub const PLAYER_SPEED: f32 = 130.0;

pub const PLAYER_MAX_HEALTH: u32 = 3;

/// Seconds between shots.
pub const PLAYER_FIRE_COOLDOWN: f32 = 0.45;

/// Invulnerability granted on every (re)spawn (seconds).
pub const PLAYER_SPAWN_INVULNERABILITY: f32 = 1.2;

/// Player spawn point (centre, pixels).
pub const PLAYER_SPAWN: [f32; 2] = [64.0, ARENA_HEIGHT - 64.0];

pub const STARTING_LIVES: u32 = 3;

// --- Enemies ---

/// Invulnerability granted to freshly spawned enemies (seconds).
pub const ENEMY_SPAWN_INVULNERABILITY: f32 = 0.0;

/// Enemy spawn points (centres, pixels); one is picked at random per spawn.
pub const ENEMY_SPAWN_POINTS: [[f32; 2]; 3] = [
    [ARENA_WIDTH - 64.0, 64.0],
    [ARENA_WIDTH / 2.0, 64.0],
    [64.0, 64.0],
];

/// Enemies allowed on the field at once.
pub const MAX_ACTIVE_ENEMIES: usize = 3;

/// Score for each enemy destroyed by the player.
pub const KILL_SCORE: u32 = 100;

// --- Projectiles ---

pub const PROJECTILE_SIZE: f32 = 6.0;

/// Pixels per second.
pub const PROJECTILE_SPEED: f32 = 260.0;

pub const PROJECTILE_DAMAGE: u32 = 1;

/// Gap between the firing vehicle's edge and a new projectile's edge (pixels).
pub const MUZZLE_MARGIN: f32 = 2.0;

// --- Effects ---

pub const HIT_FLASH_DURATION: f32 = 0.1;

/// Length of the dying sub-state (seconds).
pub const DEATH_DURATION: f32 = 0.6;

pub const CAMERA_SHAKE_DURATION: f32 = 0.2;

/// Peak camera offset in pixels.
pub const CAMERA_SHAKE_MAGNITUDE: f32 = 4.0;

// --- Enemy AI ---

/// Health ratio at or below which an enemy retreats.
pub const RETREAT_THRESHOLD: f32 = 0.3;

pub const RETREAT_DURATION: f32 = 1.2;

/// Patrol wander duration bounds (seconds).
pub const PATROL_TURN_MIN: f32 = 0.6;
pub const PATROL_TURN_MAX: f32 = 1.6;

/// Speed multiplier while chasing.
pub const CHASE_SPEED_FACTOR: f32 = 1.05;

/// Speed multiplier while retreating.
pub const RETREAT_SPEED_FACTOR: f32 = 1.2;
