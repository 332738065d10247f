//! The game session: everything one playthrough owns, plus the fixed
//! per-tick pipeline over it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tank_core::config::GameConfig;
use tank_core::enums::Outcome;
use tank_core::events::GameEvent;
use tank_core::input::InputSnapshot;
use tank_core::state::HudView;
use tank_core::types::VehicleId;
use tank_terrain::TileMap;

use crate::enemy::EnemyTank;
use crate::levels::LevelManager;
use crate::projectile::Projectile;
use crate::systems;
use crate::vehicle::Vehicle;

pub struct Session {
    pub(crate) config: GameConfig,
    pub(crate) rng: ChaCha8Rng,
    /// Controls held this frame.
    pub(crate) input: InputSnapshot,
    pub(crate) score: u32,
    pub(crate) lives: u32,
    pub(crate) levels: LevelManager,
    pub(crate) player: Vehicle,
    pub(crate) enemies: Vec<EnemyTank>,
    pub(crate) projectiles: Vec<Projectile>,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl Session {
    /// New session on the first level. The RNG is seeded once here and keeps
    /// running across resets.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let levels = LevelManager::new(config.levels.clone(), config.grid);
        let player = Vehicle::player(VehicleId(0), &config.player);
        let mut session = Self {
            lives: config.session.starting_lives,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            input: InputSnapshot::default(),
            score: 0,
            levels,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            outcome: None,
            events: Vec::new(),
            next_id: 1,
        };
        session.begin_campaign();
        session
    }

    /// Start over from the first level with a full set of lives.
    pub fn reset(&mut self) {
        tracing::info!("session reset");
        self.score = 0;
        self.lives = self.config.session.starting_lives;
        self.outcome = None;
        self.begin_campaign();
    }

    fn begin_campaign(&mut self) {
        self.levels.start_level(0);
        self.enemies.clear();
        self.projectiles.clear();
        self.spawn_player();
        self.push_level_started();
        self.push_hud();
    }

    /// Run the per-tick pipeline once.
    pub fn tick(&mut self, dt: f32) {
        // 1. Player input: facing, movement, fire
        systems::player_input::run(self, dt);
        // 2. Timers
        systems::timers::run(&mut self.player, &mut self.enemies, dt);
        // 3. Enemy decision engines, applied in list order
        systems::enemy_ai::run(
            &self.player,
            &mut self.enemies,
            self.levels.map(),
            &mut self.projectiles,
            &self.config,
            dt,
        );
        // 4-5. Projectiles, then drop the spent ones
        systems::projectiles::run(self, dt);
        // 6. Player death handling
        systems::lifecycle::handle_player_death(self);
        // 7. Finished enemy deaths
        systems::lifecycle::remove_dead_enemies(&mut self.enemies);
        // 8. Top up the field from the spawn queue
        systems::wave_spawner::top_up(self);
        // 9. Level completion
        if self.outcome.is_none() {
            systems::wave_spawner::advance_if_cleared(self);
        }
    }

    pub(crate) fn allocate_id(&mut self) -> VehicleId {
        let id = VehicleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Replace the player with a fresh tank at the spawn point.
    pub(crate) fn spawn_player(&mut self) {
        let id = self.allocate_id();
        self.player = Vehicle::player(id, &self.config.player);
    }

    pub(crate) fn push_hud(&mut self) {
        let hud = self.hud();
        self.events.push(GameEvent::HudChanged { hud });
    }

    pub(crate) fn push_level_started(&mut self) {
        let index = self.levels.index();
        let name = self
            .levels
            .level()
            .map(|level| level.name.clone())
            .unwrap_or_default();
        self.events.push(GameEvent::LevelStarted { index, name });
    }

    /// Take every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn set_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    pub fn hud(&self) -> HudView {
        HudView {
            score: self.score,
            lives: self.lives,
            level: self.levels.index() + 1,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level_index(&self) -> usize {
        self.levels.index()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn player(&self) -> &Vehicle {
        &self.player
    }

    pub fn enemies(&self) -> &[EnemyTank] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn map(&self) -> &TileMap {
        self.levels.map()
    }

    pub fn levels(&self) -> &LevelManager {
        &self.levels
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Vehicle {
        &mut self.player
    }

    #[cfg(test)]
    pub(crate) fn enemies_mut(&mut self) -> &mut Vec<EnemyTank> {
        &mut self.enemies
    }

    #[cfg(test)]
    pub(crate) fn levels_mut(&mut self) -> &mut LevelManager {
        &mut self.levels
    }
}
