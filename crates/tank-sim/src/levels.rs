//! Level progression and the per-level spawn queue.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tank_core::config::{GameConfig, GridSpec, LevelDef};
use tank_core::enums::EnemyKind;
use tank_core::types::{Direction, VehicleId};
use tank_terrain::TileMap;

use crate::enemy::EnemyTank;

/// Result of moving past a cleared level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAdvance {
    Started(usize),
    /// There is no next level.
    CampaignComplete,
}

#[derive(Debug, Clone)]
pub struct LevelManager {
    levels: Vec<LevelDef>,
    grid: GridSpec,
    index: usize,
    queue: VecDeque<EnemyKind>,
    map: TileMap,
}

impl LevelManager {
    /// Manager positioned before the first level with an empty map.
    pub fn new(levels: Vec<LevelDef>, grid: GridSpec) -> Self {
        Self {
            levels,
            grid,
            index: 0,
            queue: VecDeque::new(),
            map: TileMap::new_empty(grid),
        }
    }

    /// Build level `index`'s map and spawn queue. False if there is no such
    /// level; nothing changes in that case.
    pub fn start_level(&mut self, index: usize) -> bool {
        let Some(level) = self.levels.get(index) else {
            return false;
        };
        self.index = index;
        self.map = TileMap::from_layout(&level.layout, self.grid);
        self.queue = level
            .enemies
            .iter()
            .flat_map(|entry| std::iter::repeat(entry.kind).take(entry.count as usize))
            .collect();
        tracing::info!(
            "level {} ({:?}) started: {} enemies queued",
            index + 1,
            level.name,
            self.queue.len()
        );
        true
    }

    /// Pop the next queued enemy and place it at a random spawn point.
    ///
    /// Returns None when the queue is empty. A kind missing from the stat
    /// table is dropped from the queue.
    pub fn spawn_enemy(
        &mut self,
        config: &GameConfig,
        rng: &mut ChaCha8Rng,
        id: VehicleId,
    ) -> Option<EnemyTank> {
        if config.session.enemy_spawn_points.is_empty() {
            return None;
        }
        let kind = self.queue.pop_front()?;
        let Some(stats) = config.stats(kind) else {
            tracing::warn!("no stats for enemy kind {:?}, skipping spawn", kind);
            return None;
        };
        let position = *config.session.enemy_spawn_points.choose(rng)?;
        let facing = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        let brain_seed = rng.gen::<u64>();
        tracing::debug!("spawning {:?} {:?} at {}", kind, id, position);
        Some(EnemyTank::new(
            id,
            kind,
            position,
            facing,
            stats,
            &config.ai,
            config.session.enemy_spawn_invulnerability,
            brain_seed,
        ))
    }

    /// Enemies still queued or on the field.
    pub fn has_remaining_work(&self, active: usize) -> bool {
        !self.queue.is_empty() || active > 0
    }

    pub fn advance_level(&mut self) -> LevelAdvance {
        let next = self.index + 1;
        if self.start_level(next) {
            LevelAdvance::Started(next)
        } else {
            LevelAdvance::CampaignComplete
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn level(&self) -> Option<&LevelDef> {
        self.levels.get(self.index)
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut TileMap {
        &mut self.map
    }
}
